//! Viewport state for the photo lightbox: zoom factor plus pan offset,
//! and the clamp that keeps both inside the legal range.

/// Rest zoom; the photo is fit to the frame and centered.
pub const ZOOM_MIN: f64 = 1.0;
/// Upper zoom bound (4x magnification).
pub const ZOOM_MAX: f64 = 4.0;
/// Zoom applied per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 0.25;

/// Rendered size of the photo element at gesture time, in CSS pixels.
/// Zero width or height means the image has not been laid out yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderedSize {
    pub width: f64,
    pub height: f64,
}

impl RenderedSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_known(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Zoom and pan applied to the photo. Pan is expressed in CSS pixels
/// relative to the centered fit position; it is only meaningful while
/// magnified, so `zoom == 1` always carries a zero pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::rest()
    }
}

impl ViewportState {
    /// Fit-to-frame state every open starts from.
    pub fn rest() -> Self {
        Self {
            zoom: ZOOM_MIN,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.zoom <= ZOOM_MIN
    }

    /// Render-ready CSS transform: translate by pan, then scale by zoom.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan_x, self.pan_y, self.zoom
        )
    }
}

/// Nearest legal state for a candidate viewport. Zoom lands in
/// `[ZOOM_MIN, ZOOM_MAX]`; at rest pan is forced to `(0, 0)`; while
/// magnified, pan per axis is limited to `(zoom - 1) * rendered / 2`,
/// the overflow of a centered image scaled about its own center, so the
/// photo edge can meet the frame edge but never pass it. Unknown render
/// dimensions also pin pan at zero until layout settles.
pub fn clamp(candidate: ViewportState, rendered: RenderedSize) -> ViewportState {
    let zoom = candidate.zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    if zoom <= ZOOM_MIN || !rendered.is_known() {
        return ViewportState {
            zoom,
            pan_x: 0.0,
            pan_y: 0.0,
        };
    }
    let max_x = (zoom - 1.0) * rendered.width / 2.0;
    let max_y = (zoom - 1.0) * rendered.height / 2.0;
    ViewportState {
        zoom,
        pan_x: candidate.pan_x.clamp(-max_x, max_x),
        pan_y: candidate.pan_y.clamp(-max_y, max_y),
    }
}

/// One wheel notch: negative `delta_y` zooms in, positive zooms out.
/// The anchor is the cursor position relative to the frame center; the
/// image point under the cursor stays put across the zoom change.
pub fn wheel_zoom(
    current: ViewportState,
    delta_y: f64,
    anchor_x: f64,
    anchor_y: f64,
    rendered: RenderedSize,
) -> ViewportState {
    let step = if delta_y < 0.0 {
        WHEEL_ZOOM_STEP
    } else {
        -WHEEL_ZOOM_STEP
    };
    zoom_about(current, current.zoom + step, anchor_x, anchor_y, rendered)
}

/// Rezoom while keeping the image point under `(anchor_x, anchor_y)`
/// fixed on screen. With the transform applied as translate-then-scale
/// about the image center, the screen offset of an image point `p` is
/// `pan + zoom * p`, so holding `p` in place across a zoom change means
/// `pan' = anchor - (zoom' / zoom) * (anchor - pan)`.
pub fn zoom_about(
    current: ViewportState,
    target_zoom: f64,
    anchor_x: f64,
    anchor_y: f64,
    rendered: RenderedSize,
) -> ViewportState {
    let zoom = target_zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    let ratio = zoom / current.zoom;
    clamp(
        ViewportState {
            zoom,
            pan_x: anchor_x - (anchor_x - current.pan_x) * ratio,
            pan_y: anchor_y - (anchor_y - current.pan_y) * ratio,
        },
        rendered,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn photo() -> RenderedSize {
        RenderedSize::new(400.0, 300.0)
    }

    #[test]
    fn rest_state_is_unit_zoom_centered() {
        let s = ViewportState::rest();
        assert!(approx_eq(s.zoom, 1.0));
        assert!(approx_eq(s.pan_x, 0.0));
        assert!(approx_eq(s.pan_y, 0.0));
        assert!(s.is_rest());
    }

    #[test]
    fn transform_changes_with_zoom_and_pan() {
        let rest = ViewportState::rest().css_transform();
        let zoomed = ViewportState {
            zoom: 2.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
        .css_transform();
        let panned = ViewportState {
            zoom: 2.0,
            pan_x: 12.0,
            pan_y: -4.0,
        }
        .css_transform();
        assert_ne!(rest, zoomed);
        assert_ne!(zoomed, panned);
    }

    #[test]
    fn clamp_bounds_zoom() {
        let low = clamp(
            ViewportState {
                zoom: 0.4,
                pan_x: 0.0,
                pan_y: 0.0,
            },
            photo(),
        );
        assert!(approx_eq(low.zoom, ZOOM_MIN));
        let high = clamp(
            ViewportState {
                zoom: 99.0,
                pan_x: 0.0,
                pan_y: 0.0,
            },
            photo(),
        );
        assert!(approx_eq(high.zoom, ZOOM_MAX));
    }

    #[test]
    fn clamp_forces_zero_pan_at_rest() {
        let s = clamp(
            ViewportState {
                zoom: 1.0,
                pan_x: 50.0,
                pan_y: -80.0,
            },
            photo(),
        );
        assert!(approx_eq(s.pan_x, 0.0));
        assert!(approx_eq(s.pan_y, 0.0));
    }

    #[test]
    fn clamp_limits_pan_to_scaled_overflow() {
        // At 2x on a 400x300 render the overflow is 200/150 per side.
        let s = clamp(
            ViewportState {
                zoom: 2.0,
                pan_x: 500.0,
                pan_y: -500.0,
            },
            photo(),
        );
        assert!(approx_eq(s.pan_x, 200.0));
        assert!(approx_eq(s.pan_y, -150.0));
    }

    #[test]
    fn clamp_keeps_in_bounds_pan() {
        let s = clamp(
            ViewportState {
                zoom: 3.0,
                pan_x: 120.0,
                pan_y: -90.0,
            },
            photo(),
        );
        assert!(approx_eq(s.pan_x, 120.0));
        assert!(approx_eq(s.pan_y, -90.0));
    }

    #[test]
    fn clamp_is_idempotent() {
        let candidates = [
            ViewportState {
                zoom: 0.3,
                pan_x: 900.0,
                pan_y: 900.0,
            },
            ViewportState {
                zoom: 1.0,
                pan_x: 5.0,
                pan_y: 5.0,
            },
            ViewportState {
                zoom: 2.5,
                pan_x: -6000.0,
                pan_y: 0.25,
            },
            ViewportState {
                zoom: 8.0,
                pan_x: 33.0,
                pan_y: -7.0,
            },
        ];
        for c in candidates {
            let once = clamp(c, photo());
            let twice = clamp(once, photo());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn unknown_dimensions_pin_pan_at_zero() {
        let s = clamp(
            ViewportState {
                zoom: 2.0,
                pan_x: 40.0,
                pan_y: 40.0,
            },
            RenderedSize::default(),
        );
        assert!(approx_eq(s.zoom, 2.0));
        assert!(approx_eq(s.pan_x, 0.0));
        assert!(approx_eq(s.pan_y, 0.0));
    }

    #[test]
    fn wheel_up_zooms_in_by_one_step() {
        let s = wheel_zoom(ViewportState::rest(), -600.0, 0.0, 0.0, photo());
        assert!(approx_eq(s.zoom, 1.0 + WHEEL_ZOOM_STEP));
    }

    #[test]
    fn wheel_down_zooms_out_and_stops_at_rest() {
        let zoomed = ViewportState {
            zoom: 1.25,
            pan_x: 0.0,
            pan_y: 0.0,
        };
        let back = wheel_zoom(zoomed, 300.0, 0.0, 0.0, photo());
        assert!(approx_eq(back.zoom, 1.0));
        let below = wheel_zoom(back, 300.0, 0.0, 0.0, photo());
        assert!(approx_eq(below.zoom, 1.0));
        assert!(approx_eq(below.pan_x, 0.0));
    }

    #[test]
    fn wheel_saturates_at_max_zoom() {
        let mut s = ViewportState::rest();
        for _ in 0..40 {
            s = wheel_zoom(s, -120.0, 0.0, 0.0, photo());
        }
        assert!(approx_eq(s.zoom, ZOOM_MAX));
    }

    #[test]
    fn wheel_zoom_is_cursor_anchored() {
        // The image point under the anchor must stay under it after the
        // zoom change: p = (anchor - pan) / zoom is invariant.
        let anchor = (100.0, 60.0);
        let before = ViewportState {
            zoom: 1.5,
            pan_x: 20.0,
            pan_y: -10.0,
        };
        let p_before = (
            (anchor.0 - before.pan_x) / before.zoom,
            (anchor.1 - before.pan_y) / before.zoom,
        );
        let after = wheel_zoom(before, -1.0, anchor.0, anchor.1, photo());
        let p_after = (
            (anchor.0 - after.pan_x) / after.zoom,
            (anchor.1 - after.pan_y) / after.zoom,
        );
        assert!(approx_eq(p_before.0, p_after.0));
        assert!(approx_eq(p_before.1, p_after.1));
    }

    #[test]
    fn zoom_about_result_is_clamped() {
        let s = zoom_about(
            ViewportState {
                zoom: 3.9,
                pan_x: 0.0,
                pan_y: 0.0,
            },
            9.0,
            190.0,
            140.0,
            photo(),
        );
        assert!(approx_eq(s.zoom, ZOOM_MAX));
        assert!(s.pan_x.abs() <= (ZOOM_MAX - 1.0) * 200.0 + EPSILON);
        assert!(s.pan_y.abs() <= (ZOOM_MAX - 1.0) * 150.0 + EPSILON);
    }
}
