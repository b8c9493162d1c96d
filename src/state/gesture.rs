//! Gesture interpretation for the lightbox: one tagged session at a
//! time, its kind fixed at creation. A drag never turns into a pinch
//! mid-gesture and vice versa; input of the other kind is ignored until
//! the active session ends.

/// Two-finger starts closer than this are ignored; a near-zero span
/// would make the zoom ratio blow up on the first move.
pub const MIN_PINCH_DISTANCE: f64 = 10.0;

/// In-flight pointer or touch interaction. `Dragging` carries the
/// pointer-down position and the pan at that moment; `Pinching` carries
/// the initial finger separation and the zoom at that moment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureSession {
    #[default]
    Idle,
    Dragging {
        start_x: f64,
        start_y: f64,
        pan_start_x: f64,
        pan_start_y: f64,
    },
    Pinching {
        start_distance: f64,
        zoom_start: f64,
    },
}

impl GestureSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureSession::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureSession::Dragging { .. })
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self, GestureSession::Pinching { .. })
    }

    /// Start a drag from the given pointer position. Refused while any
    /// session is active.
    pub fn begin_drag(&mut self, x: f64, y: f64, pan_x: f64, pan_y: f64) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = GestureSession::Dragging {
            start_x: x,
            start_y: y,
            pan_start_x: pan_x,
            pan_start_y: pan_y,
        };
        true
    }

    /// Start a pinch from the given finger separation. Refused while any
    /// session is active or when the separation is degenerate.
    pub fn begin_pinch(&mut self, distance: f64, zoom: f64) -> bool {
        if !self.is_idle() || distance < MIN_PINCH_DISTANCE {
            return false;
        }
        *self = GestureSession::Pinching {
            start_distance: distance,
            zoom_start: zoom,
        };
        true
    }

    /// Target pan for a pointer move, `pan_at_start + (current - start)`.
    /// `None` unless a drag is active; the caller still clamps.
    pub fn drag_target(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        match *self {
            GestureSession::Dragging {
                start_x,
                start_y,
                pan_start_x,
                pan_start_y,
            } => Some((pan_start_x + (x - start_x), pan_start_y + (y - start_y))),
            _ => None,
        }
    }

    /// Target zoom for a two-finger move,
    /// `zoom_at_start * (current_distance / start_distance)`. `None`
    /// unless a pinch is active; the caller still clamps.
    pub fn pinch_target(&self, distance: f64) -> Option<f64> {
        match *self {
            GestureSession::Pinching {
                start_distance,
                zoom_start,
            } if distance > 0.0 => Some(zoom_start * (distance / start_distance)),
            _ => None,
        }
    }

    pub fn end(&mut self) {
        *self = GestureSession::Idle;
    }
}

/// Separation between two touch points.
pub fn finger_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Separation of the first two touches, `None` unless exactly two
/// fingers are down.
pub fn two_finger_distance(touches: &web_sys::TouchList) -> Option<f64> {
    if touches.length() != 2 {
        return None;
    }
    let a = touches.item(0)?;
    let b = touches.item(1)?;
    Some(finger_distance(
        a.client_x() as f64,
        a.client_y() as f64,
        b.client_x() as f64,
        b.client_y() as f64,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn starts_idle() {
        assert!(GestureSession::default().is_idle());
    }

    #[test]
    fn drag_tracks_pan_from_start() {
        let mut s = GestureSession::default();
        assert!(s.begin_drag(10.0, 20.0, 4.0, -6.0));
        let (px, py) = s.drag_target(25.0, 28.0).unwrap();
        assert!(approx_eq(px, 19.0));
        assert!(approx_eq(py, 2.0));
    }

    #[test]
    fn pinch_scales_zoom_by_separation_ratio() {
        let mut s = GestureSession::default();
        assert!(s.begin_pinch(100.0, 1.5));
        assert!(approx_eq(s.pinch_target(200.0).unwrap(), 3.0));
        assert!(approx_eq(s.pinch_target(50.0).unwrap(), 0.75));
    }

    #[test]
    fn second_begin_of_same_kind_is_refused() {
        let mut s = GestureSession::default();
        assert!(s.begin_drag(0.0, 0.0, 0.0, 0.0));
        assert!(!s.begin_drag(50.0, 50.0, 9.0, 9.0));
        // The first drag origin survives.
        let (px, py) = s.drag_target(10.0, 10.0).unwrap();
        assert!(approx_eq(px, 10.0));
        assert!(approx_eq(py, 10.0));
    }

    #[test]
    fn kinds_are_mutually_exclusive() {
        let mut s = GestureSession::default();
        assert!(s.begin_drag(0.0, 0.0, 0.0, 0.0));
        assert!(!s.begin_pinch(120.0, 1.0));
        assert!(s.is_dragging());

        let mut s = GestureSession::default();
        assert!(s.begin_pinch(120.0, 1.0));
        assert!(!s.begin_drag(0.0, 0.0, 0.0, 0.0));
        assert!(s.is_pinching());
    }

    #[test]
    fn kind_is_fixed_for_the_session() {
        let mut s = GestureSession::default();
        assert!(s.begin_pinch(100.0, 2.0));
        // A single-point move mid-pinch produces no pan.
        assert!(s.drag_target(30.0, 30.0).is_none());
        assert!(s.is_pinching());
        // And a pinch move produces no zoom during a drag.
        let mut s = GestureSession::default();
        assert!(s.begin_drag(0.0, 0.0, 0.0, 0.0));
        assert!(s.pinch_target(150.0).is_none());
    }

    #[test]
    fn degenerate_pinch_start_is_ignored() {
        let mut s = GestureSession::default();
        assert!(!s.begin_pinch(MIN_PINCH_DISTANCE / 2.0, 1.0));
        assert!(s.is_idle());
    }

    #[test]
    fn ending_frees_the_machine_for_either_kind() {
        let mut s = GestureSession::default();
        assert!(s.begin_drag(0.0, 0.0, 0.0, 0.0));
        s.end();
        assert!(s.is_idle());
        assert!(s.begin_pinch(90.0, 1.0));
        s.end();
        assert!(s.begin_drag(1.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn finger_distance_is_euclidean() {
        assert!(approx_eq(finger_distance(0.0, 0.0, 3.0, 4.0), 5.0));
        assert!(approx_eq(
            finger_distance(100.0, 100.0, 200.0, 200.0),
            (2.0_f64).sqrt() * 100.0
        ));
    }
}
