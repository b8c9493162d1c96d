//! Full-screen photo viewer. Wheel and pinch zoom, drag pan, and three
//! ways out: close button, Escape, backdrop click. The host mounts it
//! while open and unmounts it on close, so every open starts at rest.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{DragEvent, HtmlElement, HtmlImageElement, MouseEvent, PointerEvent, WheelEvent};
use yew::prelude::*;

use super::app::SettingsContext;
use crate::state::viewport::ZOOM_MIN;
use crate::state::{
    gesture, viewport, GestureSession, LightboxLifecycle, RenderedSize, ViewportState,
};

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxProps {
    pub src: String,
    pub alt: String,
    pub on_close: Callback<()>,
}

/// Base layout size of the photo, unaffected by the transform applied
/// to it. Zero until the image has laid out.
fn rendered_size(image: &HtmlImageElement) -> RenderedSize {
    RenderedSize::new(image.client_width() as f64, image.client_height() as f64)
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let settings = use_context::<SettingsContext>().expect("settings context");
    let overlay_ref = use_node_ref();
    let image_ref = use_node_ref();
    // Gesture-time state lives in cells. The window listeners below are
    // created once on mount and would read stale copies out of anything
    // captured by value.
    let viewport = use_mut_ref(ViewportState::rest);
    let session = use_mut_ref(GestureSession::default);
    let lifecycle = use_mut_ref(LightboxLifecycle::default);
    // Only the rendered transform goes through Yew state.
    let transform = use_state(|| ViewportState::rest().css_transform());

    let on_wheel = {
        let viewport = viewport.clone();
        let image_ref = image_ref.clone();
        let transform = transform.clone();
        Callback::from(move |e: WheelEvent| {
            e.prevent_default();
            if let Some(image) = image_ref.cast::<HtmlImageElement>() {
                let current = *viewport.borrow();
                // The transformed rect is centered at frame center + pan,
                // so subtracting pan recovers the frame center.
                let rect = image.get_bounding_client_rect();
                let center_x = rect.left() + rect.width() / 2.0 - current.pan_x;
                let center_y = rect.top() + rect.height() / 2.0 - current.pan_y;
                let next = viewport::wheel_zoom(
                    current,
                    e.delta_y(),
                    e.client_x() as f64 - center_x,
                    e.client_y() as f64 - center_y,
                    rendered_size(&image),
                );
                *viewport.borrow_mut() = next;
                transform.set(next.css_transform());
            }
        })
    };

    let on_pointer_down = {
        let viewport = viewport.clone();
        let session = session.clone();
        Callback::from(move |e: PointerEvent| {
            if e.button() != 0 {
                return;
            }
            let current = *viewport.borrow();
            // At rest there is nothing to pan, and a leading finger must
            // not hold the session hostage when a pinch is coming.
            if current.zoom > ZOOM_MIN {
                e.prevent_default();
                session.borrow_mut().begin_drag(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    current.pan_x,
                    current.pan_y,
                );
            }
        })
    };

    let on_drag_start = Callback::from(|e: DragEvent| e.prevent_default());

    let on_backdrop_click = {
        let overlay_ref = overlay_ref.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let overlay = overlay_ref.cast::<HtmlElement>();
            let target = e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if let (Some(overlay), Some(target)) = (overlay, target) {
                // Children of the overlay swallow their own clicks; only
                // a hit on the backdrop itself closes.
                if overlay.is_same_node(Some(&target)) {
                    on_close.emit(());
                }
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    {
        let viewport = viewport.clone();
        let session = session.clone();
        let lifecycle = lifecycle.clone();
        let transform = transform.clone();
        let image_ref = image_ref.clone();
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Lock page scroll for the lifetime of the overlay, keeping
            // whatever inline value the body carried.
            if let Some(body) = document.body() {
                let style = body.style();
                let previous = style.get_property_value("overflow").unwrap_or_default();
                if lifecycle.borrow_mut().open(previous) {
                    let _ = style.set_property("overflow", "hidden");
                }
            }

            // Pan follows the pointer even after it leaves the image.
            let pointer_move_cb = {
                let viewport = viewport.clone();
                let session = session.clone();
                let image_ref = image_ref.clone();
                let transform = transform.clone();
                Closure::wrap(Box::new(move |e: web_sys::PointerEvent| {
                    let target = session
                        .borrow()
                        .drag_target(e.client_x() as f64, e.client_y() as f64);
                    if let Some((pan_x, pan_y)) = target {
                        if let Some(image) = image_ref.cast::<HtmlImageElement>() {
                            let current = *viewport.borrow();
                            let next = viewport::clamp(
                                ViewportState {
                                    zoom: current.zoom,
                                    pan_x,
                                    pan_y,
                                },
                                rendered_size(&image),
                            );
                            *viewport.borrow_mut() = next;
                            transform.set(next.css_transform());
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "pointermove",
                    pointer_move_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            let pointer_up_cb = {
                let session = session.clone();
                Closure::wrap(Box::new(move |_e: web_sys::PointerEvent| {
                    let mut session = session.borrow_mut();
                    if session.is_dragging() {
                        session.end();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "pointerup",
                    pointer_up_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Two fingers anywhere start a pinch; one finger is left to
            // the pointer handlers.
            let touch_start_cb = {
                let viewport = viewport.clone();
                let session = session.clone();
                Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                    if let Some(distance) = gesture::two_finger_distance(&e.touches()) {
                        let zoom = viewport.borrow().zoom;
                        session.borrow_mut().begin_pinch(distance, zoom);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            let touch_move_cb = {
                let viewport = viewport.clone();
                let session = session.clone();
                let image_ref = image_ref.clone();
                let transform = transform.clone();
                Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                    // Moves with fewer than two points carry no distance
                    // and leave an active pinch waiting.
                    if let Some(distance) = gesture::two_finger_distance(&e.touches()) {
                        let target = session.borrow().pinch_target(distance);
                        if let Some(zoom) = target {
                            if let Some(image) = image_ref.cast::<HtmlImageElement>() {
                                let current = *viewport.borrow();
                                let next = viewport::clamp(
                                    ViewportState {
                                        zoom,
                                        pan_x: current.pan_x,
                                        pan_y: current.pan_y,
                                    },
                                    rendered_size(&image),
                                );
                                *viewport.borrow_mut() = next;
                                transform.set(next.css_transform());
                            }
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            let touch_end_cb = {
                let session = session.clone();
                Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                    let remaining = e.touches().length();
                    let mut session = session.borrow_mut();
                    if session.is_pinching() && remaining < 2 {
                        session.end();
                    } else if session.is_dragging() && remaining == 0 {
                        session.end();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .unwrap();
            window
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Escape closes no matter where focus sits.
            let keydown_cb = {
                let on_close = on_close.clone();
                Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    if e.key() == "Escape" {
                        e.prevent_default();
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .unwrap();

            let window_clone = window.clone();
            move || {
                let _ = window_clone.remove_event_listener_with_callback(
                    "pointermove",
                    pointer_move_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "pointerup",
                    pointer_up_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
                // Give back the scroll state exactly as it was.
                if let Some(previous) = lifecycle.borrow_mut().close() {
                    if let Some(body) = window_clone.document().and_then(|d| d.body()) {
                        let _ = body.style().set_property("overflow", &previous);
                    }
                }
                let _keep_alive = (
                    &pointer_move_cb,
                    &pointer_up_cb,
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                    &keydown_cb,
                );
            }
        });
    }

    html! {
        <div
            ref={overlay_ref}
            class="lightbox"
            style="position:fixed; inset:0; z-index:60; display:flex; align-items:center; justify-content:center; background:rgba(4,6,10,0.88); touch-action:none;"
            onclick={on_backdrop_click}
        >
            <button
                class="lightbox-close"
                aria-label={settings.text.close}
                onclick={on_close_click}
                style="position:absolute; top:16px; right:16px; z-index:61; width:40px; height:40px; border-radius:50%; border:none; background:rgba(255,255,255,0.12); color:#fff; font-size:18px; cursor:pointer;"
            >{"✕"}</button>
            <img
                ref={image_ref}
                class="lightbox-image"
                src={props.src.clone()}
                alt={props.alt.clone()}
                style={format!("max-width:92vw; max-height:92vh; user-select:none; touch-action:none; cursor:grab; transform:{};", *transform)}
                onwheel={on_wheel}
                onpointerdown={on_pointer_down}
                ondragstart={on_drag_start}
            />
        </div>
    }
}
