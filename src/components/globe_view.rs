use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, PointerEvent, TouchEvent};
use yew::prelude::*;

use crate::model::GlobeConfig;
use crate::render::GlobeRenderer;
use crate::state::{DragTracker, FrameLoop, PointerKind, Rotation, Surface};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct GlobeViewProps {
    pub config: GlobeConfig,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn set_style(canvas: &HtmlCanvasElement, prop: &str, value: &str) {
    let _ = canvas.style().set_property(prop, value);
}

#[function_component(GlobeView)]
pub fn globe_view(props: &GlobeViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let surface = use_mut_ref(|| Surface::new(0.0));
    let drag = use_mut_ref(DragTracker::new);
    let rotation = use_mut_ref(Rotation::new);

    {
        let canvas_ref = canvas_ref.clone();
        let surface = surface.clone();
        let drag = drag.clone();
        let rotation = rotation.clone();
        let config = props.config.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");

            *surface.borrow_mut() = Surface::new(window.device_pixel_ratio());

            let apply_canvas_size = {
                let canvas = canvas.clone();
                let surface = surface.clone();
                move || {
                    let mut s = surface.borrow_mut();
                    s.set_width(canvas.offset_width() as f64);
                    canvas.set_width(s.render_width());
                    canvas.set_height(s.render_height());
                }
            };
            apply_canvas_size();

            let renderer = Rc::new(GlobeRenderer::new(config));
            let ctx = Rc::new(context_2d(&canvas));
            if ctx.is_none() {
                clog("globe: 2d canvas context unavailable, leaving surface blank");
            }
            let frame_loop = Rc::new(RefCell::new(FrameLoop::new()));

            // Frame loop. The closure reschedules itself and bails out once
            // the loop is disposed, so a frame already queued at unmount time
            // does nothing.
            let raf_closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_closure_loop = raf_closure.clone();
                let frame_loop_raf = frame_loop.clone();
                let surface_loop = surface.clone();
                let drag_loop = drag.clone();
                let rotation_loop = rotation.clone();
                let renderer_loop = renderer.clone();
                let ctx_loop = ctx.clone();
                let canvas_loop = canvas.clone();
                let window_loop = window.clone();
                let last_ts = RefCell::new(None::<f64>);
                let faded_in = RefCell::new(false);
                *raf_closure.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
                    if !frame_loop_raf.borrow().running() {
                        return;
                    }
                    let dt = {
                        let mut last = last_ts.borrow_mut();
                        let dt = match *last {
                            Some(prev) => ((ts - prev) / 1000.0).max(0.0),
                            None => 1.0 / 60.0,
                        };
                        *last = Some(ts);
                        dt
                    };
                    let (dragging, target) = {
                        let d = drag_loop.borrow();
                        (d.dragging(), d.offset())
                    };
                    let angle = rotation_loop.borrow_mut().tick(dt, dragging, target);
                    let s = *surface_loop.borrow();
                    if s.ready() {
                        if let Some(ctx) = ctx_loop.as_ref() {
                            renderer_loop.paint(ctx, angle, s.render_width(), s.render_height());
                            let mut faded = faded_in.borrow_mut();
                            if !*faded {
                                *faded = true;
                                set_style(&canvas_loop, "opacity", "1");
                            }
                        }
                    }
                    // schedule next frame
                    if let Ok(id) = window_loop.request_animation_frame(
                        raf_closure_loop
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    ) {
                        frame_loop_raf.borrow_mut().schedule(id);
                    }
                })
                    as Box<dyn FnMut(f64)>));
                // kick off
                if let Ok(id) = window.request_animation_frame(
                    raf_closure
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    frame_loop.borrow_mut().schedule(id);
                }
            }

            // Pointer down starts (or resumes) a drag session.
            let pointerdown_cb = {
                let drag = drag.clone();
                let canvas = canvas.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    drag.borrow_mut().press(e.client_x() as f64);
                    set_style(&canvas, "cursor", "grabbing");
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "pointerdown",
                    pointerdown_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Pointer up and pointer leaving the canvas both end the session;
            // the committed movement stays as the next session's baseline.
            let pointer_end_cb = {
                let drag = drag.clone();
                let canvas = canvas.clone();
                Closure::wrap(Box::new(move |_e: PointerEvent| {
                    drag.borrow_mut().release();
                    set_style(&canvas, "cursor", "grab");
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "pointerup",
                    pointer_end_cb.as_ref().unchecked_ref(),
                )
                .ok();
            canvas
                .add_event_listener_with_callback(
                    "pointerout",
                    pointer_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let mousemove_cb = {
                let drag = drag.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    drag.borrow_mut()
                        .drag_to(e.client_x() as f64, PointerKind::Mouse);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touchmove_cb = {
                let drag = drag.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let mut d = drag.borrow_mut();
                    if !d.dragging() {
                        return;
                    }
                    if let Some(t0) = e.touches().item(0) {
                        d.drag_to(t0.client_x() as f64, PointerKind::Touch);
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchmove",
                    touchmove_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_end_cb = {
                let drag = drag.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    drag.borrow_mut().release();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();
            canvas
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let resize_cb = {
                let apply_canvas_size = apply_canvas_size.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    apply_canvas_size();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();

            // Cleanup: dispose first so a queued frame is a no-op, cancel the
            // pending frame, then detach everything.
            let window_cleanup = window.clone();
            move || {
                if let Some(id) = frame_loop.borrow_mut().dispose() {
                    let _ = window_cleanup.cancel_animation_frame(id);
                }
                let _ = canvas.remove_event_listener_with_callback(
                    "pointerdown",
                    pointerdown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "pointerup",
                    pointer_end_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "pointerout",
                    pointer_end_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchmove",
                    touchmove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = window_cleanup
                    .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                let _ = raf_closure.borrow_mut().take();
                let _keep_alive = (
                    &pointerdown_cb,
                    &pointer_end_cb,
                    &mousemove_cb,
                    &touchmove_cb,
                    &touch_end_cb,
                    &resize_cb,
                );
            }
        });
    }

    html! {
        <div style="position:relative; width:100%; max-width:600px; aspect-ratio:1; margin:auto;">
            <canvas
                ref={canvas_ref}
                style="display:block; width:100%; height:100%; cursor:grab; opacity:0; transition:opacity 1s ease; contain:layout paint size;"
            ></canvas>
        </div>
    }
}
