//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns drawing; this host creates the engine once the
//! `<canvas>` is mounted, keeps its viewport in step with the element size,
//! and commits the bound segment list whenever it changes. The campus image
//! is loaded in the background and replaces the grid once it arrives.

use edges::Segment;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::camera::Point as CanvasPoint;
#[cfg(feature = "csr")]
use canvas::engine::Engine;
#[cfg(feature = "csr")]
use edges::{CoordBounds, SegmentSink};
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

use crate::state::ui::UiState;

/// Campus map drawn under the segments once it loads.
pub const CAMPUS_IMAGE_URL: &str = "/campus_map.jpg";

#[cfg(feature = "csr")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;

/// Map surface that draws `segments` over the campus background.
#[component]
pub fn MapView(#[prop(into)] segments: Signal<Vec<Segment>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));

    // Mount: build the engine, size it, and draw what is already committed.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let mut instance = Engine::new(canvas, CoordBounds::default());
            sync_viewport(&mut instance, canvas_ref);
            instance.commit(&segments.get_untracked());
            report_render_error(&instance);
            *engine.borrow_mut() = Some(instance);
            load_campus_image(Rc::clone(&engine));
        });
    }

    // Commit: every change to the bound list replaces what is drawn.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let current = segments.get();
            if let Some(instance) = engine.borrow_mut().as_mut() {
                instance.commit(&current);
                report_render_error(instance);
            }
        });
    }

    // Resize: refit the camera to the new element size.
    #[cfg(feature = "csr")]
    {
        let resize_tick = RwSignal::new(0_u64);
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            resize_tick.update(|t| *t = t.wrapping_add(1));
        });
        on_cleanup(move || handle.remove());

        let engine = Rc::clone(&engine);
        Effect::new(move |_| {
            resize_tick.track();
            if let Some(instance) = engine.borrow_mut().as_mut() {
                sync_viewport(instance, canvas_ref);
                if let Err(e) = instance.render() {
                    log::warn!("map render failed: {e:?}");
                }
            }
        });
    }

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let screen = CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                let world = engine.borrow().as_ref().and_then(|e| e.world_at(screen));
                ui.update(|u| u.cursor = world.map(|p| (p.x, p.y)));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <div class="map-view">
            <canvas
                class="map-view__canvas"
                node_ref=canvas_ref
                aria-label="Campus map"
                data-segments=move || segments.with(Vec::len)
                on:pointermove=on_pointer_move
                on:pointerleave=move |_| ui.update(|u| u.cursor = None)
            ></canvas>
        </div>
    }
}

#[cfg(feature = "csr")]
fn sync_viewport(engine: &mut Engine, canvas_ref: NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    engine.set_viewport(width, height, window.device_pixel_ratio().max(1.0));
}

#[cfg(feature = "csr")]
fn report_render_error(engine: &Engine) {
    if let Some(e) = engine.last_error() {
        log::warn!("map render failed: {e:?}");
    }
}

#[cfg(feature = "csr")]
fn load_campus_image(engine: SharedEngine) {
    let image = match web_sys::HtmlImageElement::new() {
        Ok(image) => image,
        Err(e) => {
            log::warn!("could not create campus image: {e:?}");
            return;
        }
    };

    let loaded = image.clone();
    let failed = Rc::clone(&engine);
    let onload = Closure::<dyn FnMut()>::new(move || {
        if let Some(instance) = engine.borrow_mut().as_mut() {
            instance.set_background_image(loaded.clone());
            if let Err(e) = instance.render() {
                log::warn!("map render failed: {e:?}");
            }
        }
    });
    let onerror = Closure::<dyn FnMut()>::new(move || {
        log::info!("campus image {CAMPUS_IMAGE_URL} unavailable; drawing on the grid");
        if let Some(instance) = failed.borrow_mut().as_mut() {
            instance.clear_background_image();
            if let Err(e) = instance.render() {
                log::warn!("map render failed: {e:?}");
            }
        }
    });

    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();
    image.set_src(CAMPUS_IMAGE_URL);
}
