use crate::constants::{SECTION_CANVAS_CLASS, SECTION_CANVAS_STYLE};
use crate::core::SurfaceFit;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// Transparent, low-latency 2D context.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let opts = js_sys::Object::new();
    for key in ["alpha", "desynchronized"] {
        js_sys::Reflect::set(&opts, &JsValue::from_str(key), &JsValue::TRUE)
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    canvas
        .get_context_with_context_options("2d", &opts)
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!(format!("{:?}", e)))
}

/// CSS pixel size of the box the canvas should cover.
pub fn measure_surface(canvas: &web::HtmlCanvasElement, fit: SurfaceFit) -> (u32, u32) {
    match fit {
        SurfaceFit::Window => {
            let Some(w) = web::window() else {
                return (0, 0);
            };
            let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (dim(w.inner_width()) as u32, dim(w.inner_height()) as u32)
        }
        SurfaceFit::Parent => {
            let rect = match canvas.parent_element() {
                Some(parent) => parent.get_bounding_client_rect(),
                None => canvas.get_bounding_client_rect(),
            };
            (rect.width() as u32, rect.height() as u32)
        }
    }
}

/// Match the canvas backing store to its surface and return the size.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, fit: SurfaceFit) -> (u32, u32) {
    let (w, h) = measure_surface(canvas, fit);
    // Assigning width/height wipes the bitmap, so only do it on change
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
    (w, h)
}

/// Insert a full-size overlay canvas as the first child of `#section_id`.
pub fn create_section_canvas(
    document: &web::Document,
    section_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let section = document
        .get_element_by_id(section_id)
        .ok_or_else(|| anyhow!("section #{} not found", section_id))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_class_name(SECTION_CANVAS_CLASS);
    _ = canvas.set_attribute("style", SECTION_CANVAS_STYLE);
    if let Some(el) = section.dyn_ref::<web::HtmlElement>() {
        _ = el.style().set_property("position", "relative");
    }
    section
        .insert_before(&canvas, section.first_child().as_ref())
        .map_err(|e| anyhow!("insert canvas into #{}: {:?}", section_id, e))?;
    Ok(canvas)
}

/// Register `handler` for window `resize`; hand the closure back for removal.
pub fn on_window_resize(handler: impl FnMut() + 'static) -> Option<Closure<dyn FnMut()>> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .ok()?;
    Some(closure)
}

pub fn remove_window_resize(closure: &Closure<dyn FnMut()>) {
    if let Some(window) = web::window() {
        _ = window
            .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
}

/// `document.readyState`, empty when unavailable.
pub fn ready_state(document: &web::Document) -> String {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Run `handler` once the document has been parsed.
pub fn on_dom_content_loaded(document: &web::Document, handler: impl FnOnce() + 'static) {
    let mut handler = Some(handler);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(h) = handler.take() {
            h();
        }
    }) as Box<dyn FnMut()>);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("[aurora] could not listen for DOMContentLoaded");
    }
    closure.forget();
}
