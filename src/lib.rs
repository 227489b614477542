#![cfg(target_arch = "wasm32")]
use crate::constants::{AUTO_CANVAS_ID, SET_COLOR_GLOBAL};
use crate::core::{document_still_loading, section_color, AuroraConfig, SurfaceFit};
pub use crate::handle::AuroraHandle;
use crate::host::with_host;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod frame;
mod handle;
mod host;

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

fn parse_options(options: JsValue) -> anyhow::Result<AuroraConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(AuroraConfig::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| anyhow::anyhow!("invalid aurora options: {}", e))
}

// Expose `window.setAuroraColor(r, g, b)` for the page's tab switching
fn publish_color_hook(window: &web::Window) {
    let hook = Closure::wrap(Box::new(move |r: u8, g: u8, b: u8| {
        set_aurora_color(r, g, b);
    }) as Box<dyn FnMut(u8, u8, u8)>);
    if js_sys::Reflect::set(window, &JsValue::from_str(SET_COLOR_GLOBAL), hook.as_ref()).is_err() {
        log::warn!("[aurora] could not publish window.{}", SET_COLOR_GLOBAL);
    }
    hook.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aurora-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    publish_color_hook(&window);
    // Start the shared clock ahead of any renderer
    with_host(|_| ());

    if let Some(document) = window.document() {
        if document_still_loading(&dom::ready_state(&document)) {
            dom::on_dom_content_loaded(&document, auto_mount);
        } else {
            auto_mount();
        }
    }
    Ok(())
}

// Single full-page canvas, if the page has one
fn auto_mount() {
    let Some(document) = dom::window_document() else {
        return;
    };
    if document.get_element_by_id(AUTO_CANVAS_ID).is_none() {
        log::debug!("[aurora] no #{}; waiting for explicit mounts", AUTO_CANVAS_ID);
        return;
    }
    let config = AuroraConfig {
        fit: SurfaceFit::Window,
        ..AuroraConfig::default()
    };
    if let Err(e) = mount_canvas(&document, AUTO_CANVAS_ID, config) {
        log::warn!("[aurora] auto-mount skipped: {:#}", e);
    }
}

fn mount_canvas(
    document: &web::Document,
    canvas_id: &str,
    config: AuroraConfig,
) -> anyhow::Result<AuroraHandle> {
    let canvas = dom::canvas_by_id(document, canvas_id)?;
    let instance = with_host(|host| host.mount(canvas, config))?;
    Ok(AuroraHandle::new(instance))
}

/// Animate an existing `<canvas id=canvas_id>`.
///
/// `options` is an optional object: `{ cellSize, fontFamily, fontWeight, fit, color }`.
#[wasm_bindgen(js_name = mountAurora)]
pub fn mount_aurora(canvas_id: &str, options: JsValue) -> Result<AuroraHandle, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let config = parse_options(options).map_err(to_js)?;
    mount_canvas(&document, canvas_id, config).map_err(to_js)
}

/// Create an overlay canvas inside `#section_id` and animate it in `color`.
#[wasm_bindgen(js_name = mountSection)]
pub fn mount_section(section_id: &str, color: &str) -> Result<AuroraHandle, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = dom::create_section_canvas(&document, section_id).map_err(to_js)?;
    let config = AuroraConfig {
        color: Some(color.to_string()),
        ..AuroraConfig::default()
    };
    let instance = with_host(|host| host.mount(canvas, config)).map_err(to_js)?;
    Ok(AuroraHandle::new(instance))
}

/// Recolor every running aurora.
#[wasm_bindgen(js_name = setAuroraColor)]
pub fn set_aurora_color(r: u8, g: u8, b: u8) {
    with_host(|host| host.set_color(r, g, b));
}

/// Recolor to a named section's color; false for an unknown section.
#[wasm_bindgen(js_name = setAuroraSection)]
pub fn set_aurora_section(name: &str) -> bool {
    match section_color(name) {
        Some(c) => {
            set_aurora_color(c.r, c.g, c.b);
            true
        }
        None => {
            log::debug!("[aurora] no color for section '{}'", name);
            false
        }
    }
}

#[wasm_bindgen(js_name = auroraPhase)]
pub fn aurora_phase() -> f64 {
    with_host(|host| host.phase())
}

#[wasm_bindgen(js_name = auroraCount)]
pub fn aurora_count() -> usize {
    with_host(|host| host.instance_count())
}
