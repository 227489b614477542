use crate::host::{with_host, AuroraInstance};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// JS-side handle to a mounted aurora.
///
/// Freeing the handle leaves the animation running; call `cancel()` to stop it.
#[wasm_bindgen]
pub struct AuroraHandle {
    inner: Rc<AuroraInstance>,
}

impl AuroraHandle {
    pub(crate) fn new(inner: Rc<AuroraInstance>) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen]
impl AuroraHandle {
    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&self, r: u8, g: u8, b: u8) {
        self.inner.set_color(r, g, b);
    }

    /// Re-measure after a layout change the window `resize` event does not cover.
    pub fn resize(&self) {
        self.inner.resize();
    }

    pub fn rows(&self) -> u32 {
        self.inner.rows()
    }

    pub fn cols(&self) -> u32 {
        self.inner.cols()
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    /// Stop drawing and detach the resize listener. Idempotent.
    pub fn cancel(&self) {
        with_host(|host| host.unmount(&self.inner));
    }
}
