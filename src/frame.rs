use crate::core::{AuroraConfig, GlyphCell, GlyphFieldRenderer, GlyphSink, WaveClock};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedClock = Rc<RefCell<WaveClock>>;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Self-rescheduling `requestAnimationFrame` loop.
///
/// Runs until [`FrameLoop::cancel`]; dropping the value does not stop it.
#[derive(Clone)]
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            pending_tick.set(None);
            on_frame(now_ms);
            pending_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut(f64)>));
        pending.set(request_frame(&tick));
        Self { tick, pending }
    }

    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// Draws computed cells with `fillText` on a 2D context.
pub struct CanvasSink {
    ctx: web::CanvasRenderingContext2d,
    font: String,
}

impl CanvasSink {
    pub fn new(ctx: web::CanvasRenderingContext2d, font: String) -> Self {
        Self { ctx, font }
    }
}

impl GlyphSink for CanvasSink {
    fn begin_frame(&mut self, width: u32, height: u32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        // Resizing the canvas resets context state, so the font is set every frame
        self.ctx.set_font(&self.font);
    }

    fn paint(&mut self, cell: &GlyphCell) {
        let mut buf = [0u8; 4];
        self.ctx.set_fill_style_str(&cell.paint.css());
        _ = self.ctx.fill_text(cell.glyph.encode_utf8(&mut buf), cell.x, cell.y);
    }
}

/// Everything one animated canvas needs per frame.
pub struct AuroraFrame {
    pub canvas: web::HtmlCanvasElement,
    pub config: AuroraConfig,
    pub renderer: GlyphFieldRenderer,
    pub sink: CanvasSink,
    pub clock: SharedClock,
}

impl AuroraFrame {
    /// Re-measure the surface and rebuild the grid.
    pub fn resize(&mut self) {
        let (w, h) = dom::sync_canvas_size(&self.canvas, self.config.fit);
        self.renderer.resize(w, h);
    }

    pub fn frame(&mut self) {
        let phase = self.clock.borrow().current_phase();
        self.renderer.render(phase, &mut self.sink);
    }
}
