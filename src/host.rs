use crate::core::{AuroraConfig, GlyphFieldRenderer, Rgb, WaveClock};
use crate::dom;
use crate::frame::{AuroraFrame, CanvasSink, FrameLoop, SharedClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// One mounted canvas: its frame state, draw loop and resize hook.
pub struct AuroraInstance {
    frame: Rc<RefCell<AuroraFrame>>,
    frame_loop: FrameLoop,
    resize_listener: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl AuroraInstance {
    pub fn set_color(&self, r: u8, g: u8, b: u8) {
        self.frame.borrow_mut().renderer.set_color(r, g, b);
    }

    pub fn resize(&self) {
        self.frame.borrow_mut().resize();
    }

    pub fn rows(&self) -> u32 {
        self.frame.borrow().renderer.rows()
    }

    pub fn cols(&self) -> u32 {
        self.frame.borrow().renderer.cols()
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    fn stop(&self) {
        self.frame_loop.cancel();
        if let Some(listener) = self.resize_listener.borrow_mut().take() {
            dom::remove_window_resize(&listener);
        }
    }
}

/// Page-wide owner of the wave clock and every mounted aurora.
pub struct AuroraHost {
    clock: SharedClock,
    instances: Vec<Rc<AuroraInstance>>,
}

thread_local! {
    static HOST: RefCell<Option<AuroraHost>> = const { RefCell::new(None) };
}

/// Run `f` against the host, creating it (and starting the clock) on first use.
pub fn with_host<R>(f: impl FnOnce(&mut AuroraHost) -> R) -> R {
    HOST.with(|slot| {
        let mut slot = slot.borrow_mut();
        let host = slot.get_or_insert_with(AuroraHost::new);
        f(host)
    })
}

impl AuroraHost {
    fn new() -> Self {
        let clock: SharedClock = Rc::new(RefCell::new(WaveClock::new()));
        // Registered before any renderer, so each frame advances the clock first.
        // Runs for the life of the page.
        let clock_tick = clock.clone();
        FrameLoop::start(move |now_ms| clock_tick.borrow_mut().advance(now_ms));
        log::info!("[aurora] wave clock started");
        Self {
            clock,
            instances: Vec::new(),
        }
    }

    pub fn phase(&self) -> f64 {
        self.clock.borrow().current_phase()
    }

    pub fn mount(
        &mut self,
        canvas: web::HtmlCanvasElement,
        config: AuroraConfig,
    ) -> anyhow::Result<Rc<AuroraInstance>> {
        let color = match config.color.as_deref() {
            Some(css) => Rgb::parse(css)?,
            None => Rgb::default(),
        };
        let ctx = dom::context_2d(&canvas)?;
        let frame = Rc::new(RefCell::new(AuroraFrame {
            sink: CanvasSink::new(ctx, config.font()),
            renderer: GlyphFieldRenderer::with_cell_size(color, config.cell_size),
            canvas,
            config,
            clock: self.clock.clone(),
        }));
        frame.borrow_mut().resize();

        let frame_resize = frame.clone();
        let resize_listener = dom::on_window_resize(move || frame_resize.borrow_mut().resize());
        let frame_tick = frame.clone();
        let frame_loop = FrameLoop::start(move |_now_ms| frame_tick.borrow_mut().frame());

        let instance = Rc::new(AuroraInstance {
            frame,
            frame_loop,
            resize_listener: RefCell::new(resize_listener),
        });
        log::info!(
            "[aurora] mounted {} ({} rows x {} cols, {})",
            instance.frame.borrow().canvas.id(),
            instance.rows(),
            instance.cols(),
            color
        );
        self.instances.push(instance.clone());
        Ok(instance)
    }

    pub fn unmount(&mut self, instance: &Rc<AuroraInstance>) {
        instance.stop();
        self.instances.retain(|i| !Rc::ptr_eq(i, instance));
        log::info!("[aurora] cancelled; {} still running", self.instances.len());
    }

    /// Recolor every mounted aurora.
    pub fn set_color(&self, r: u8, g: u8, b: u8) {
        for instance in &self.instances {
            instance.set_color(r, g, b);
        }
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}
