use super::constants::PHASE_RATE;

/// Phase accumulator shared by every aurora surface on the page.
///
/// Advanced once per animation frame from the frame timestamp; renderers only
/// read it, which keeps all panels on the same wave position.
#[derive(Clone, Debug, Default)]
pub struct WaveClock {
    phase: f64,
    last_timestamp: Option<f64>,
}

impl WaveClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the phase to `now_ms` (milliseconds, host frame clock).
    ///
    /// The first call only records the timestamp. A timestamp older than the
    /// previous one counts as zero elapsed time.
    pub fn advance(&mut self, now_ms: f64) {
        if let Some(last) = self.last_timestamp {
            let delta = (now_ms - last).max(0.0);
            self.phase += (delta / 1000.0) * PHASE_RATE;
        }
        self.last_timestamp = Some(now_ms);
    }

    #[inline]
    pub fn current_phase(&self) -> f64 {
        self.phase
    }

    #[inline]
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }
}
