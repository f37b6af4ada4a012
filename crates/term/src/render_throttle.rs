//! Frame pacing for mostly static screens.
//!
//! The memory board only changes on input, on a flip-back and once per
//! countdown second, so most loop iterations have nothing new to draw.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders immediately when `fingerprint` changed, otherwise at most once
    /// per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = !self.has_rendered
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;
        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }

    /// Make the next call render regardless of fingerprint.
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}
