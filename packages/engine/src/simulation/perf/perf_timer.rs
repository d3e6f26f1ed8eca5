//! Wall-clock timer for step stats. `Instant` does not exist on wasm32, so
//! the browser build reads `Date.now()` instead.

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

#[cfg(target_arch = "wasm32")]
impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start_ms: js_sys::Date::now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        js_sys::Date::now() - self.start_ms
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start: std::time::Instant::now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}
