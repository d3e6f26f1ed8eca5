use wasm_bindgen::prelude::*;

/// Snapshot of the last tick
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepStats {
    pub(crate) step_ms: f64,
    /// Non-empty cells the scan handed to a behavior
    pub(crate) particles_processed: u32,
    pub(crate) particles_moved: u32,
    /// Cells skipped because their particle already moved this tick
    pub(crate) skipped_updated: u32,
    pub(crate) contacts: u32,
    pub(crate) particle_count: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_processed(&self) -> u32 { self.particles_processed }
    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    #[wasm_bindgen(getter)]
    pub fn skipped_updated(&self) -> u32 { self.skipped_updated }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
}
