use wasm_bindgen::prelude::*;

use crate::domain::content::MaterialRecord;
use crate::materials::Color;

use super::brush::{BrushSelection, BrushSize, PointerState};
use super::perf_stats::StepStats;
use super::settings::{MovePolicy, SimulationSettings};
use super::WorldCore;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Browser-facing wrapper around [`WorldCore`]
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world of `width` x `height` cells with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self { core: WorldCore::new(width, height) }
    }

    /// Size the grid from a canvas in pixels. `settings_json` may be empty for defaults.
    pub fn from_surface(surface_width: u32, surface_height: u32, settings_json: &str) -> Result<World, JsValue> {
        let settings = if settings_json.trim().is_empty() {
            SimulationSettings::default()
        } else {
            SimulationSettings::from_json(settings_json).map_err(js_err)?
        };
        let core = WorldCore::from_surface(surface_width, surface_height, settings).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 {
        self.core.cell_size()
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize {
        self.core.particle_count()
    }

    // === Catalog ===

    /// Replace the catalog with a material document. Clears the grid.
    pub fn load_catalog_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.load_catalog_json(json).map_err(js_err)
    }

    /// Add or replace one material from a single JSON record; returns its id
    pub fn register_material_json(&mut self, json: &str) -> Result<u16, JsValue> {
        let record = MaterialRecord::from_json(json).map_err(js_err)?;
        self.core.register_material(record).map_err(js_err)
    }

    pub fn catalog_json(&self) -> Result<String, JsValue> {
        self.core.catalog().to_json().map_err(js_err)
    }

    /// Picker options, `none` first
    pub fn material_names_json(&self) -> String {
        serde_json::to_string(&self.core.catalog().names()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn get_content_manifest_json(&self) -> String {
        self.core.get_content_manifest_json()
    }

    // === Settings ===

    pub fn set_allow_repeat_moves(&mut self, allow: bool) {
        let policy = if allow { MovePolicy::AllowRepeat } else { MovePolicy::SingleMove };
        self.core.set_move_policy(policy);
    }

    pub fn set_scan_top_row(&mut self, enabled: bool) {
        self.core.set_scan_top_row(enabled);
    }

    pub fn set_fallback_contact_color(&mut self, r: u8, g: u8, b: u8) {
        self.core.set_fallback_contact_color(Color::rgb(r, g, b));
    }

    pub fn reseed(&mut self, seed: u64) {
        self.core.reseed(seed);
    }

    // === Input ===

    /// Apply the brush under the pointer (surface pixels). `brush` is 1, 8 or 16.
    /// Returns the number of paint attempts.
    pub fn paint(&mut self, px: i32, py: i32, down: bool, brush: u8, material: &str) -> Result<u32, JsValue> {
        let size = BrushSize::try_from(brush).map_err(js_err)?;
        let pointer = PointerState { x: px, y: py, down };
        let selection = BrushSelection::new(size, material);
        let report = self.core.paint(pointer, &selection).map_err(js_err)?;
        Ok(report.cells_painted)
    }

    pub fn reveal_at(&mut self, x: u32, y: u32, material: &str) -> Result<bool, JsValue> {
        self.core.reveal_at(x, y, material).map_err(js_err)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === Step ===

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn stats(&self) -> StepStats {
        self.core.stats().clone()
    }

    /// Contacts from the last tick as `[{x, y, mover, target, sound}]`
    pub fn contact_events_json(&self) -> String {
        serde_json::to_string(self.core.contact_events()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Sound cues raised by the last tick, in scan order
    pub fn contact_sounds_json(&self) -> String {
        let sounds: Vec<&str> = self
            .core
            .contact_events()
            .iter()
            .filter_map(|c| c.sound.as_deref())
            .collect();
        serde_json::to_string(&sounds).unwrap_or_else(|_| "[]".to_string())
    }

    // === Render ===

    /// Get pointer to colors array (ABGR, one u32 per cell)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    /// Copy of the colors as RGBA bytes, for hosts that cannot read wasm memory
    pub fn render_rgba(&self) -> Vec<u8> {
        self.core.extract_rgba()
    }
}
