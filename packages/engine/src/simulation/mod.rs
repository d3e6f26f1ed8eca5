//! World - falling-sand simulation
//!
//! WorldCore owns the grid, the material catalog, the RNG and the per-tick
//! outputs. It only orchestrates; movement lives in behaviors/, painting in
//! commands/, the tick loop in step/.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand_pcg::Pcg32;

use crate::behaviors::{BehaviorRegistry, ContactEvent};
use crate::domain::content::{MaterialCatalog, MaterialRecord};
use crate::error::{CatalogError, PaintError, SettingsError};
use crate::grid::{CellRef, Grid, Particle};
use crate::materials::{Color, MaterialId};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/update.rs"]
mod update;
#[path = "step/step.rs"]
mod step;
#[path = "commands/brush.rs"]
pub mod brush;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use brush::{BrushSelection, BrushSize, CellRect, PointerState, ScatterSampler};
pub use commands::PaintReport;
pub use facade::World;
pub use perf_stats::StepStats;
pub use render_extract::{cell_rect, PixelRect};
pub use settings::{MovePolicy, SimulationSettings};

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    catalog: Arc<MaterialCatalog>,
    grid: Grid,
    behaviors: BehaviorRegistry,
    settings: SimulationSettings,

    // State
    rng: Pcg32,
    frame: u64,

    // Per-tick outputs, replaced by every step
    contacts: Vec<ContactEvent>,
    stats: StepStats,
}

impl WorldCore {
    /// Create a `width` x `height` cell world with the built-in materials and default settings
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, SimulationSettings::default())
    }

    /// Create a `width` x `height` cell world with explicit settings
    pub fn with_settings(width: u32, height: u32, settings: SimulationSettings) -> Self {
        init::create_world_core(width, height, settings)
    }

    /// Size the grid from a pixel surface: `floor(px / cell_size)` cells per axis
    pub fn from_surface(
        surface_width: u32,
        surface_height: u32,
        settings: SimulationSettings,
    ) -> Result<Self, SettingsError> {
        let (width, height) = settings.grid_dimensions(surface_width, surface_height)?;
        Ok(Self::with_settings(width, height, settings))
    }

    // === Catalog ===

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    /// Swap in a new catalog. Ids are not stable across catalogs, so the grid is cleared.
    pub fn set_catalog(&mut self, catalog: MaterialCatalog) {
        self.catalog = Arc::new(catalog);
        self.clear();
    }

    pub fn load_catalog_json(&mut self, json: &str) -> Result<(), CatalogError> {
        let catalog = MaterialCatalog::from_json(json)?;
        self.set_catalog(catalog);
        Ok(())
    }

    /// Add or replace one material. Placed particles keep the rules they were painted with.
    pub fn register_material(&mut self, record: MaterialRecord) -> Result<MaterialId, CatalogError> {
        Arc::make_mut(&mut self.catalog).register(record)
    }

    pub fn get_content_manifest_json(&self) -> String {
        self.catalog.manifest_json()
    }

    // === Queries ===

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<CellRef<'_>> {
        self.grid.cell(x, y)
    }

    pub fn particle_at(&self, x: u32, y: u32) -> Option<Particle> {
        self.grid.particle(x, y)
    }

    /// Name of the material at `(x, y)`, `None` when out of bounds
    pub fn material_name_at(&self, x: u32, y: u32) -> Option<&str> {
        let id = self.grid.cell(x as i32, y as i32)?.material();
        self.catalog.name_of(id)
    }

    pub fn particle_count(&self) -> usize {
        self.grid.non_empty_count()
    }

    pub fn material_histogram(&self) -> BTreeMap<MaterialId, usize> {
        self.grid.material_histogram()
    }

    // === Settings ===

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn set_move_policy(&mut self, policy: MovePolicy) {
        settings::set_move_policy(self, policy);
    }

    pub fn set_scan_top_row(&mut self, enabled: bool) {
        settings::set_scan_top_row(self, enabled);
    }

    pub fn set_fallback_contact_color(&mut self, color: Color) {
        settings::set_fallback_contact_color(self, color);
    }

    /// Restart the random stream (scatter and gas order) from `seed`
    pub fn reseed(&mut self, seed: u64) {
        settings::reseed(self, seed);
    }

    // === Commands ===

    /// Place one particle of `material` at `(x, y)`. Returns false when out of bounds.
    pub fn reveal_at(&mut self, x: u32, y: u32, material: &str) -> Result<bool, PaintError> {
        commands::reveal_at(self, x, y, material)
    }

    /// Apply the brush under `pointer`. Does nothing unless the pointer is down.
    pub fn paint(
        &mut self,
        pointer: PointerState,
        selection: &BrushSelection,
    ) -> Result<PaintReport, PaintError> {
        commands::paint(self, pointer, selection)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === Step ===

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Displacements that happened during the last tick
    pub fn contact_events(&self) -> &[ContactEvent] {
        &self.contacts
    }

    pub fn stats(&self) -> &StepStats {
        &self.stats
    }

    // === Render ===

    pub fn cell_size(&self) -> u32 {
        self.settings.cell_size
    }

    /// Pixel rectangle of each cell with its color, row-major
    pub fn render_cells(&self) -> impl Iterator<Item = (PixelRect, Color)> + '_ {
        render_extract::render_cells(self)
    }

    /// Colors as RGBA bytes, one cell per 4 bytes
    pub fn extract_rgba(&self) -> Vec<u8> {
        render_extract::extract_rgba(self)
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.grid.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.grid.size()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
