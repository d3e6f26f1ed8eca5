use std::sync::Arc;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::behaviors::BehaviorRegistry;
use crate::domain::content::MaterialCatalog;
use crate::grid::Grid;

use super::perf_stats::StepStats;
use super::settings::SimulationSettings;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32, settings: SimulationSettings) -> WorldCore {
    log::debug!(
        "world created: {}x{} cells, cell size {} px, seed {}",
        width,
        height,
        settings.cell_size,
        settings.seed
    );

    WorldCore {
        catalog: Arc::new(MaterialCatalog::builtin()),
        grid: Grid::new(width, height),
        behaviors: BehaviorRegistry::new(),
        rng: Pcg32::seed_from_u64(settings.seed),
        settings,
        frame: 0,
        contacts: Vec::with_capacity(64),
        stats: StepStats::default(),
    }
}
