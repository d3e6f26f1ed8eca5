use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::materials::Color;

use super::WorldCore;

pub const DEFAULT_CELL_SIZE: u32 = 10;
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

/// What a particle that already moved this tick may do when the scan reaches it again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MovePolicy {
    /// Moved particles are flagged and skipped for the rest of the tick.
    #[default]
    SingleMove,
    /// No flags; a particle carried ahead of the scan moves again in the same tick.
    AllowRepeat,
}

/// Host-tunable knobs. Every field has a default, so `{}` is a valid document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationSettings {
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    pub move_policy: MovePolicy,
    /// When false the top row is never visited by the scan
    pub scan_top_row: bool,
    /// Color a mover takes when it displaces a target with no `contact_colors` entry
    pub fallback_contact_color: Color,
    pub seed: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            move_policy: MovePolicy::SingleMove,
            scan_top_row: true,
            fallback_contact_color: Color::BLACK,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        log::debug!(
            "settings applied: cell_size={} policy={:?} scan_top_row={} seed={}",
            settings.cell_size,
            settings.move_policy,
            settings.scan_top_row,
            settings.seed
        );
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.cell_size == 0 {
            return Err(SettingsError::ZeroCellSize);
        }
        Ok(())
    }

    /// Grid size in cells for a surface of `width` x `height` pixels
    pub fn grid_dimensions(&self, width: u32, height: u32) -> Result<(u32, u32), SettingsError> {
        self.validate()?;
        let cols = width / self.cell_size;
        let rows = height / self.cell_size;
        if cols == 0 || rows == 0 {
            return Err(SettingsError::SurfaceTooSmall {
                width,
                height,
                cell_size: self.cell_size,
            });
        }
        Ok((cols, rows))
    }
}

pub(super) fn set_move_policy(world: &mut WorldCore, policy: MovePolicy) {
    world.settings.move_policy = policy;
    log::debug!("settings applied: policy={:?}", policy);
}

pub(super) fn set_scan_top_row(world: &mut WorldCore, enabled: bool) {
    world.settings.scan_top_row = enabled;
    log::debug!("settings applied: scan_top_row={}", enabled);
}

pub(super) fn set_fallback_contact_color(world: &mut WorldCore, color: Color) {
    world.settings.fallback_contact_color = color;
    log::debug!("settings applied: fallback_contact_color={:?}", color);
}

pub(super) fn reseed(world: &mut WorldCore, seed: u64) {
    world.settings.seed = seed;
    world.rng = Pcg32::seed_from_u64(seed);
    log::debug!("settings applied: seed={}", seed);
}
