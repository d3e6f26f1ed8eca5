//! Behaviors - per-category movement rules
//!
//! Each rule inspects a fixed set of neighbor offsets and performs at most
//! one swap, chosen by a strict priority order. Row offsets: -1 = up, +1 = down.

mod common;
mod solid;
mod liquid;
mod gas;

pub use common::ContactEvent;
pub use solid::SolidBehavior;
pub use liquid::LiquidBehavior;
pub use gas::GasBehavior;

use rand_pcg::Pcg32;

use crate::grid::Grid;
use crate::materials::{Color, MaterialCategory};
use crate::simulation::MovePolicy;

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut Pcg32,
    pub contacts: &'a mut Vec<ContactEvent>,
    pub policy: MovePolicy,
    pub fallback_color: Color,
    pub x: u32,
    pub y: u32,
}

/// Behavior trait - each category implements this.
/// Returns true when the particle moved.
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool;
}

/// Behavior registry - dispatch by category
pub struct BehaviorRegistry {
    solid: SolidBehavior,
    liquid: LiquidBehavior,
    gas: GasBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            solid: SolidBehavior::new(),
            liquid: LiquidBehavior::new(),
            gas: GasBehavior::new(),
        }
    }

    /// Dispatch update to the rule for `category`
    pub fn update(&self, category: MaterialCategory, ctx: &mut UpdateContext) -> bool {
        match category {
            MaterialCategory::Solid => self.solid.update(ctx),
            MaterialCategory::Liquid => self.liquid.update(ctx),
            MaterialCategory::Gas => self.gas.update(ctx),
            MaterialCategory::None => false,
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
