use crate::behaviors::UpdateContext;
use crate::materials::MaterialCategory;

use super::settings::MovePolicy;
use super::WorldCore;

/// Outcome of visiting one cell during the scan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Visit {
    Empty,
    AlreadyMoved,
    Stayed,
    Moved,
}

/// Run the movement rule for the particle at `(x, y)`
pub(super) fn update_particle(world: &mut WorldCore, x: u32, y: u32) -> Visit {
    let idx = world.grid.index(x, y);
    let category = world.grid.get_category_idx(idx);
    if category == MaterialCategory::None {
        return Visit::Empty;
    }

    let policy = world.settings.move_policy;
    if policy == MovePolicy::SingleMove && world.grid.is_updated_idx(idx) {
        return Visit::AlreadyMoved;
    }

    let mut ctx = UpdateContext {
        grid: &mut world.grid,
        rng: &mut world.rng,
        contacts: &mut world.contacts,
        policy,
        fallback_color: world.settings.fallback_contact_color,
        x,
        y,
    };

    if world.behaviors.update(category, &mut ctx) {
        Visit::Moved
    } else {
        Visit::Stayed
    }
}
