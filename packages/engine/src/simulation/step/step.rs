use super::update::{update_particle, Visit};
use super::{PerfTimer, WorldCore};

/// One tick: rows bottom to top, cells left to right, one behavior call per
/// non-empty cell. Contacts and stats describe this tick only.
pub(super) fn step(world: &mut WorldCore) {
    let timer = PerfTimer::start();

    world.stats.reset();
    world.contacts.clear();
    world.grid.reset_updated();

    let width = world.grid.width();
    let height = world.grid.height();
    let top = if world.settings.scan_top_row { 0 } else { 1 };

    for y in (top..height).rev() {
        for x in 0..width {
            match update_particle(world, x, y) {
                Visit::Empty => {}
                Visit::AlreadyMoved => world.stats.skipped_updated += 1,
                Visit::Stayed => world.stats.particles_processed += 1,
                Visit::Moved => {
                    world.stats.particles_processed += 1;
                    world.stats.particles_moved += 1;
                }
            }
        }
    }

    world.stats.contacts = world.contacts.len() as u32;
    world.stats.particle_count = world.grid.non_empty_count() as u32;
    world.stats.step_ms = timer.elapsed_ms();
    world.frame += 1;

    log::trace!(
        "frame {}: processed {}, moved {}, contacts {}",
        world.frame,
        world.stats.particles_processed,
        world.stats.particles_moved,
        world.stats.contacts
    );
}
