use crate::error::PaintError;
use crate::grid::Particle;
use crate::materials::MaterialId;

use super::brush::{brush_bounds, pointer_to_cell, BrushSelection, BrushSize, PointerState, ScatterSampler};
use super::WorldCore;

/// What one paint call did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintReport {
    pub material: MaterialId,
    /// Write attempts; scatter samples may hit the same cell twice
    pub cells_painted: u32,
}

/// Resolve once, before any cell is touched, so an unknown name leaves the grid as it was
fn resolve(world: &WorldCore, material: &str) -> Result<Particle, PaintError> {
    match world.catalog.lookup(material) {
        Ok(def) => Ok(Particle::from_definition(def)),
        Err(_) => {
            log::warn!("paint refused: unknown material '{}'", material);
            Err(PaintError::UnknownMaterial(material.to_string()))
        }
    }
}

pub(super) fn reveal_at(world: &mut WorldCore, x: u32, y: u32, material: &str) -> Result<bool, PaintError> {
    let particle = resolve(world, material)?;
    if x >= world.grid.width() || y >= world.grid.height() {
        return Ok(false);
    }
    world.grid.set_particle(x, y, &particle);
    Ok(true)
}

pub(super) fn paint(
    world: &mut WorldCore,
    pointer: PointerState,
    selection: &BrushSelection,
) -> Result<PaintReport, PaintError> {
    if !pointer.down {
        return Ok(PaintReport::default());
    }

    let particle = resolve(world, &selection.material)?;
    let mut report = PaintReport { material: particle.material, cells_painted: 0 };
    if world.grid.size() == 0 {
        return Ok(report);
    }

    let (width, height) = (world.grid.width(), world.grid.height());
    let cell = pointer_to_cell(pointer.x, pointer.y, world.settings.cell_size, width, height);

    match selection.size {
        BrushSize::Small => {
            world.grid.set_particle(cell.0, cell.1, &particle);
            report.cells_painted = 1;
        }
        size => {
            let bounds = brush_bounds(cell, size.extent(), width, height);
            for (x, y) in ScatterSampler::new(bounds, &mut world.rng) {
                world.grid.set_particle(x, y, &particle);
                report.cells_painted += 1;
            }
        }
    }

    Ok(report)
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.contacts.clear();
}
