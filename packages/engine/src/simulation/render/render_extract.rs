use crate::materials::Color;

use super::WorldCore;

/// Screen rectangle in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Cell `(x, y)` covers pixels `[x*cs, x*cs + cs) x [y*cs, y*cs + cs)`
pub fn cell_rect(x: u32, y: u32, cell_size: u32) -> PixelRect {
    PixelRect {
        x: x * cell_size,
        y: y * cell_size,
        w: cell_size,
        h: cell_size,
    }
}

pub(super) fn render_cells(world: &WorldCore) -> impl Iterator<Item = (PixelRect, Color)> + '_ {
    let cs = world.settings.cell_size;
    world
        .grid
        .render_cells()
        .map(move |(x, y, color)| (cell_rect(x, y, cs), color))
}

/// ABGR words are RGBA bytes in little-endian order
pub(super) fn extract_rgba(world: &WorldCore) -> Vec<u8> {
    let mut out = Vec::with_capacity(world.grid.size() * 4);
    for &c in world.grid.colors.iter() {
        out.extend_from_slice(&c.to_le_bytes());
    }
    out
}
