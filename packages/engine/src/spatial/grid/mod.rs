//! Grid - Structure of Arrays (SoA) particle storage
//!
//! Every cell always holds exactly one particle; "empty" is the `none`
//! material, never the absence of a cell. The grid is sized once and never resizes.
//!
//! Instead of: Vec<Box<Particle>>  // one allocation per cell
//! We have:    ids[], categories[], colors[], life[], updated[], rules[]

use std::sync::Arc;

use crate::materials::{Color, MaterialCategory, MaterialId, SpreadRules, MAT_NONE};

/// Empty cells render as transparent black
pub(crate) const EMPTY_COLOR: u32 = 0x0000_0000;

mod particle;
pub use particle::Particle;

mod indexing;
mod accessors;
mod moves;
mod census;

pub use accessors::CellRef;

/// SoA Grid - all particle data in separate arrays
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub ids: Vec<MaterialId>,              // Material identity (0 = none)
    pub categories: Vec<MaterialCategory>, // Cached category, selects the movement rule
    pub colors: Vec<u32>,                  // ABGR packed display color
    pub life: Vec<f32>,                    // Remaining lifetime (negative = forever)
    pub updated: Vec<u8>,                  // 0 = not moved, 1 = moved this tick
    pub rules: Vec<Arc<SpreadRules>>,      // Per-particle copy taken at paint time

    empty_rules: Arc<SpreadRules>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        let empty_rules = Arc::new(SpreadRules::default());
        Self {
            width,
            height,
            size,
            ids: vec![MAT_NONE; size],
            categories: vec![MaterialCategory::None; size],
            colors: vec![EMPTY_COLOR; size],
            life: vec![-1.0; size],
            updated: vec![0; size],
            rules: vec![empty_rules.clone(); size],
            empty_rules,
        }
    }

    /// Read-only view for the renderer: `(x, y, color)` in row-major order
    pub fn render_cells(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        self.colors.iter().enumerate().map(move |(idx, &c)| {
            let (x, y) = self.coords(idx);
            (x, y, Color::from_abgr(c))
        })
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{MaterialDefinition, SpreadRules};

    fn solid(id: MaterialId, color: Color) -> Particle {
        Particle::from_definition(&MaterialDefinition {
            id,
            name: format!("m{}", id),
            category: MaterialCategory::Solid,
            initial_color: color,
            initial_lifetime: 3.0,
            rules: Arc::new(SpreadRules::default()),
        })
    }

    #[test]
    fn new_grid_is_all_empty() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.size(), 12);
        assert!(grid.ids.iter().all(|&id| id == MAT_NONE));
        assert_eq!(grid.non_empty_count(), 0);
    }

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(5, 4);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(4, 0), 4);
        assert_eq!(grid.index(0, 1), 5);
        assert_eq!(grid.index(3, 2), 13);
        assert_eq!(grid.coords(13), (3, 2));
    }

    #[test]
    fn cell_lookup_is_none_outside_the_grid() {
        let grid = Grid::new(3, 3);
        assert!(grid.cell(-1, 0).is_none());
        assert!(grid.cell(0, -1).is_none());
        assert!(grid.cell(3, 0).is_none());
        assert!(grid.cell(0, 3).is_none());
        assert!(grid.cell(2, 2).is_some());
        assert!(!grid.is_empty(5, 5));
    }

    #[test]
    fn swap_exchanges_full_payload() {
        let mut grid = Grid::new(2, 1);
        let a = solid(1, Color::rgb(10, 20, 30));
        grid.set_particle(0, 0, &a);
        grid.set_updated(0, 0, true);

        grid.swap(0, 0, 1, 0);

        assert!(grid.is_empty(0, 0));
        let moved = grid.particle(1, 0).unwrap();
        assert_eq!(moved.material, 1);
        assert_eq!(moved.category, MaterialCategory::Solid);
        assert_eq!(moved.color, Color::rgb(10, 20, 30));
        assert_eq!(moved.lifetime, 3.0);
        assert!(moved.updated);
        assert!(Arc::ptr_eq(&moved.rules, &a.rules));
    }

    #[test]
    fn histogram_counts_by_identity() {
        let mut grid = Grid::new(3, 3);
        grid.set_particle(0, 0, &solid(1, Color::BLACK));
        grid.set_particle(1, 0, &solid(1, Color::BLACK));
        grid.set_particle(2, 2, &solid(2, Color::BLACK));

        let h = grid.material_histogram();
        assert_eq!(h.get(&1), Some(&2));
        assert_eq!(h.get(&2), Some(&1));
        assert_eq!(h.get(&MAT_NONE), Some(&6));
        assert_eq!(grid.non_empty_count(), 3);
    }

    #[test]
    fn clear_cell_restores_none() {
        let mut grid = Grid::new(2, 2);
        grid.set_particle(1, 1, &solid(4, Color::rgb(1, 1, 1)));
        grid.clear_cell(1, 1);
        let cell = grid.cell(1, 1).unwrap();
        assert!(cell.is_empty());
        assert_eq!(cell.color(), Color::TRANSPARENT);
    }
}
