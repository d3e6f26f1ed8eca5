//! Brush geometry - pointer mapping, the brush box and scatter sampling.
//!
//! The small brush paints exactly the cell under the pointer. Larger brushes
//! cover a square box of cells but only "reveal" a random 20% of its area,
//! sampled by polar offset from the box center.

use std::f32::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::materials::NONE_NAME;

/// Percentage of a brush box revealed per paint call
pub const REVEAL_PERCENT: u32 = 20;

/// Brush size. The discriminant is the half-extent of the brush box in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum BrushSize {
    #[default]
    Small = 1,
    Medium = 8,
    Big = 16,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Small, BrushSize::Medium, BrushSize::Big];

    pub fn extent(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u8> for BrushSize {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(BrushSize::Small),
            8 => Ok(BrushSize::Medium),
            16 => Ok(BrushSize::Big),
            other => Err(format!("unknown brush size {other} (expected 1, 8 or 16)")),
        }
    }
}

impl From<BrushSize> for u8 {
    fn from(b: BrushSize) -> u8 {
        b as u8
    }
}

/// Pointer position in surface pixels. Painting only happens while `down`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerState {
    pub x: i32,
    pub y: i32,
    pub down: bool,
}

impl PointerState {
    pub fn down_at(x: i32, y: i32) -> Self {
        Self { x, y, down: true }
    }
}

/// The picker state: which brush and which material name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrushSelection {
    pub size: BrushSize,
    pub material: String,
}

impl BrushSelection {
    pub fn new(size: BrushSize, material: impl Into<String>) -> Self {
        Self { size, material: material.into() }
    }
}

impl Default for BrushSelection {
    fn default() -> Self {
        Self::new(BrushSize::Small, NONE_NAME)
    }
}

/// Inclusive cell rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub x_start: u32,
    pub y_start: u32,
    pub x_end: u32,
    pub y_end: u32,
}

impl CellRect {
    pub fn width(&self) -> u32 {
        self.x_end - self.x_start + 1
    }

    pub fn height(&self) -> u32 {
        self.y_end - self.y_start + 1
    }

    pub fn area(&self) -> u32 {
        self.width() * self.height()
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x_start && x <= self.x_end && y >= self.y_start && y <= self.y_end
    }

    /// Integer midpoint, rounded toward the start corner
    pub fn center(&self) -> (u32, u32) {
        ((self.x_start + self.x_end) / 2, (self.y_start + self.y_end) / 2)
    }
}

/// Cell under a pointer at pixel `(px, py)`, clamped into a `width` x `height` grid.
///
/// The grid must have at least one cell.
pub fn pointer_to_cell(px: i32, py: i32, cell_size: u32, width: u32, height: u32) -> (u32, u32) {
    let cs = cell_size.max(1) as i64;
    let cx = (px as i64).div_euclid(cs).clamp(0, width.saturating_sub(1) as i64);
    let cy = (py as i64).div_euclid(cs).clamp(0, height.saturating_sub(1) as i64);
    (cx as u32, cy as u32)
}

/// Brush box around `cell`: `extent` cells each way, clamped to the grid
pub fn brush_bounds(cell: (u32, u32), extent: u32, width: u32, height: u32) -> CellRect {
    let (cx, cy) = cell;
    CellRect {
        x_start: cx.saturating_sub(extent),
        y_start: cy.saturating_sub(extent),
        x_end: cx.saturating_add(extent).min(width.saturating_sub(1)),
        y_end: cy.saturating_add(extent).min(height.saturating_sub(1)),
    }
}

/// Number of cells a scatter over `bounds` reveals: `floor(0.2 * area)`
pub fn scatter_count(bounds: &CellRect) -> u32 {
    bounds.area() * REVEAL_PERCENT / 100
}

/// Iterator over scatter targets inside a brush box.
///
/// Each sample picks an angle in `[0, 2pi)` and a radius in `[0, r_max]`,
/// `r_max = min(center_x - x_start, center_y - y_start)`, truncates the
/// offset position toward zero and clamps it into the box. Samples may repeat.
pub struct ScatterSampler<'r, R: Rng> {
    bounds: CellRect,
    center: (f32, f32),
    max_radius: f32,
    remaining: u32,
    rng: &'r mut R,
}

impl<'r, R: Rng> ScatterSampler<'r, R> {
    pub fn new(bounds: CellRect, rng: &'r mut R) -> Self {
        let (cx, cy) = bounds.center();
        let max_radius = (cx - bounds.x_start).min(cy - bounds.y_start) as f32;
        Self {
            bounds,
            center: (cx as f32, cy as f32),
            max_radius,
            remaining: scatter_count(&bounds),
            rng,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl<R: Rng> Iterator for ScatterSampler<'_, R> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let angle: f32 = self.rng.random_range(0.0..TAU);
        let radius: f32 = if self.max_radius > 0.0 {
            self.rng.random_range(0.0..=self.max_radius)
        } else {
            0.0
        };

        let x = (self.center.0 + radius * angle.cos()) as i64;
        let y = (self.center.1 + radius * angle.sin()) as i64;
        let b = &self.bounds;
        Some((
            x.clamp(b.x_start as i64, b.x_end as i64) as u32,
            y.clamp(b.y_start as i64, b.y_end as i64) as u32,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn brush_size_codes() {
        assert_eq!(BrushSize::Small.extent(), 1);
        assert_eq!(BrushSize::Medium.extent(), 8);
        assert_eq!(BrushSize::Big.extent(), 16);
        assert_eq!(BrushSize::try_from(8u8), Ok(BrushSize::Medium));
        assert!(BrushSize::try_from(3u8).is_err());
        assert_eq!(serde_json::to_string(&BrushSize::Big).unwrap(), "16");
        for b in BrushSize::ALL {
            assert_eq!(BrushSize::try_from(u8::from(b)), Ok(b));
        }
    }

    #[test]
    fn pointer_maps_by_integer_division_and_clamps() {
        assert_eq!(pointer_to_cell(25, 39, 10, 80, 60), (2, 3));
        assert_eq!(pointer_to_cell(-5, -1, 10, 80, 60), (0, 0));
        assert_eq!(pointer_to_cell(5000, 5000, 10, 80, 60), (79, 59));
    }

    #[test]
    fn bounds_clamp_at_grid_edges() {
        let r = brush_bounds((2, 3), 8, 80, 60);
        assert_eq!(r, CellRect { x_start: 0, y_start: 0, x_end: 10, y_end: 11 });

        let r = brush_bounds((78, 59), 16, 80, 60);
        assert_eq!(r, CellRect { x_start: 62, y_start: 43, x_end: 79, y_end: 59 });
    }

    #[test]
    fn scatter_count_is_a_fifth_of_the_box() {
        let interior = brush_bounds((40, 30), 8, 80, 60);
        assert_eq!(interior.area(), 17 * 17);
        assert_eq!(scatter_count(&interior), 57);

        let tiny = CellRect { x_start: 0, y_start: 0, x_end: 1, y_end: 1 };
        assert_eq!(scatter_count(&tiny), 0);
    }

    #[test]
    fn scatter_stays_inside_the_box() {
        let mut rng = Pcg32::seed_from_u64(11);
        for cell in [(0, 0), (40, 30), (79, 59), (3, 58)] {
            let bounds = brush_bounds(cell, 16, 80, 60);
            let samples: Vec<_> = ScatterSampler::new(bounds, &mut rng).collect();
            assert_eq!(samples.len() as u32, scatter_count(&bounds));
            for (x, y) in samples {
                assert!(bounds.contains(x, y), "({x}, {y}) outside {bounds:?}");
            }
        }
    }

    #[test]
    fn two_column_box_collapses_to_its_center() {
        // Center column == start column, so r_max is 0
        let bounds = brush_bounds((1, 30), 16, 2, 60);
        assert_eq!(bounds.center(), (0, 30));
        let mut rng = Pcg32::seed_from_u64(3);
        let samples: Vec<_> = ScatterSampler::new(bounds, &mut rng).collect();
        assert!(!samples.is_empty());
        let center = bounds.center();
        assert!(samples.iter().all(|&s| s == center));
    }
}
