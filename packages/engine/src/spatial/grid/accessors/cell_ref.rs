use super::super::*;

/// Borrowed view of one in-bounds cell
#[derive(Clone, Copy)]
pub struct CellRef<'a> {
    grid: &'a Grid,
    idx: usize,
}

impl<'a> CellRef<'a> {
    #[inline]
    pub fn material(&self) -> MaterialId {
        self.grid.ids[self.idx]
    }

    #[inline]
    pub fn category(&self) -> MaterialCategory {
        self.grid.categories[self.idx]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.category() == MaterialCategory::None
    }

    #[inline]
    pub fn color(&self) -> Color {
        Color::from_abgr(self.grid.colors[self.idx])
    }

    #[inline]
    pub fn lifetime(&self) -> f32 {
        self.grid.life[self.idx]
    }

    #[inline]
    pub fn is_updated(&self) -> bool {
        self.grid.updated[self.idx] == 1
    }

    #[inline]
    pub fn rules(&self) -> &'a SpreadRules {
        &self.grid.rules[self.idx]
    }

    /// Owned copy of the payload
    pub fn particle(&self) -> Particle {
        Particle {
            material: self.material(),
            category: self.category(),
            color: self.color(),
            lifetime: self.lifetime(),
            updated: self.is_updated(),
            rules: Arc::clone(&self.grid.rules[self.idx]),
        }
    }
}

impl Grid {
    /// The cell at `(x, y)`, or `None` outside the grid.
    /// Edge and corner neighbor lookups land here constantly; `None` just means "no move that way".
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Option<CellRef<'_>> {
        let idx = self.index_checked(x, y)?;
        Some(CellRef { grid: self, idx })
    }
}
