use super::super::*;

impl Grid {
    /// False outside the grid: there is nothing to move into
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        match self.index_checked(x, y) {
            Some(idx) => self.categories[idx] == MaterialCategory::None,
            None => false,
        }
    }

    #[inline]
    pub fn is_empty_idx(&self, idx: usize) -> bool {
        self.categories[idx] == MaterialCategory::None
    }

    // === Identity / category access ===
    #[inline]
    pub fn get_material(&self, x: i32, y: i32) -> MaterialId {
        match self.index_checked(x, y) {
            Some(idx) => self.ids[idx],
            None => MAT_NONE,
        }
    }

    #[inline]
    pub fn get_category_idx(&self, idx: usize) -> MaterialCategory {
        self.categories[idx]
    }

    // === Color access ===
    #[inline]
    pub fn get_color(&self, x: u32, y: u32) -> Color {
        Color::from_abgr(self.colors[self.index(x, y)])
    }

    #[inline]
    pub fn set_color_idx(&mut self, idx: usize, c: Color) {
        self.colors[idx] = c.to_abgr();
    }
}
