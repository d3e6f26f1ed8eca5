use super::*;

impl Grid {
    // === Swap two cells (all data) ===
    // The only grid mutation an update tick performs.
    pub fn swap(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) {
        let idx1 = self.index(x1, y1);
        let idx2 = self.index(x2, y2);

        self.swap_idx(idx1, idx2);
    }

    #[inline]
    pub fn swap_idx(&mut self, idx1: usize, idx2: usize) {
        self.ids.swap(idx1, idx2);
        self.categories.swap(idx1, idx2);
        self.colors.swap(idx1, idx2);
        self.life.swap(idx1, idx2);
        self.updated.swap(idx1, idx2);
        // Pointer swap only, the rule records themselves never move
        self.rules.swap(idx1, idx2);
    }
}
