use super::super::*;

impl Grid {
    // === Set particle with all data ===
    // Overwrites the whole payload; the updated flag comes from the particle (fresh paint = not updated)
    pub fn set_particle(&mut self, x: u32, y: u32, p: &Particle) {
        let idx = self.index(x, y);
        self.ids[idx] = p.material;
        self.categories[idx] = p.category;
        self.colors[idx] = p.color.to_abgr();
        self.life[idx] = p.lifetime;
        self.updated[idx] = if p.updated { 1 } else { 0 };
        self.rules[idx] = Arc::clone(&p.rules);
    }

    pub fn particle(&self, x: u32, y: u32) -> Option<Particle> {
        self.cell(x as i32, y as i32).map(|c| c.particle())
    }

    // === Clear single cell ===
    pub fn clear_cell(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.ids[idx] = MAT_NONE;
        self.categories[idx] = MaterialCategory::None;
        self.colors[idx] = EMPTY_COLOR;
        self.life[idx] = -1.0;
        self.updated[idx] = 0;
        self.rules[idx] = Arc::clone(&self.empty_rules);
    }

    // === Clear entire grid ===
    pub fn clear(&mut self) {
        self.ids.fill(MAT_NONE);
        self.categories.fill(MaterialCategory::None);
        self.colors.fill(EMPTY_COLOR);
        self.life.fill(-1.0);
        self.updated.fill(0);
        let empty = Arc::clone(&self.empty_rules);
        for r in self.rules.iter_mut() {
            *r = Arc::clone(&empty);
        }
    }
}
