use std::collections::BTreeMap;

use super::*;

impl Grid {
    /// Cell count per material identity, `none` included
    pub fn material_histogram(&self) -> BTreeMap<MaterialId, usize> {
        let mut counts = BTreeMap::new();
        for &id in self.ids.iter() {
            *counts.entry(id).or_insert(0) += 1;
        }
        counts
    }

    pub fn non_empty_count(&self) -> usize {
        self.categories
            .iter()
            .filter(|&&c| c != MaterialCategory::None)
            .count()
    }
}
