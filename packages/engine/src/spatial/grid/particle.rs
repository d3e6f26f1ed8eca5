use std::sync::Arc;

use crate::materials::{Color, MaterialCategory, MaterialDefinition, MaterialId, SpreadRules, MAT_NONE};

/// Owned snapshot of one cell's payload.
///
/// The grid stores these fields split across its arrays; this is the value
/// handed in by painting and handed out to callers that want a copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub material: MaterialId,
    pub category: MaterialCategory,
    pub color: Color,
    pub lifetime: f32,
    pub updated: bool,
    pub rules: Arc<SpreadRules>,
}

impl Particle {
    pub fn empty() -> Self {
        Self {
            material: MAT_NONE,
            category: MaterialCategory::None,
            color: Color::TRANSPARENT,
            lifetime: -1.0,
            updated: false,
            rules: Arc::new(SpreadRules::default()),
        }
    }

    /// Fresh particle for painting. New particles are NOT marked updated, so they may move this tick.
    pub fn from_definition(def: &MaterialDefinition) -> Self {
        Self {
            material: def.id,
            category: def.category,
            color: def.initial_color,
            lifetime: def.initial_lifetime,
            updated: false,
            rules: Arc::clone(&def.rules),
        }
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::empty()
    }
}
