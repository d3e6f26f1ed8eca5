//! Material Definitions
//!
//! A material is identified by a small integer id handed out by the catalog.
//! Id 0 is always the reserved `none` material: the empty cell.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub type MaterialId = u16;

/// Reserved id of the empty material
pub const MAT_NONE: MaterialId = 0;

/// Reserved name of the empty material
pub const NONE_NAME: &str = "none";

/// Coarse behavior class. Selects which movement rule runs for a particle.
///
/// Serialized as the numeric `type` code used by material documents
/// (0 = none, 1 = solid, 2 = liquid, 3 = gas).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum MaterialCategory {
    #[default]
    None = 0,
    Solid = 1,
    Liquid = 2,
    Gas = 3,
}

impl MaterialCategory {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            MaterialCategory::None => "none",
            MaterialCategory::Solid => "solid",
            MaterialCategory::Liquid => "liquid",
            MaterialCategory::Gas => "gas",
        }
    }
}

impl TryFrom<u8> for MaterialCategory {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MaterialCategory::None),
            1 => Ok(MaterialCategory::Solid),
            2 => Ok(MaterialCategory::Liquid),
            3 => Ok(MaterialCategory::Gas),
            _ => Err(format!("unknown material type code: {}", code)),
        }
    }
}

impl From<MaterialCategory> for u8 {
    fn from(c: MaterialCategory) -> u8 {
        c.code()
    }
}

/// RGBA display color.
///
/// Documents store colors as `[r, g, b]` floats in 0..=255 (color-picker output);
/// anything parsed from a document is fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as ABGR (little-endian bytes come out as [R, G, B, A]) for direct canvas upload
    #[inline]
    pub fn to_abgr(self) -> u32 {
        ((self.a as u32) << 24) | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }

    #[inline]
    pub fn from_abgr(packed: u32) -> Self {
        Self {
            r: (packed & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: ((packed >> 16) & 0xFF) as u8,
            a: (packed >> 24) as u8,
        }
    }
}

impl From<[f32; 3]> for Color {
    fn from(c: [f32; 3]) -> Self {
        let channel = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        Color::rgb(channel(c[0]), channel(c[1]), channel(c[2]))
    }
}

impl From<Color> for [f32; 3] {
    fn from(c: Color) -> Self {
        [c.r as f32, c.g as f32, c.b as f32]
    }
}

/// What a material may displace, and how it looks and sounds on contact.
///
/// Keys are resolved material ids; the catalog owns the name mapping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpreadRules {
    pub can_replace: BTreeSet<MaterialId>,
    pub contact_colors: BTreeMap<MaterialId, Color>,
    pub contact_sounds: BTreeMap<MaterialId, String>,
    /// Carried from the document; no movement rule reads it.
    pub spread_speed: i32,
}

impl SpreadRules {
    #[inline]
    pub fn can_replace(&self, target: MaterialId) -> bool {
        self.can_replace.contains(&target)
    }

    #[inline]
    pub fn contact_color(&self, target: MaterialId) -> Option<Color> {
        self.contact_colors.get(&target).copied()
    }

    #[inline]
    pub fn contact_sound(&self, target: MaterialId) -> Option<&str> {
        self.contact_sounds.get(&target).map(String::as_str)
    }
}

/// A catalog entry. Painting copies `rules` (an `Arc`) into the particle, so
/// replacing the entry later never reaches particles that are already placed.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDefinition {
    pub id: MaterialId,
    pub name: String,
    pub category: MaterialCategory,
    pub initial_color: Color,
    /// Negative means "lives forever"
    pub initial_lifetime: f32,
    pub rules: Arc<SpreadRules>,
}

impl MaterialDefinition {
    pub fn none() -> Self {
        Self {
            id: MAT_NONE,
            name: NONE_NAME.to_string(),
            category: MaterialCategory::None,
            initial_color: Color::TRANSPARENT,
            initial_lifetime: -1.0,
            rules: Arc::new(SpreadRules::default()),
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.category == MaterialCategory::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_codes_match_document_type_field() {
        assert_eq!(MaterialCategory::try_from(2), Ok(MaterialCategory::Liquid));
        assert!(MaterialCategory::try_from(4).is_err());
        assert_eq!(u8::from(MaterialCategory::Gas), 3);
    }

    #[test]
    fn abgr_packing_puts_red_in_low_byte() {
        let c = Color::rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.to_abgr(), 0x4433_2211);
        assert_eq!(Color::from_abgr(c.to_abgr()), c);
    }

    #[test]
    fn float_triplets_are_rounded_and_clamped() {
        let c = Color::from([254.6, -3.0, 300.0]);
        assert_eq!(c, Color::rgb(255, 0, 255));
    }
}
