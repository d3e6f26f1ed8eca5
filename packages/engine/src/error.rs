//! Error types surfaced by the engine.
//!
//! Out-of-bounds neighbor lookups are not errors (they return `None`);
//! everything here is a reportable per-operation failure.

use thiserror::Error;

/// Failures raised while building or querying a [`MaterialCatalog`](crate::domain::content::MaterialCatalog).
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("failed to parse material document: {0}")]
    Parse(String),

    #[error("material not found: {0}")]
    NotFound(String),

    #[error("duplicate material name: {0}")]
    DuplicateName(String),

    #[error("material {name} has unknown type code {code}")]
    UnknownCategory { name: String, code: u8 },

    #[error("material {name} references undefined material {reference}")]
    UnknownReference { name: String, reference: String },

    #[error("material name {0} is reserved")]
    ReservedName(String),

    #[error("material name must not be empty")]
    EmptyName,

    #[error("too many materials: limit is {0}")]
    TooManyMaterials(usize),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

/// Failures raised by brush painting.
#[derive(Debug, Error, PartialEq)]
pub enum PaintError {
    #[error("cannot paint unknown material: {0}")]
    UnknownMaterial(String),
}

/// Failures raised while applying simulation settings.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,

    #[error("surface {width}x{height} px is smaller than one {cell_size} px cell")]
    SurfaceTooSmall { width: u32, height: u32, cell_size: u32 },

    #[error("failed to parse settings: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e.to_string())
    }
}
