//! Sandfall Engine - falling-sand cellular automaton in WASM
//!
//! A fixed grid of cells, each holding one particle. Every tick, particles
//! move one cell according to their category (solid, liquid, gas) and the
//! per-material spread rules loaded from a material document.
//!
//! Architecture:
//! - domain/      - Materials and the material catalog
//! - spatial/     - SoA grid storage
//! - systems/     - Per-category movement rules
//! - simulation/  - World orchestration, brush, step loop, wasm facade

pub mod error;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths used across the crate
pub use spatial::grid;
pub use domain::content;
pub use domain::materials;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and `log` output to the browser console
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // A second init() finds the logger already installed
        let _ = console_log::init_with_level(log::Level::Info);
    }

    web_sys::console::log_1(&format!("Sandfall engine {} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use content::{MaterialCatalog, MaterialRecord};
pub use error::{CatalogError, PaintError, SettingsError};
pub use materials::{Color, MaterialCategory, MaterialId};
pub use simulation::{
    BrushSelection, BrushSize, MovePolicy, PointerState, SimulationSettings, StepStats, World,
    WorldCore,
};

/// Category code of `none`, for JS
#[wasm_bindgen]
pub fn category_none() -> u8 { MaterialCategory::None.code() }
#[wasm_bindgen]
pub fn category_solid() -> u8 { MaterialCategory::Solid.code() }
#[wasm_bindgen]
pub fn category_liquid() -> u8 { MaterialCategory::Liquid.code() }
#[wasm_bindgen]
pub fn category_gas() -> u8 { MaterialCategory::Gas.code() }
