pub mod content;
pub mod materials;
