mod cell_ref;
mod particle_ops;
mod type_color;
mod updated;

pub use cell_ref::CellRef;
