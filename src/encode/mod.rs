pub mod gif;
pub mod tool;
