pub mod axis;
pub mod grid;
