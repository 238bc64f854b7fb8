mod grid;
mod loader;
mod trimmer;

pub use grid::{Cell, CellSize, Grid};
pub use loader::load_sheet;
pub use trimmer::{trim_bounds, visible_bounds};
