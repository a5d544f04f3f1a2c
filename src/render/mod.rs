pub mod grid;
pub mod line;
pub mod overlay;

pub use grid::{Cell, Grid};
pub use line::{LineRenderer, auto_rows};
pub use overlay::Composer;
