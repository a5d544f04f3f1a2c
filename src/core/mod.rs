//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod rng;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, ColorId, ColorMap, ColorPair};
pub use config::{ColorSpec, LabelFormat, RenderOptions, RenderOptionsBuilder};
pub use constants::{AXIS_OFFSET, DEFAULT_FORMAT, DEFAULT_HEIGHT, MIN_ROWS};
pub use data::{Series, Value};
pub use error::{ArgumentError, ChartError, DimensionError};
