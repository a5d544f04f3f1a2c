//! A collection of constants.

/// Upper corner of a falling segment
pub const DECREASING_HI: &str = "╮";
/// Lower corner of a falling segment
pub const DECREASING_LO: &str = "╰";
/// Upper corner of a rising segment
pub const INCREASING_HI: &str = "╯";
/// Lower corner of a rising segment
pub const INCREASING_LO: &str = "╭";
pub const VERTICAL: &str = "│";
pub const HORIZONTAL: &str = "-";
/// Placed right after every y label
pub const AXIS_MARK: &str = " ┤";
pub const BLANK_SPACE: &str = " ";

/// One cell for the label and one for the axis mark
pub const AXIS_OFFSET: usize = 2;

/// Row count used when none is given and the value range is outside
/// [`AUTO_HEIGHT_MIN`, `AUTO_HEIGHT_MAX`].
pub const DEFAULT_HEIGHT: usize = 5;
pub const AUTO_HEIGHT_MIN: f64 = 5.0;
pub const AUTO_HEIGHT_MAX: f64 = 20.0;

/// Anything less leaves `step` undefined.
pub const MIN_ROWS: usize = 2;

/// Width 8, two decimals, one trailing space.
pub const DEFAULT_FORMAT: &str = "%8.2f ";
