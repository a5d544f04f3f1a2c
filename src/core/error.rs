//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{color::ColorError, data::ParseCsvError};

/// Caller handed us something malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentError {
    EmptyBatch,
    LengthMismatch { lengths: Vec<usize> },
    ColorCountMismatch { colors: usize, series: usize },
    OffsetOutOfRange { offset: usize, len: usize },
    NonFinite { series: usize, index: usize },
    RangeOverflow { min: f64, max: f64 },
    BadFormat(String),
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::EmptyBatch => f.write_str("series batch is empty"),
            ArgumentError::LengthMismatch { lengths } => {
                write!(f, "series must have the same dimensions: got {lengths:?}")
            }
            ArgumentError::ColorCountMismatch { colors, series } => write!(
                f,
                "got {colors} colors for {series} series, counts must match"
            ),
            ArgumentError::OffsetOutOfRange { offset, len } => write!(
                f,
                "axis offset {offset} must be less or equal to series size {len}"
            ),
            ArgumentError::NonFinite { series, index } => {
                write!(f, "series {series} has a non-finite value at index {index}")
            }
            ArgumentError::RangeOverflow { min, max } => {
                write!(f, "value span {min:e}..{max:e} is too wide to scale")
            }
            ArgumentError::BadFormat(t) => write!(f, "unusable label format `{t}`"),
        }
    }
}
impl Error for ArgumentError {}

/// The grid cannot be laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    TooFewRows(usize),
    TooFewPoints(usize),
    GridMismatch {
        want: (usize, usize),
        got: (usize, usize),
    },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::TooFewRows(n) => write!(f, "chart needs ≥2 rows, got {n}"),
            DimensionError::TooFewPoints(n) => {
                write!(f, "series needs ≥2 values to draw, got {n}")
            }
            DimensionError::GridMismatch { want, got } => write!(
                f,
                "cannot overlay {}×{} grid onto {}×{}",
                got.0, got.1, want.0, want.1
            ),
        }
    }
}
impl Error for DimensionError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum ChartError {
    InvalidArgument(ArgumentError),
    InvalidColor(ColorError),
    InvalidDimensions(DimensionError),
    Io(io::Error),
    Csv(ParseCsvError),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::InvalidArgument(e) => write!(f, "invalid argument: {e}"),
            ChartError::InvalidColor(e) => write!(f, "invalid color: {e}"),
            ChartError::InvalidDimensions(e) => write!(f, "invalid dimensions: {e}"),
            ChartError::Io(e) => write!(f, "{e}"),
            ChartError::Csv(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChartError::InvalidArgument(e) => Some(e),
            ChartError::InvalidColor(e) => Some(e),
            ChartError::InvalidDimensions(e) => Some(e),
            ChartError::Io(e) => Some(e),
            ChartError::Csv(e) => Some(e),
        }
    }
}

// automatic conversions
impl From<ArgumentError> for ChartError {
    fn from(e: ArgumentError) -> Self {
        Self::InvalidArgument(e)
    }
}
impl From<ColorError> for ChartError {
    fn from(e: ColorError) -> Self {
        Self::InvalidColor(e)
    }
}
impl From<DimensionError> for ChartError {
    fn from(e: DimensionError) -> Self {
        Self::InvalidDimensions(e)
    }
}
impl From<io::Error> for ChartError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for ChartError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
