use std::fmt;

use crate::color;

/// Errors returned by the plotting operations.
///
/// Every error is detected before the figure is mutated:
/// a failed call leaves domains, series and surface untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Paired x and y arrays have different lengths
    UnevenSeriesLength {
        /// Length of the x array
        x: usize,
        /// Length of the y array
        y: usize,
    },
    /// No data to derive limits from
    EmptySeries,
    /// NaN or infinite value in the data
    NonFiniteValue(f64),
    /// A finite value too large in magnitude to be plotted
    ValueOutOfRange(f64),
    /// A color specification could not be resolved
    InvalidColorSpec(color::Error),
    /// An alignment string outside the recognized set
    InvalidAlignment(String),
    /// An axis selector other than `x` or `y`
    InvalidAxisSelector(char),
    /// An explicit limit with zero span
    DegenerateDomain(f64),
    /// A recognized option with an unusable value
    InvalidOption {
        /// The option key
        key: String,
        /// What is wrong with the value
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_option(key: &str, reason: impl Into<String>) -> Self {
        Error::InvalidOption {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<color::Error> for Error {
    fn from(err: color::Error) -> Self {
        Error::InvalidColorSpec(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnevenSeriesLength { x, y } => write!(
                f,
                "X and Y data must be the same length (got {} and {})",
                x, y
            ),
            Error::EmptySeries => write!(f, "Empty series, no data to derive limits from"),
            Error::NonFiniteValue(v) => write!(f, "Non-finite value in data: {}", v),
            Error::ValueOutOfRange(v) => write!(
                f,
                "Value out of plottable range: {:e} (magnitude limit is {:e})",
                v,
                crate::data::MAX_ABS
            ),
            Error::InvalidColorSpec(err) => write!(f, "Invalid color: {}", err),
            Error::InvalidAlignment(align) => write!(f, "Invalid alignment: '{}'", align),
            Error::InvalidAxisSelector(sel) => {
                write!(f, "Invalid axis selector: '{}' (expected 'x' or 'y')", sel)
            }
            Error::DegenerateDomain(v) => write!(f, "Degenerate domain [{v}, {v}]"),
            Error::InvalidOption { key, reason } => {
                write!(f, "Invalid value for option '{}': {}", key, reason)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidColorSpec(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type of the plotting operations
pub type Result<T> = std::result::Result<T, Error>;
