//! Data points and domains.
//!
//! Domains only grow from data: [`merge`] widens an existing domain to cover new values.
//! Shrinking a domain is reserved to explicit limits set on the figure.

use std::fmt;

use crate::{Error, Result};

/// A data point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Build a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// A closed numeric interval `[lo, hi]` with finite bounds and `lo <= hi`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    lo: f64,
    hi: f64,
}

impl Domain {
    /// Build a domain from two finite bounds, in any order
    pub fn new(a: f64, b: f64) -> Result<Self> {
        check_finite(&[a, b])?;
        Ok(Domain {
            lo: a.min(b),
            hi: a.max(b),
        })
    }

    /// Build a domain from bounds known to be finite and ordered
    pub(crate) fn from_sorted(lo: f64, hi: f64) -> Self {
        debug_assert!(lo.is_finite() && hi.is_finite() && lo <= hi);
        Domain { lo, hi }
    }

    /// A domain containing a single value
    pub fn point(v: f64) -> Result<Self> {
        Domain::new(v, v)
    }

    /// Lower bound
    pub const fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound
    pub const fn hi(&self) -> f64 {
        self.hi
    }

    /// `hi - lo`
    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    /// Whether the domain spans zero width
    pub fn is_degenerate(&self) -> bool {
        self.hi == self.lo
    }

    /// Check whether `v` lies within the domain
    pub fn contains(&self, v: f64) -> bool {
        self.lo <= v && v <= self.hi
    }

    /// The smallest domain covering both `self` and `other`
    pub fn unite(&self, other: &Domain) -> Domain {
        Domain {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }
}

impl TryFrom<(f64, f64)> for Domain {
    type Error = Error;

    fn try_from((a, b): (f64, f64)) -> Result<Self> {
        Domain::new(a, b)
    }
}

impl From<Domain> for (f64, f64) {
    fn from(d: Domain) -> Self {
        (d.lo, d.hi)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Check that every value is finite
pub fn check_finite(values: &[f64]) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => Err(Error::NonFiniteValue(*v)),
        None => Ok(()),
    }
}

/// Largest magnitude of a plotted value.
/// Keeps widened domains, tick steps and tick values finite.
pub const MAX_ABS: f64 = 1e300;

/// Check that every value is finite and within `±MAX_ABS`
pub fn check_range(values: &[f64]) -> Result<()> {
    check_finite(values)?;
    match values.iter().find(|v| v.abs() > MAX_ABS) {
        Some(v) => Err(Error::ValueOutOfRange(*v)),
        None => Ok(()),
    }
}

/// The domain `[min, max]` of a non-empty array of plottable values
pub fn minmax(values: &[f64]) -> Result<Domain> {
    if values.is_empty() {
        return Err(Error::EmptySeries);
    }
    check_range(values)?;
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    Ok(Domain { lo, hi })
}

/// Grow `existing` to cover every value of `data`.
///
/// Without an existing domain, the result is `[min(data), max(data)]`.
pub fn merge(existing: Option<Domain>, data: &[f64]) -> Result<Domain> {
    let new = minmax(data)?;
    Ok(match existing {
        Some(d) => d.unite(&new),
        None => new,
    })
}

/// Zip paired x and y arrays into points.
///
/// The arrays must be non-empty, of equal length and only contain finite values within `±MAX_ABS`.
pub fn pair(x: &[f64], y: &[f64]) -> Result<Vec<Point>> {
    if x.len() != y.len() {
        return Err(Error::UnevenSeriesLength {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.is_empty() {
        return Err(Error::EmptySeries);
    }
    check_range(x)?;
    check_range(y)?;
    Ok(x.iter().zip(y).map(|(x, y)| Point::new(*x, *y)).collect())
}

/// The x and y domains covering a set of points
pub fn points_domains(points: &[Point]) -> Result<(Domain, Domain)> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    Ok((minmax(&xs)?, minmax(&ys)?))
}
