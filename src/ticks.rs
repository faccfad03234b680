//! Decade-aligned tick generation.
//!
//! The step is the power of ten just below the domain span.
//! The first and last ticks are the multiples of the step enclosing the domain,
//! and the snapped domain `[first, last]` becomes the visible range of the axis.

use crate::data::{self, Domain};

/// Slack added to `log10(span)` so that exact powers of ten
/// do not flicker to the decade below through rounding
const MAGNITUDE_SLACK: f64 = 16.0 * f64::EPSILON;

/// Tolerance, in steps, when deciding whether a bound sits on a tick
const EDGE_TOLERANCE: f64 = 1e-10;

/// Largest decade exponent of a tick step, either way.
/// With bounds within [`data::MAX_ABS`], every step and tick stays finite.
const MAX_MAGNITUDE: i32 = 300;

/// An increasing, evenly spaced set of ticks
#[derive(Debug, Clone, PartialEq)]
pub struct Ticks {
    values: Vec<f64>,
    step: f64,
    magnitude: i32,
}

impl Ticks {
    /// The tick values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Distance between two consecutive ticks
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of ticks
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a generated tick set has at least two ticks
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The snapped domain `[first, last]`
    pub fn domain(&self) -> Domain {
        let first = self.values.first().copied().unwrap_or_default();
        let last = self.values.last().copied().unwrap_or(first);
        Domain::from_sorted(first, last)
    }

    /// The formatter used for this tick set
    pub fn label_format(&self) -> LabelFormat {
        let max = self
            .values
            .iter()
            .fold(0.0f64, |max, v| max.max(v.abs()));
        if max >= 1e5 || (max > 0.0 && max < 1e-3) {
            LabelFormat::Sci
        } else {
            LabelFormat::Prec((-self.magnitude).max(0) as usize)
        }
    }

    /// Formatted label of each tick
    pub fn labels(&self) -> Vec<String> {
        let fmt = self.label_format();
        self.values.iter().map(|v| fmt.format(*v)).collect()
    }
}

/// Formatting of tick labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    /// Fixed number of decimals
    Prec(usize),
    /// Scientific notation
    Sci,
}

impl LabelFormat {
    /// Format a tick value
    pub fn format(&self, value: f64) -> String {
        // avoid "-0" labels
        let value = if value == 0.0 { 0.0 } else { value };
        match self {
            LabelFormat::Prec(prec) => format!("{value:.*}", prec),
            LabelFormat::Sci => format!("{value:.2e}"),
        }
    }
}

/// Widen a zero-span domain around its value.
///
/// `v` becomes `[v - s, v + s]` with `s` the power of ten just below `|v|`, or 1 for zero.
pub fn widen_degenerate(domain: Domain) -> Domain {
    if !domain.is_degenerate() {
        return domain;
    }
    let v = domain.lo();
    let s = if v == 0.0 {
        1.0
    } else {
        decade(v.abs().log10().floor())
    };
    Domain::from_sorted(v - s, v + s)
}

/// `10^exp`, with the exponent clamped to `±MAX_MAGNITUDE`
fn decade(exp: f64) -> f64 {
    10f64.powi(clamp_magnitude(exp))
}

fn clamp_magnitude(exp: f64) -> i32 {
    let max = MAX_MAGNITUDE as f64;
    exp.clamp(-max, max) as i32
}

/// Generate the ticks covering `domain`.
///
/// Bounds beyond [`data::MAX_ABS`] are clamped to it.
pub fn generate(domain: Domain) -> Ticks {
    let clamp = |v: f64| v.clamp(-data::MAX_ABS, data::MAX_ABS);
    let domain = widen_degenerate(Domain::from_sorted(clamp(domain.lo()), clamp(domain.hi())));
    let magnitude = clamp_magnitude((domain.span().log10() + MAGNITUDE_SLACK).floor());

    let edge = EdgeInteger::new(magnitude);
    let first = edge.largest_le(domain.lo());
    let last = edge.smallest_ge(domain.hi()).max(first + 1.0);

    let count = (last - first) as usize + 1;
    let values = (0..count).map(|i| edge.value(first + i as f64)).collect();
    log::trace!("ticks of {}: {} x {:e}", domain, count, edge.step());

    Ticks {
        values,
        step: edge.step(),
        magnitude,
    }
}

/// Integer multiples of a power of ten
#[derive(Debug, Clone, Copy)]
struct EdgeInteger {
    magnitude: i32,
}

impl EdgeInteger {
    fn new(magnitude: i32) -> Self {
        EdgeInteger { magnitude }
    }

    /// `10^|magnitude|`
    fn decade(&self) -> f64 {
        10f64.powi(self.magnitude.abs())
    }

    fn step(&self) -> f64 {
        if self.magnitude < 0 {
            1.0 / self.decade()
        } else {
            self.decade()
        }
    }

    /// The value of the `idx`-th multiple.
    /// Negative magnitudes divide by the exact decade so that `3 * 0.1` reads `0.3`.
    fn value(&self, idx: f64) -> f64 {
        if self.magnitude < 0 {
            idx / self.decade()
        } else {
            idx * self.decade()
        }
    }

    /// `value / step`, scaling by the exact decade
    fn ratio(&self, value: f64) -> f64 {
        if self.magnitude < 0 {
            value * self.decade()
        } else {
            value / self.decade()
        }
    }

    /// The index of `value` if it sits on a multiple
    fn on_edge(&self, value: f64) -> Option<f64> {
        let r = self.ratio(value);
        let n = r.round();
        ((r - n).abs() <= EDGE_TOLERANCE).then_some(n)
    }

    fn largest_le(&self, value: f64) -> f64 {
        self.on_edge(value)
            .unwrap_or_else(|| self.ratio(value).floor())
    }

    fn smallest_ge(&self, value: f64) -> f64 {
        self.on_edge(value)
            .unwrap_or_else(|| self.ratio(value).ceil())
    }
}
