//! Histogram binning.
//!
//! Samples are counted into `nbins` equal-width bins over a binning range,
//! by default the `[min, max]` range of the samples.
//! Each bin is then plotted as a rectangular patch from 0 to its count.

use std::str::FromStr;

use crate::data::{self, Domain, Point};
use crate::{Error, Result};

/// Largest number of bins of a histogram
pub const MAX_BINS: usize = 10_000;

/// How samples lying exactly on a bin edge are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinEdges {
    /// Bins are open intervals `(low, high)`: samples on an edge are counted in no bin.
    /// This notably drops the samples equal to the range bounds.
    #[default]
    Strict,
    /// Bins are half-open intervals `[low, high)`, except the last one which is closed.
    /// Every sample within the range is counted exactly once.
    HalfOpen,
}

impl FromStr for BinEdges {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(BinEdges::Strict),
            "halfopen" | "half-open" => Ok(BinEdges::HalfOpen),
            _ => Err(Error::invalid_option(
                "binedges",
                format!("unknown bin edges '{}'", s),
            )),
        }
    }
}

/// A histogram bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Lower edge
    pub low: f64,
    /// Upper edge
    pub high: f64,
    /// Number of samples counted in this bin
    pub count: usize,
}

impl Bin {
    /// The rectangle `(low,0) (high,0) (high,count) (low,count)` representing the bin
    pub fn rectangle(&self) -> [Point; 4] {
        let count = self.count as f64;
        [
            Point::new(self.low, 0.0),
            Point::new(self.high, 0.0),
            Point::new(self.high, count),
            Point::new(self.low, count),
        ]
    }
}

/// The binning range: explicit, or the range of the samples widened if degenerate
fn binning_range(samples: &[f64], range: Option<(f64, f64)>) -> Result<Domain> {
    match range {
        Some((lo, hi)) => {
            data::check_range(&[lo, hi])?;
            let d = Domain::new(lo, hi)?;
            if d.is_degenerate() {
                return Err(Error::invalid_option(
                    "range",
                    format!("{} has zero width", d),
                ));
            }
            Ok(d)
        }
        None => {
            let d = data::minmax(samples)?;
            if d.is_degenerate() {
                // large values would absorb a half unit
                let half = 0.5f64.max(d.lo().abs() * 1e-9);
                Domain::new(d.lo() - half, d.hi() + half)
            } else {
                Ok(d)
            }
        }
    }
}

/// Count `samples` into `nbins` equal-width bins.
///
/// `samples` must be non-empty and plottable, and `nbins` at most [`MAX_BINS`].
/// Samples outside of the binning range are ignored.
pub fn bin(
    samples: &[f64],
    nbins: usize,
    range: Option<(f64, f64)>,
    edges: BinEdges,
) -> Result<Vec<Bin>> {
    if samples.is_empty() {
        return Err(Error::EmptySeries);
    }
    data::check_range(samples)?;
    if nbins == 0 || nbins > MAX_BINS {
        return Err(Error::invalid_option(
            "nbins",
            format!("{} is not in 1..={}", nbins, MAX_BINS),
        ));
    }
    let range = binning_range(samples, range)?;

    let width = range.span() / nbins as f64;
    let mut limits: Vec<f64> = (0..nbins)
        .map(|i| range.lo() + i as f64 * width)
        .collect();
    limits.push(range.hi());

    let mut counts = vec![0usize; nbins];
    for &x in samples {
        if !range.contains(x) {
            continue;
        }
        // index of the last edge <= x
        let idx = limits.partition_point(|e| *e <= x) - 1;
        match edges {
            BinEdges::Strict => {
                if idx < nbins && x > limits[idx] {
                    counts[idx] += 1;
                }
            }
            BinEdges::HalfOpen => counts[idx.min(nbins - 1)] += 1,
        }
    }

    let bins: Vec<Bin> = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            low: limits[i],
            high: limits[i + 1],
            count,
        })
        .collect();
    log::trace!(
        "binned {} samples over {} into {} bins",
        samples.len(),
        range,
        bins.len()
    );
    Ok(bins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(bins: &[Bin]) -> Vec<usize> {
        bins.iter().map(|b| b.count).collect()
    }

    #[test]
    fn two_bins_over_explicit_range() {
        let bins = bin(&[1.0, 2.0, 3.0, 8.0, 9.0], 2, Some((0.0, 10.0)), BinEdges::Strict).unwrap();
        assert_eq!(bins.len(), 2);
        assert_eq!((bins[0].low, bins[0].high, bins[0].count), (0.0, 5.0, 3));
        assert_eq!((bins[1].low, bins[1].high, bins[1].count), (5.0, 10.0, 2));
    }

    #[test]
    fn strict_drops_edge_samples() {
        let samples = [0.0, 1.0, 5.0, 9.0, 10.0];
        let strict = bin(&samples, 2, Some((0.0, 10.0)), BinEdges::Strict).unwrap();
        assert_eq!(counts(&strict), vec![1, 1]);

        let halfopen = bin(&samples, 2, Some((0.0, 10.0)), BinEdges::HalfOpen).unwrap();
        assert_eq!(counts(&halfopen), vec![2, 3]);
    }

    #[test]
    fn default_range_is_samples_range() {
        let samples = [2.0, 3.0, 3.5, 4.0, 6.0];
        let bins = bin(&samples, 4, None, BinEdges::HalfOpen).unwrap();
        assert_eq!(bins[0].low, 2.0);
        assert_eq!(bins[3].high, 6.0);
        assert_eq!(counts(&bins), vec![1, 2, 1, 1]);
        assert_eq!(counts(&bins).iter().sum::<usize>(), samples.len());

        // only 3.5 is off the edges 2, 3, 4, 5, 6
        let bins = bin(&samples, 4, None, BinEdges::Strict).unwrap();
        assert_eq!(counts(&bins), vec![0, 1, 0, 0]);
    }

    #[test]
    fn samples_out_of_range_are_ignored() {
        let bins = bin(&[-1.0, 0.5, 11.0], 1, Some((0.0, 1.0)), BinEdges::HalfOpen).unwrap();
        assert_eq!(counts(&bins), vec![1]);
    }

    #[test]
    fn degenerate_samples_are_widened() {
        let bins = bin(&[3.0, 3.0], 2, None, BinEdges::Strict).unwrap();
        assert_eq!((bins[0].low, bins[1].high), (2.5, 3.5));
        assert_eq!(counts(&bins), vec![0, 0]);
        let bins = bin(&[3.0, 3.0], 1, None, BinEdges::Strict).unwrap();
        assert_eq!(counts(&bins), vec![2]);
    }

    #[test]
    fn bin_errors() {
        assert_eq!(bin(&[], 2, None, BinEdges::Strict), Err(Error::EmptySeries));
        assert!(matches!(
            bin(&[1.0], 0, None, BinEdges::Strict),
            Err(Error::InvalidOption { .. })
        ));
        assert!(matches!(
            bin(&[1.0], 2, Some((1.0, 1.0)), BinEdges::Strict),
            Err(Error::InvalidOption { .. })
        ));
        assert!(matches!(
            bin(&[1.0, f64::NAN], 2, None, BinEdges::Strict),
            Err(Error::NonFiniteValue(_))
        ));
        assert_eq!(
            bin(&[1.0, 1e308], 2, None, BinEdges::Strict),
            Err(Error::ValueOutOfRange(1e308))
        );
    }

    #[test]
    fn bin_count_is_bounded() {
        assert!(bin(&[1.0, 2.0], MAX_BINS, None, BinEdges::HalfOpen).is_ok());
        assert_eq!(
            bin(&[1.0, 2.0], MAX_BINS + 1, None, BinEdges::HalfOpen),
            Err(Error::invalid_option(
                "nbins",
                format!("{} is not in 1..={}", MAX_BINS + 1, MAX_BINS)
            ))
        );
    }

    #[test]
    fn rectangle_shape() {
        let b = Bin {
            low: 1.0,
            high: 2.0,
            count: 3,
        };
        assert_eq!(
            b.rectangle(),
            [
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 3.0),
                Point::new(1.0, 3.0)
            ]
        );
    }

    #[test]
    fn parse_bin_edges() {
        assert_eq!("strict".parse::<BinEdges>().unwrap(), BinEdges::Strict);
        assert_eq!("HalfOpen".parse::<BinEdges>().unwrap(), BinEdges::HalfOpen);
        assert!("closed".parse::<BinEdges>().is_err());
    }
}
