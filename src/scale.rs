//! Linear mapping from a data domain to surface coordinates.

use crate::data::{Domain, Point};
use crate::geom;

/// Map `value` from `domain` to `[0, size]`.
///
/// With `invert`, the domain low bound maps to `size` and the high bound to zero,
/// which is what vertical axes need as surface y grows downwards.
/// A degenerate domain maps every value as its low bound (`t = 0`).
/// Positions are clamped to `MAX_OFFSET` surface sizes away from the surface.
pub fn to_pixel(value: f64, domain: Domain, size: f32, invert: bool) -> f32 {
    let span = domain.span();
    let t = if span == 0.0 {
        0.0
    } else {
        (value - domain.lo()) / span
    };
    let t = if invert { 1.0 - t } else { t };
    // far off-surface values must still map to finite coordinates
    let t = t.clamp(-MAX_OFFSET, MAX_OFFSET);
    (t * size as f64) as f32
}

/// Furthest mapped position, in surface sizes, on either side of the surface
const MAX_OFFSET: f64 = 1e4;

/// A linear scale along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    domain: Domain,
    size: f32,
    invert: bool,
}

impl Scale {
    /// Horizontal scale: data grows rightwards
    pub fn x(domain: Domain, size: f32) -> Self {
        Scale {
            domain,
            size,
            invert: false,
        }
    }

    /// Vertical scale: data grows upwards, surface coordinates downwards
    pub fn y(domain: Domain, size: f32) -> Self {
        Scale {
            domain,
            size,
            invert: true,
        }
    }

    /// The mapped domain
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Size of the surface range
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Map a data value to a surface coordinate
    pub fn to_pixel(&self, value: f64) -> f32 {
        to_pixel(value, self.domain, self.size, self.invert)
    }
}

/// A pair of scales, mapping data points to surface points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleXy {
    /// Horizontal scale
    pub x: Scale,
    /// Vertical scale
    pub y: Scale,
}

impl ScaleXy {
    /// Map a data point to a surface point
    pub fn map(&self, p: Point) -> geom::Point {
        geom::Point::from_xy(self.x.to_pixel(p.x), self.y.to_pixel(p.y))
    }
}
