//! Figure layout: five regions computed from the figure size and margin fractions.
//!
//! ```text
//!  +--------+--------------------+--------+
//!  |        |       title        |        |
//!  +--------+--------------------+--------+
//!  |        |                    |        |
//!  | y axis |       graph        | legend |
//!  |        |                    |        |
//!  +--------+--------------------+--------+
//!  |        |       x axis       |        |
//!  +--------+--------------------+--------+
//! ```
//!
//! Region edges are rounded to whole figure units.

use crate::geom;
use crate::render::Region;
use crate::style::defaults;

/// The regions of a figure
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    size: geom::Size,
    margin: geom::Margin,
    title: geom::Rect,
    legend: geom::Rect,
    x_axis: geom::Rect,
    y_axis: geom::Rect,
    graph: geom::Rect,
}

impl Layout {
    /// Lay out a figure of `size`.
    /// `margin` holds the fractions of the figure size left around the graph region.
    pub fn new(size: geom::Size, margin: geom::Margin) -> Self {
        let (w, h) = (size.width(), size.height());
        let frac = |v: f32| v.clamp(0.0, 1.0);

        let top = (h * frac(margin.top())).round();
        let bottom = (h * (1.0 - frac(margin.bottom()))).round().max(top);
        let left = (w * frac(margin.left())).round();
        let right = (w * (1.0 - frac(margin.right()))).round().max(left);

        Layout {
            size,
            margin,
            title: geom::Rect::from_trbl(0.0, right, top, left),
            legend: geom::Rect::from_trbl(top, w, bottom, right),
            x_axis: geom::Rect::from_trbl(bottom, right, h, left),
            y_axis: geom::Rect::from_trbl(top, left, bottom, 0.0),
            graph: geom::Rect::from_trbl(top, right, bottom, left),
        }
    }

    /// The figure size
    pub fn size(&self) -> geom::Size {
        self.size
    }

    /// The margin fractions this layout was computed from
    pub fn margin(&self) -> geom::Margin {
        self.margin
    }

    /// The rectangle of a region, in figure coordinates
    pub fn region(&self, region: Region) -> geom::Rect {
        match region {
            Region::Title => self.title,
            Region::Legend => self.legend,
            Region::XAxis => self.x_axis,
            Region::YAxis => self.y_axis,
            Region::Graph => self.graph,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::new(defaults::FIG_SIZE, defaults::FIG_MARGIN)
    }
}
