/*!
 * Resolved styles of data series.
 *
 * These are produced from the plotting options once every color is resolved,
 * and are what the series store keeps and the drawing functions consume.
 */
use crate::style::{self, Font, HAlign, LinePattern, VAlign};
use crate::{Rgba, render};

/// Style of a point series: one circle marker per data point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Marker radius in figure units
    pub radius: f32,
    /// Marker fill, `None` for hollow markers
    pub fill: Option<Rgba>,
    /// Marker outline, `None` for no outline
    pub edge: Option<Rgba>,
    /// Outline width in figure units
    pub edge_width: f32,
}

impl Marker {
    /// The marker outline as a stroke
    pub fn as_stroke(&self) -> Option<render::Stroke> {
        self.edge.map(|c| style::Line::from((c, self.edge_width)).as_stroke())
    }
}

/// Style of a line series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Line color, `None` to draw no line at all
    pub color: Option<Rgba>,
    /// Line width in figure units
    pub width: f32,
    /// Line pattern
    pub pattern: LinePattern,
    /// Fill between each segment and the y axis minimum, `None` for no fill
    pub support: Option<Rgba>,
}

impl Line {
    /// The line as a stroke
    pub fn as_stroke(&self) -> Option<render::Stroke> {
        self.color.map(|color| {
            style::Line {
                color,
                width: self.width,
                pattern: self.pattern,
            }
            .as_stroke()
        })
    }
}

/// Style of a closed polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patch {
    /// Polygon fill, `None` for no fill
    pub fill: Option<Rgba>,
    /// Polygon outline, `None` for no outline
    pub edge: Option<Rgba>,
    /// Outline width in figure units
    pub width: f32,
}

impl Patch {
    /// The polygon outline as a stroke
    pub fn as_stroke(&self) -> Option<render::Stroke> {
        self.edge.map(|c| style::Line::from((c, self.width)).as_stroke())
    }
}

/// Style of a text annotation
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Text color
    pub color: Rgba,
    /// Font selection
    pub font: Font,
    /// Horizontal alignment relative to the anchor
    pub halign: HAlign,
    /// Vertical alignment relative to the anchor
    pub valign: VAlign,
}
