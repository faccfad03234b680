//! Style definitions for lines, fills, text, and themes.
pub(crate) mod defaults;
pub mod series;
pub mod theme;

use std::fmt;
use std::str::FromStr;

pub use crate::style::theme::Theme;
use crate::{Error, Rgba, render};

/// Line pattern defines how the line is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePattern {
    /// Solid line (`solid` or `-`)
    #[default]
    Solid,
    /// Dashed line (`dashed` or `--`)
    Dashed,
    /// Alternating dashes and dots (`dashdot` or `-.`)
    DashDot,
    /// Dotted line (`dotted` or `:`)
    Dotted,
}

const DASHED: &[f32] = &[5.0, 3.0];
const DASH_DOT: &[f32] = &[5.0, 2.0, 1.0, 2.0];
const DOTTED: &[f32] = &[1.0, 2.0];

impl LinePattern {
    /// The dash array, relative to the line width
    pub const fn dash(&self) -> Option<&'static [f32]> {
        match self {
            LinePattern::Solid => None,
            LinePattern::Dashed => Some(DASHED),
            LinePattern::DashDot => Some(DASH_DOT),
            LinePattern::Dotted => Some(DOTTED),
        }
    }
}

impl FromStr for LinePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" | "-" => Ok(LinePattern::Solid),
            "dashed" | "--" => Ok(LinePattern::Dashed),
            "dashdot" | "-." => Ok(LinePattern::DashDot),
            "dotted" | ":" => Ok(LinePattern::Dotted),
            _ => Err(Error::invalid_option(
                "style",
                format!("unknown line style '{}'", s),
            )),
        }
    }
}

impl From<LinePattern> for render::LinePattern {
    fn from(pattern: LinePattern) -> Self {
        match pattern.dash() {
            None => render::LinePattern::Solid,
            Some(dash) => render::LinePattern::Dash(dash),
        }
    }
}

/// Line style definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Line color
    pub color: Rgba,
    /// Line width in figure units
    pub width: f32,
    /// Line pattern
    pub pattern: LinePattern,
}

impl Line {
    /// Set the line width in figure units, returning self for chaining
    pub fn with_width(self, width: f32) -> Self {
        Line { width, ..self }
    }

    /// Set the line pattern, returning self for chaining
    pub fn with_pattern(self, pattern: LinePattern) -> Self {
        Line { pattern, ..self }
    }

    /// Convert to a renderable stroke
    pub fn as_stroke(&self) -> render::Stroke {
        render::Stroke {
            color: self.color,
            width: self.width,
            pattern: self.pattern.into(),
        }
    }
}

impl From<Rgba> for Line {
    fn from(color: Rgba) -> Self {
        Line {
            color,
            width: 1.0,
            pattern: LinePattern::default(),
        }
    }
}

impl From<(Rgba, f32)> for Line {
    fn from((color, width): (Rgba, f32)) -> Self {
        Line {
            color,
            width,
            pattern: LinePattern::default(),
        }
    }
}

/// Horizontal alignment of text relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    /// The anchor is at the start of the text
    #[default]
    Left,
    /// The anchor is at the middle of the text
    Center,
    /// The anchor is at the end of the text
    Right,
}

impl FromStr for HAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(HAlign::Left),
            "center" => Ok(HAlign::Center),
            "right" => Ok(HAlign::Right),
            _ => Err(Error::InvalidAlignment(s.to_string())),
        }
    }
}

/// Vertical alignment of text relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    /// The anchor is at the top of the text
    Top,
    /// The anchor is at the vertical middle of the text
    Middle,
    /// The anchor is on the baseline
    #[default]
    Bottom,
}

impl FromStr for VAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(VAlign::Top),
            "middle" => Ok(VAlign::Middle),
            "bottom" => Ok(VAlign::Bottom),
            _ => Err(Error::InvalidAlignment(s.to_string())),
        }
    }
}

/// Font selection for text
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Font family, e.g. `sans-serif`
    pub family: String,
    /// Font size in figure units
    pub size: f32,
    /// Italic style
    pub italic: bool,
    /// Bold weight
    pub bold: bool,
    /// Underline decoration
    pub underline: bool,
}

impl Font {
    /// A regular font of the default family with the given size
    pub fn new(size: f32) -> Self {
        Font {
            family: defaults::FONT_FAMILY.to_string(),
            size,
            italic: false,
            bold: false,
            underline: false,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::new(defaults::TEXT_FONT_SIZE)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.italic {
            f.write_str("italic ")?;
        }
        if self.bold {
            f.write_str("bold ")?;
        }
        write!(f, "{}px {}", self.size, self.family)
    }
}
