//! Default values of figure and series parameters.
//!
//! Series defaults are the documented default of each plotting option.
use crate::color::{self, Rgba};
use crate::geom;

pub const FONT_FAMILY: &str = "sans-serif";

pub const FIG_SIZE: geom::Size = geom::Size::new(640.0, 480.0);
/// Margins as fractions of the figure size: top, right, bottom, left
pub const FIG_MARGIN: geom::Margin = geom::Margin::Custom {
    t: 0.1,
    r: 0.0,
    b: 0.2,
    l: 0.1,
};

pub const TITLE_FONT_SIZE: f32 = 16.0;
pub const AXIS_LABEL_FONT_SIZE: f32 = 12.0;
pub const TICK_LABEL_FONT_SIZE: f32 = 10.0;

pub const SPINE_WIDTH: f32 = 1.0;
pub const GRID_WIDTH: f32 = 0.5;
pub const TICK_SIZE: f32 = 5.0;
pub const TICK_LABEL_MARGIN: f32 = 3.0;
/// Distance of the rotated y label from the left figure edge
pub const Y_LABEL_OFFSET: f32 = 14.0;

pub const MARKER_RADIUS: f64 = 4.0;
pub const MARKER_FACE: Rgba = Rgba::from_rgb_u8(0x00, 0x77, 0xff);
pub const MARKER_EDGE: Rgba = Rgba::from_rgb_u8(0x00, 0x33, 0x55);
pub const MARKER_EDGE_WIDTH: f64 = 1.0;

pub const LINE_COLOR: Rgba = color::BLACK;
pub const LINE_WIDTH: f64 = 1.5;

pub const PATCH_FACE: Rgba = MARKER_FACE;
pub const PATCH_EDGE: Rgba = MARKER_EDGE;
pub const PATCH_WIDTH: f64 = 1.0;

pub const TEXT_COLOR: Rgba = color::BLACK;
pub const TEXT_FONT_SIZE: f32 = 12.0;

pub const HIST_BINS: usize = 16;
pub const HIST_WIDTH: f64 = 1.0;
