//! Theme definitions

use crate::color::{self, Rgba};

/// The colors of the figure decorations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Background of the graph region
    pub background: Rgba,
    /// Spines, ticks, labels and title
    pub foreground: Rgba,
    /// Grid lines along the x axis ticks
    pub x_grid: Rgba,
    /// Grid lines along the y axis ticks
    pub y_grid: Rgba,
}

impl Theme {
    /// The light built-in theme
    pub const LIGHT: Self = Self {
        background: color::WHITE,
        foreground: color::BLACK,
        x_grid: Rgba::from_rgb(0.5, 0.5, 0.5),
        y_grid: Rgba::from_rgb(0.5, 0.5, 0.5),
    };

    /// The dark built-in theme
    pub const DARK: Self = Self {
        background: Rgba::from_rgb_u8(0x1e, 0x1e, 0x2e),
        foreground: color::WHITE,
        x_grid: Rgba::from_rgb_u8(0xc0, 0xc0, 0xc0).with_alpha(0.6),
        y_grid: Rgba::from_rgb_u8(0xc0, 0xc0, 0xc0).with_alpha(0.6),
    };

    /// Create a new theme from background and foreground colors.
    /// The grid color is the average of both.
    pub fn new(background: Rgba, foreground: Rgba) -> Self {
        let [br, bg, bb, _] = background.components();
        let [fr, fg, fb, _] = foreground.components();
        let grid = Rgba::from_rgb((br + fr) / 2.0, (bg + fg) / 2.0, (bb + fb) / 2.0);
        Theme {
            background,
            foreground,
            x_grid: grid,
            y_grid: grid,
        }
    }

    /// Set both grid colors, returning self for chaining
    pub fn with_grid(self, grid: Rgba) -> Self {
        Theme {
            x_grid: grid,
            y_grid: grid,
            ..self
        }
    }

    /// Luminance of the background, used to tell dark themes from light ones
    pub fn is_dark(&self) -> bool {
        let [r, g, b, _] = self.background.components();
        0.2126 * r + 0.7152 * g + 0.0722 * b < 0.5
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::LIGHT
    }
}
