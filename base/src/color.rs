//! Color resolution.
//!
//! A [`ColorSpec`] is whatever the user handed to a plotting call: a name, a single letter code,
//! a `#rgb` / `#rrggbb` hex string, a numeric triple or quadruple, or a single hue scalar.
//! [`resolve`] turns it into a normalized [`Rgba`].

use std::str::FromStr;
use std::{error, fmt};

mod named;

pub use named::*;

/// A color with four components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Rgba {
    /// Build a color from normalized components.
    /// Components are clamped to `[0, 1]`.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Build an opaque color from normalized components
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Rgba::new(r, g, b, 1.0)
    }

    /// Build an opaque color from 8-bit components
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Rgba::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub const fn red(&self) -> f32 {
        self.r
    }

    pub const fn green(&self) -> f32 {
        self.g
    }

    pub const fn blue(&self) -> f32 {
        self.b
    }

    pub const fn alpha(&self) -> f32 {
        self.a
    }

    /// The four components, in RGBA order
    pub const fn components(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The components scaled and rounded to 8 bits
    pub fn rgba_u8(&self) -> [u8; 4] {
        self.components().map(|c| (c * 255.0).round() as u8)
    }

    /// The opacity, or `None` if the color is fully opaque
    pub fn opacity(&self) -> Option<f32> {
        if self.a >= 1.0 { None } else { Some(self.a) }
    }

    /// HTML notation of the RGB part, e.g. `#0077ff`
    pub fn html(&self) -> String {
        let [r, g, b, _] = self.rgba_u8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opacity() {
            None => f.write_str(&self.html()),
            Some(a) => write!(f, "{} ({:.3})", self.html(), a),
        }
    }
}

/// Color resolution error
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The string specification is empty
    Empty,
    /// The name is neither in the name table nor a single letter code
    UnknownName(String),
    /// Hex notation with a wrong length or a non-hex digit
    InvalidHex(String),
    /// A component array whose length is neither 3 nor 4
    ComponentCount(usize),
    /// A component outside `[0, 1]`, or not finite
    ComponentRange(f64),
    /// A hue scalar outside `[0, 1]`, or not finite
    HueRange(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "empty color specification"),
            Error::UnknownName(name) => write!(f, "unknown color name '{}'", name),
            Error::InvalidHex(hex) => write!(f, "invalid hex color '{}'", hex),
            Error::ComponentCount(n) => {
                write!(f, "expected 3 or 4 color components, got {}", n)
            }
            Error::ComponentRange(c) => write!(f, "color component {} is outside [0, 1]", c),
            Error::HueRange(h) => write!(f, "hue {} is outside [0, 1]", h),
        }
    }
}

impl error::Error for Error {}

/// A color specification, as accepted by the plotting calls
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// Name, single letter code, `#rgb` or `#rrggbb`
    Str(String),
    /// Three (RGB) or four (RGBA) components in `[0, 1]`
    Components(Vec<f64>),
    /// Hue in `[0, 1]`
    Hue(f64),
    /// An already resolved color
    Rgba(Rgba),
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Str(value.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(value: String) -> Self {
        ColorSpec::Str(value)
    }
}

impl From<[f64; 3]> for ColorSpec {
    fn from(value: [f64; 3]) -> Self {
        ColorSpec::Components(value.to_vec())
    }
}

impl From<[f64; 4]> for ColorSpec {
    fn from(value: [f64; 4]) -> Self {
        ColorSpec::Components(value.to_vec())
    }
}

impl From<Vec<f64>> for ColorSpec {
    fn from(value: Vec<f64>) -> Self {
        ColorSpec::Components(value)
    }
}

impl From<&[f64]> for ColorSpec {
    fn from(value: &[f64]) -> Self {
        ColorSpec::Components(value.to_vec())
    }
}

impl From<f64> for ColorSpec {
    fn from(value: f64) -> Self {
        ColorSpec::Hue(value)
    }
}

impl From<Rgba> for ColorSpec {
    fn from(value: Rgba) -> Self {
        ColorSpec::Rgba(value)
    }
}

/// Resolve a color specification to a normalized color
pub fn resolve(spec: &ColorSpec) -> Result<Rgba, Error> {
    match spec {
        ColorSpec::Str(s) => s.parse(),
        ColorSpec::Components(comps) => from_components(comps),
        ColorSpec::Hue(h) => hue(*h),
        ColorSpec::Rgba(c) => Ok(*c),
    }
}

fn from_components(comps: &[f64]) -> Result<Rgba, Error> {
    if comps.len() != 3 && comps.len() != 4 {
        return Err(Error::ComponentCount(comps.len()));
    }
    if let Some(bad) = comps
        .iter()
        .find(|c| !c.is_finite() || !(0.0..=1.0).contains(*c))
    {
        return Err(Error::ComponentRange(*bad));
    }
    let a = comps.get(3).copied().unwrap_or(1.0);
    Ok(Rgba::new(
        comps[0] as f32,
        comps[1] as f32,
        comps[2] as f32,
        a as f32,
    ))
}

/// Color on a simplified hue ramp.
///
/// Each channel is a triangle of half-width 1/3 centred on its primary:
/// red at 0 (wrapping at 1), green at 1/3 and blue at 2/3.
pub fn hue(h: f64) -> Result<Rgba, Error> {
    if !h.is_finite() || !(0.0..=1.0).contains(&h) {
        return Err(Error::HueRange(h));
    }
    // distances are measured in thirds of the wheel so that primaries land on integers
    let x = 3.0 * h;
    let ramp = |center: f64| {
        let d = (x - center).abs();
        let d = d.min(3.0 - d);
        (1.0 - d).max(0.0) as f32
    };
    Ok(Rgba::from_rgb(ramp(0.0), ramp(1.0), ramp(2.0)))
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

fn parse_hex(lower: &str) -> Result<Rgba, Error> {
    let invalid = || Error::InvalidHex(lower.to_string());
    let digits = lower[1..]
        .bytes()
        .map(hex_digit)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(invalid)?;
    match digits.as_slice() {
        [r, g, b] => Ok(Rgba::from_rgb(
            *r as f32 / 15.0,
            *g as f32 / 15.0,
            *b as f32 / 15.0,
        )),
        [r1, r0, g1, g0, b1, b0] => {
            Ok(Rgba::from_rgb_u8(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0))
        }
        _ => Err(invalid()),
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower.is_empty() {
            return Err(Error::Empty);
        }
        if let Some(col) = named::lookup_name(&lower) {
            return Ok(col);
        }
        let mut chars = lower.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(col) = named::lookup_code(c) {
                return Ok(col);
            }
        }
        if lower.starts_with('#') {
            return parse_hex(&lower);
        }
        Err(Error::UnknownName(s.to_string()))
    }
}
