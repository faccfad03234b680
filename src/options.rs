//! Per-call plotting options.
//!
//! Each plotting operation takes an options struct whose `Default` is the documented default
//! table of that operation. Options can be built with the typed `with_*` methods,
//! or from loosely typed key/value pairs with [`Options::set`] and [`Options::from_pairs`]:
//! recognized keys override the defaults, unrecognized keys are ignored.
//!
//! | operation | keys                                                              |
//! |-----------|-------------------------------------------------------------------|
//! | scatter   | `size`, `facecolor`, `edgecolor`, `edgewidth`, `color`            |
//! | plot      | `color`, `width`, `style`, `supportcolor`                         |
//! | patch     | `facecolor`, `edgecolor`, `width`, `color`                        |
//! | text      | `color`, `fontfamily`, `fontsize`, `italic`, `bold`, `underline`, `halign`, `valign` |
//! | hist      | `nbins`, `range`, `binedges`, and every patch key                 |
//!
//! Keys are case-insensitive (`nBins` is `nbins`).
//! The color value `"none"` disables the corresponding paint.

use crate::color::{self, ColorSpec};
use crate::hist::{self, BinEdges};
use crate::style::{self, Font, HAlign, LinePattern, VAlign, defaults};
use crate::{Error, Result, Rgba};

/// A loosely typed option value
#[derive(Debug, Clone, PartialEq)]
pub enum OptValue {
    /// A number
    Num(f64),
    /// A flag
    Bool(bool),
    /// A string: color, line style, alignment, font family...
    Str(String),
    /// A color specification
    Color(ColorSpec),
    /// A numeric interval
    Range(f64, f64),
}

impl From<f64> for OptValue {
    fn from(value: f64) -> Self {
        OptValue::Num(value)
    }
}

impl From<f32> for OptValue {
    fn from(value: f32) -> Self {
        OptValue::Num(value as f64)
    }
}

impl From<i32> for OptValue {
    fn from(value: i32) -> Self {
        OptValue::Num(value as f64)
    }
}

impl From<usize> for OptValue {
    fn from(value: usize) -> Self {
        OptValue::Num(value as f64)
    }
}

impl From<bool> for OptValue {
    fn from(value: bool) -> Self {
        OptValue::Bool(value)
    }
}

impl From<&str> for OptValue {
    fn from(value: &str) -> Self {
        OptValue::Str(value.to_string())
    }
}

impl From<String> for OptValue {
    fn from(value: String) -> Self {
        OptValue::Str(value)
    }
}

impl From<ColorSpec> for OptValue {
    fn from(value: ColorSpec) -> Self {
        OptValue::Color(value)
    }
}

impl From<Rgba> for OptValue {
    fn from(value: Rgba) -> Self {
        OptValue::Color(value.into())
    }
}

impl From<[f64; 3]> for OptValue {
    fn from(value: [f64; 3]) -> Self {
        OptValue::Color(value.into())
    }
}

impl From<[f64; 4]> for OptValue {
    fn from(value: [f64; 4]) -> Self {
        OptValue::Color(value.into())
    }
}

impl From<(f64, f64)> for OptValue {
    fn from((lo, hi): (f64, f64)) -> Self {
        OptValue::Range(lo, hi)
    }
}

impl OptValue {
    fn type_name(&self) -> &'static str {
        match self {
            OptValue::Num(_) => "number",
            OptValue::Bool(_) => "boolean",
            OptValue::Str(_) => "string",
            OptValue::Color(_) => "color",
            OptValue::Range(..) => "range",
        }
    }

    fn mismatch(&self, key: &str, expected: &str) -> Error {
        Error::invalid_option(
            key,
            format!("expected {}, got {}", expected, self.type_name()),
        )
    }

    fn into_num(self, key: &str) -> Result<f64> {
        match self {
            OptValue::Num(v) if v.is_finite() => Ok(v),
            OptValue::Num(v) => Err(Error::invalid_option(key, format!("{} is not finite", v))),
            other => Err(other.mismatch(key, "number")),
        }
    }

    /// A finite number `>= 0`
    fn into_extent(self, key: &str) -> Result<f64> {
        let v = self.into_num(key)?;
        extent(key, v)?;
        Ok(v)
    }

    fn into_bool(self, key: &str) -> Result<bool> {
        match self {
            OptValue::Bool(b) => Ok(b),
            other => Err(other.mismatch(key, "boolean")),
        }
    }

    fn into_string(self, key: &str) -> Result<String> {
        match self {
            OptValue::Str(s) => Ok(s),
            other => Err(other.mismatch(key, "string")),
        }
    }

    /// A color, or `None` for `"none"`
    fn into_paint(self, key: &str) -> Result<Option<ColorSpec>> {
        match self {
            OptValue::Str(s) if s.trim().eq_ignore_ascii_case("none") => Ok(None),
            OptValue::Str(s) => Ok(Some(ColorSpec::Str(s))),
            OptValue::Num(h) => Ok(Some(ColorSpec::Hue(h))),
            OptValue::Color(c) => Ok(Some(c)),
            other => Err(other.mismatch(key, "color")),
        }
    }

    fn into_range(self, key: &str) -> Result<(f64, f64)> {
        match self {
            OptValue::Range(lo, hi) if lo.is_finite() && hi.is_finite() && lo < hi => Ok((lo, hi)),
            OptValue::Range(lo, hi) => Err(Error::invalid_option(
                key,
                format!("[{}, {}] is not an increasing finite range", lo, hi),
            )),
            other => Err(other.mismatch(key, "range")),
        }
    }
}

/// Common interface of the option structs
pub trait Options: Default + Sized {
    /// Set one option from a key/value pair.
    ///
    /// Unrecognized keys are ignored. A recognized key with an unusable value
    /// is an error, and leaves the options unchanged.
    fn set(&mut self, key: &str, value: OptValue) -> Result<()>;

    /// Build options from key/value pairs, on top of the defaults
    fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptValue>,
    {
        let mut opts = Self::default();
        for (k, v) in pairs {
            opts.set(k.as_ref(), v.into())?;
        }
        Ok(opts)
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

fn ignore(key: &str) {
    log::debug!("ignoring unrecognized option '{}'", key);
}

/// Check a size or width given in figure units
fn extent(key: &str, v: f64) -> Result<f32> {
    if !v.is_finite() || v > f32::MAX as f64 {
        return Err(Error::invalid_option(key, format!("{} is not finite", v)));
    }
    if v < 0.0 {
        return Err(Error::invalid_option(key, format!("{} is negative", v)));
    }
    Ok(v as f32)
}

fn resolve_paint(paint: &Option<ColorSpec>) -> Result<Option<Rgba>> {
    match paint {
        Some(spec) => Ok(Some(color::resolve(spec)?)),
        None => Ok(None),
    }
}

/// Options of `scatter`
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterOptions {
    /// Marker radius (`size`), default 4
    pub size: f64,
    /// Marker fill (`facecolor`), default `#0077ff`
    pub facecolor: Option<ColorSpec>,
    /// Marker outline (`edgecolor`), default `#003355`
    pub edgecolor: Option<ColorSpec>,
    /// Outline width (`edgewidth`), default 1
    pub edgewidth: f64,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        ScatterOptions {
            size: defaults::MARKER_RADIUS,
            facecolor: Some(defaults::MARKER_FACE.into()),
            edgecolor: Some(defaults::MARKER_EDGE.into()),
            edgewidth: defaults::MARKER_EDGE_WIDTH,
        }
    }
}

impl ScatterOptions {
    /// Set the marker radius, returning self for chaining
    pub fn with_size(self, size: f64) -> Self {
        ScatterOptions { size, ..self }
    }

    /// Set both fill and outline colors, returning self for chaining
    pub fn with_color(self, color: impl Into<ColorSpec>) -> Self {
        let color = color.into();
        ScatterOptions {
            facecolor: Some(color.clone()),
            edgecolor: Some(color),
            ..self
        }
    }

    /// Set the fill color, or `None` for hollow markers
    pub fn with_facecolor(self, color: Option<ColorSpec>) -> Self {
        ScatterOptions {
            facecolor: color,
            ..self
        }
    }

    /// Set the outline color, or `None` for no outline
    pub fn with_edgecolor(self, color: Option<ColorSpec>) -> Self {
        ScatterOptions {
            edgecolor: color,
            ..self
        }
    }

    /// Set the outline width, returning self for chaining
    pub fn with_edgewidth(self, edgewidth: f64) -> Self {
        ScatterOptions { edgewidth, ..self }
    }

    pub(crate) fn resolve(&self) -> Result<style::series::Marker> {
        Ok(style::series::Marker {
            radius: extent("size", self.size)?,
            fill: resolve_paint(&self.facecolor)?,
            edge: resolve_paint(&self.edgecolor)?,
            edge_width: extent("edgewidth", self.edgewidth)?,
        })
    }
}

impl Options for ScatterOptions {
    fn set(&mut self, key: &str, value: OptValue) -> Result<()> {
        match normalize(key).as_str() {
            "size" | "markersize" => self.size = value.into_extent(key)?,
            "facecolor" => self.facecolor = value.into_paint(key)?,
            "edgecolor" => self.edgecolor = value.into_paint(key)?,
            "edgewidth" => self.edgewidth = value.into_extent(key)?,
            "color" => {
                let c = value.into_paint(key)?;
                self.facecolor = c.clone();
                self.edgecolor = c;
            }
            _ => ignore(key),
        }
        Ok(())
    }
}

/// Options of `plot`
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Line color (`color`), default black
    pub color: Option<ColorSpec>,
    /// Line width (`width`), default 1.5
    pub width: f64,
    /// Line pattern (`style`), default solid
    pub style: LinePattern,
    /// Fill under each segment (`supportcolor`), default none
    pub supportcolor: Option<ColorSpec>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            color: Some(defaults::LINE_COLOR.into()),
            width: defaults::LINE_WIDTH,
            style: LinePattern::Solid,
            supportcolor: None,
        }
    }
}

impl PlotOptions {
    /// Set the line color, returning self for chaining
    pub fn with_color(self, color: impl Into<ColorSpec>) -> Self {
        PlotOptions {
            color: Some(color.into()),
            ..self
        }
    }

    /// Set the line width, returning self for chaining
    pub fn with_width(self, width: f64) -> Self {
        PlotOptions { width, ..self }
    }

    /// Set the line pattern, returning self for chaining
    pub fn with_pattern(self, style: LinePattern) -> Self {
        PlotOptions { style, ..self }
    }

    /// Set the line pattern from its key (`solid`, `--`, ...)
    pub fn with_style(self, style: &str) -> Result<Self> {
        Ok(PlotOptions {
            style: style.parse()?,
            ..self
        })
    }

    /// Set the support fill color, returning self for chaining
    pub fn with_supportcolor(self, color: impl Into<ColorSpec>) -> Self {
        PlotOptions {
            supportcolor: Some(color.into()),
            ..self
        }
    }

    pub(crate) fn resolve(&self) -> Result<style::series::Line> {
        Ok(style::series::Line {
            color: resolve_paint(&self.color)?,
            width: extent("width", self.width)?,
            pattern: self.style,
            support: resolve_paint(&self.supportcolor)?,
        })
    }
}

impl Options for PlotOptions {
    fn set(&mut self, key: &str, value: OptValue) -> Result<()> {
        match normalize(key).as_str() {
            "color" => self.color = value.into_paint(key)?,
            "width" | "linewidth" => self.width = value.into_extent(key)?,
            "style" | "linestyle" => {
                self.style = value
                    .into_string(key)?
                    .parse()
                    .map_err(|_| Error::invalid_option(key, "unknown line style"))?
            }
            "supportcolor" => self.supportcolor = value.into_paint(key)?,
            _ => ignore(key),
        }
        Ok(())
    }
}

/// Options of `patch`
#[derive(Debug, Clone, PartialEq)]
pub struct PatchOptions {
    /// Polygon fill (`facecolor`), default `#0077ff`
    pub facecolor: Option<ColorSpec>,
    /// Polygon outline (`edgecolor`), default `#003355`
    pub edgecolor: Option<ColorSpec>,
    /// Outline width (`width`), default 1
    pub width: f64,
}

impl Default for PatchOptions {
    fn default() -> Self {
        PatchOptions {
            facecolor: Some(defaults::PATCH_FACE.into()),
            edgecolor: Some(defaults::PATCH_EDGE.into()),
            width: defaults::PATCH_WIDTH,
        }
    }
}

impl PatchOptions {
    /// Set both fill and outline colors, returning self for chaining
    pub fn with_color(self, color: impl Into<ColorSpec>) -> Self {
        let color = color.into();
        PatchOptions {
            facecolor: Some(color.clone()),
            edgecolor: Some(color),
            ..self
        }
    }

    /// Set the fill color, or `None` for no fill
    pub fn with_facecolor(self, color: Option<ColorSpec>) -> Self {
        PatchOptions {
            facecolor: color,
            ..self
        }
    }

    /// Set the outline color, or `None` for no outline
    pub fn with_edgecolor(self, color: Option<ColorSpec>) -> Self {
        PatchOptions {
            edgecolor: color,
            ..self
        }
    }

    /// Set the outline width, returning self for chaining
    pub fn with_width(self, width: f64) -> Self {
        PatchOptions { width, ..self }
    }

    pub(crate) fn resolve(&self) -> Result<style::series::Patch> {
        Ok(style::series::Patch {
            fill: resolve_paint(&self.facecolor)?,
            edge: resolve_paint(&self.edgecolor)?,
            width: extent("width", self.width)?,
        })
    }
}

impl Options for PatchOptions {
    fn set(&mut self, key: &str, value: OptValue) -> Result<()> {
        match normalize(key).as_str() {
            "facecolor" => self.facecolor = value.into_paint(key)?,
            "edgecolor" => self.edgecolor = value.into_paint(key)?,
            "width" | "edgewidth" => self.width = value.into_extent(key)?,
            "color" => {
                let c = value.into_paint(key)?;
                self.facecolor = c.clone();
                self.edgecolor = c;
            }
            _ => ignore(key),
        }
        Ok(())
    }
}

/// Options of `text`
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    /// Text color (`color`), default black
    pub color: ColorSpec,
    /// Font family (`fontfamily`), default `sans-serif`
    pub fontfamily: String,
    /// Font size (`fontsize`), default 12
    pub fontsize: f64,
    /// Italic style (`italic`), default false
    pub italic: bool,
    /// Bold weight (`bold`), default false
    pub bold: bool,
    /// Underline (`underline`), default false
    pub underline: bool,
    /// Horizontal alignment (`halign`: left, center, right), default left
    pub halign: HAlign,
    /// Vertical alignment (`valign`: top, middle, bottom), default bottom
    pub valign: VAlign,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            color: defaults::TEXT_COLOR.into(),
            fontfamily: defaults::FONT_FAMILY.to_string(),
            fontsize: defaults::TEXT_FONT_SIZE as f64,
            italic: false,
            bold: false,
            underline: false,
            halign: HAlign::Left,
            valign: VAlign::Bottom,
        }
    }
}

impl TextOptions {
    /// Set the text color, returning self for chaining
    pub fn with_color(self, color: impl Into<ColorSpec>) -> Self {
        TextOptions {
            color: color.into(),
            ..self
        }
    }

    /// Set the font family, returning self for chaining
    pub fn with_fontfamily(self, fontfamily: impl Into<String>) -> Self {
        TextOptions {
            fontfamily: fontfamily.into(),
            ..self
        }
    }

    /// Set the font size, returning self for chaining
    pub fn with_fontsize(self, fontsize: f64) -> Self {
        TextOptions { fontsize, ..self }
    }

    /// Set the italic, bold and underline flags, returning self for chaining
    pub fn with_flags(self, italic: bool, bold: bool, underline: bool) -> Self {
        TextOptions {
            italic,
            bold,
            underline,
            ..self
        }
    }

    /// Set the alignment relative to the anchor, returning self for chaining
    pub fn with_align(self, halign: HAlign, valign: VAlign) -> Self {
        TextOptions {
            halign,
            valign,
            ..self
        }
    }

    pub(crate) fn resolve(&self) -> Result<style::series::Text> {
        Ok(style::series::Text {
            color: color::resolve(&self.color)?,
            font: Font {
                family: self.fontfamily.clone(),
                size: extent("fontsize", self.fontsize)?,
                italic: self.italic,
                bold: self.bold,
                underline: self.underline,
            },
            halign: self.halign,
            valign: self.valign,
        })
    }
}

impl Options for TextOptions {
    fn set(&mut self, key: &str, value: OptValue) -> Result<()> {
        match normalize(key).as_str() {
            "color" => {
                self.color = value
                    .into_paint(key)?
                    .ok_or_else(|| Error::invalid_option(key, "text color cannot be none"))?
            }
            "fontfamily" => self.fontfamily = value.into_string(key)?,
            "fontsize" => self.fontsize = value.into_extent(key)?,
            "italic" => self.italic = value.into_bool(key)?,
            "bold" => self.bold = value.into_bool(key)?,
            "underline" => self.underline = value.into_bool(key)?,
            "halign" => self.halign = value.into_string(key)?.parse()?,
            "valign" => self.valign = value.into_string(key)?.parse()?,
            _ => ignore(key),
        }
        Ok(())
    }
}

/// Options of `hist`
#[derive(Debug, Clone, PartialEq)]
pub struct HistOptions {
    /// Number of bins (`nbins`), default 16
    pub nbins: usize,
    /// Binning interval (`range`), default `[min, max]` of the samples
    pub range: Option<(f64, f64)>,
    /// Handling of samples on bin edges (`binedges`: strict, halfopen), default strict
    pub binedges: BinEdges,
    /// Style of the bin patches.
    /// Defaults to the patch defaults with width 1 and no outline.
    pub patch: PatchOptions,
}

impl Default for HistOptions {
    fn default() -> Self {
        HistOptions {
            nbins: defaults::HIST_BINS,
            range: None,
            binedges: BinEdges::Strict,
            patch: PatchOptions {
                edgecolor: None,
                width: defaults::HIST_WIDTH,
                ..PatchOptions::default()
            },
        }
    }
}

impl HistOptions {
    /// Set the number of bins, returning self for chaining
    pub fn with_nbins(self, nbins: usize) -> Self {
        HistOptions { nbins, ..self }
    }

    /// Set the binning interval, returning self for chaining
    pub fn with_range(self, lo: f64, hi: f64) -> Self {
        HistOptions {
            range: Some((lo, hi)),
            ..self
        }
    }

    /// Set the bin edge handling, returning self for chaining
    pub fn with_binedges(self, binedges: BinEdges) -> Self {
        HistOptions { binedges, ..self }
    }

    /// Set the style of the bin patches, returning self for chaining
    pub fn with_patch(self, patch: PatchOptions) -> Self {
        HistOptions { patch, ..self }
    }
}

impl Options for HistOptions {
    fn set(&mut self, key: &str, value: OptValue) -> Result<()> {
        match normalize(key).as_str() {
            "nbins" => {
                let n = value.into_num(key)?;
                if n < 1.0 || n.fract() != 0.0 || n > hist::MAX_BINS as f64 {
                    return Err(Error::invalid_option(
                        key,
                        format!("{} is not an integer in 1..={}", n, hist::MAX_BINS),
                    ));
                }
                self.nbins = n as usize;
            }
            "range" => self.range = Some(value.into_range(key)?),
            "binedges" => {
                self.binedges = value
                    .into_string(key)?
                    .parse()
                    .map_err(|_| Error::invalid_option(key, "expected strict or halfopen"))?
            }
            _ => self.patch.set(key, value)?,
        }
        Ok(())
    }
}
