#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
/*!
 * # fxplot
 * MATLAB-style 2D plotting onto vector surfaces.
 *
 * A [`Figure`] owns one set of axes and a rendering surface.
 * Every plotting call (`scatter`, `plot`, `patch`, `text`, `hist`) grows the axis domains
 * to cover the new data, snaps them to decade-aligned ticks and redraws the whole figure,
 * so that what is on the surface always reflects the current domains.
 *
 * ```
 * use fxplot::render::Recorder;
 * use fxplot::{Figure, options};
 *
 * let mut fig = Figure::new(Recorder::new());
 * fig.set_title("squares");
 *
 * let x = [0.0, 1.0, 2.0, 3.0];
 * let y = [0.0, 1.0, 4.0, 9.0];
 * fig.plot(&x, &y, options::PlotOptions::default().with_style("--")?)?;
 * fig.scatter(&x, &y, Default::default())?;
 *
 * assert_eq!(fig.xlim(), Some((0.0, 3.0).try_into()?));
 * assert_eq!(fig.ylim(), Some((0.0, 9.0).try_into()?));
 * # Ok::<(), fxplot::Error>(())
 * ```
 *
 * ## Organization
 *
 * The geometry is computed by pure functions in [`data`], [`scale`], [`ticks`] and [`drawing`].
 * The [`render::Surface`] trait is the only place where primitives leave the library.
 * `fxplot-svg` provides an SVG surface, [`render::Recorder`] an in-memory one.
 */
// fxplot is released under the MIT License.

pub mod axes;
pub mod data;
pub mod drawing;
mod error;
pub mod figure;
pub mod hist;
pub mod layout;
pub mod options;
pub mod render;
pub mod scale;
pub mod series;
pub mod style;
pub mod ticks;

pub use axes::Orientation;
pub use error::{Error, Result};
pub use figure::{Figure, FigureConfig};
pub use series::SeriesId;

/// Rexports of [`fxplot_base::color`] items
pub mod color {
    pub use fxplot_base::color::*;
}
pub use color::{ColorSpec, Rgba};

/// Rexports of [`fxplot_base::geom`] items
pub mod geom {
    pub use fxplot_base::geom::*;
}
