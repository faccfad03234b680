//! The figure: a surface, its layout and the axes plotted onto it.

use crate::axes::{Axes, Orientation};
use crate::data::{self, Domain, Point};
use crate::drawing;
use crate::layout::Layout;
use crate::options::{HistOptions, PatchOptions, PlotOptions, ScatterOptions, TextOptions};
use crate::render::{Region, Surface};
use crate::series::{Plot, Series, SeriesId};
use crate::style::{Theme, defaults};
use crate::ticks::Ticks;
use crate::{Error, Result, geom, hist};

/// Figure configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    /// Figure size, in surface units. Default 640x480
    pub size: geom::Size,
    /// Fractions of the figure size left around the graph.
    /// Default top 0.1, right 0, bottom 0.2, left 0.1
    pub margin: geom::Margin,
    /// Decoration colors. Default [`Theme::LIGHT`]
    pub theme: Theme,
}

impl Default for FigureConfig {
    fn default() -> Self {
        FigureConfig {
            size: defaults::FIG_SIZE,
            margin: defaults::FIG_MARGIN,
            theme: Theme::default(),
        }
    }
}

impl FigureConfig {
    /// Set the figure size, returning self for chaining
    pub fn with_size(self, width: f32, height: f32) -> Self {
        FigureConfig {
            size: geom::Size::new(width, height),
            ..self
        }
    }

    /// Set the margin fractions, returning self for chaining
    pub fn with_margin(self, margin: impl Into<geom::Margin>) -> Self {
        FigureConfig {
            margin: margin.into(),
            ..self
        }
    }

    /// Set the theme, returning self for chaining
    pub fn with_theme(self, theme: Theme) -> Self {
        FigureConfig { theme, ..self }
    }
}

/// A figure plotting onto a surface.
///
/// Every mutation keeps the surface in sync with the model:
/// data-affecting calls merge the new data into the axis domains and redraw everything.
/// Failed calls leave the figure and the surface untouched.
#[derive(Debug)]
pub struct Figure<S> {
    surface: S,
    layout: Layout,
    theme: Theme,
    axes: Axes,
}

fn split(points: &[Point]) -> (Vec<f64>, Vec<f64>) {
    points.iter().map(|p| (p.x, p.y)).unzip()
}

impl<S: Surface> Figure<S> {
    /// Create a figure with the default configuration
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, FigureConfig::default())
    }

    /// Create a figure, and draw its empty axes
    pub fn with_config(mut surface: S, config: FigureConfig) -> Self {
        let layout = Layout::new(config.size, config.margin);
        surface.prepare(&layout);
        let mut fig = Figure {
            surface,
            layout,
            theme: config.theme,
            axes: Axes::new(),
        };
        fig.redraw();
        fig
    }

    /// Plot one circle marker per `(x, y)` point
    pub fn scatter(&mut self, x: &[f64], y: &[f64], opts: ScatterOptions) -> Result<SeriesId> {
        log::debug!("scatter: {} points", x.len());
        let data = data::pair(x, y)?;
        let style = opts.resolve()?;
        self.add_series(Plot::Point { data, style })
    }

    /// Plot straight segments between consecutive `(x, y)` points
    pub fn plot(&mut self, x: &[f64], y: &[f64], opts: PlotOptions) -> Result<SeriesId> {
        log::debug!("plot: {} points", x.len());
        let data = data::pair(x, y)?;
        let style = opts.resolve()?;
        self.add_series(Plot::Line { data, style })
    }

    /// Plot a closed polygon through the `(x, y)` points
    pub fn patch(&mut self, x: &[f64], y: &[f64], opts: PatchOptions) -> Result<SeriesId> {
        log::debug!("patch: {} vertices", x.len());
        let data = data::pair(x, y)?;
        let style = opts.resolve()?;
        self.add_series(Plot::Patch { data, style })
    }

    /// Place a text anchored at `(x, y)`.
    ///
    /// A text does not grow the domains. If an axis has no domain yet, it is seeded
    /// with `[0, 2v]` (or `[2v, 0]` for negative `v`) and the figure is redrawn.
    /// Otherwise the text is drawn over the current figure without redrawing it.
    pub fn text(&mut self, x: f64, y: f64, text: &str, opts: TextOptions) -> Result<SeriesId> {
        log::debug!("text: '{}' at ({}, {})", text, x, y);
        data::check_range(&[x, y])?;
        let style = opts.resolve()?;

        let plot = Plot::Text {
            anchor: Point::new(x, y),
            text: text.to_string(),
            style,
        };

        if self.axes.has_domains() {
            let id = self.axes.series_mut().push(Series::new(plot));
            let size = self.surface.region_size(Region::Graph);
            let scales = drawing::graph_scales(&self.axes, size);
            if let (Some(scales), Some(series)) = (scales, self.axes.series_mut().get_mut(id)) {
                drawing::render_series(&mut self.surface, series, &scales);
            }
            return Ok(id);
        }

        let seeds = [
            (Orientation::X, Domain::new(0.0, 2.0 * x)?),
            (Orientation::Y, Domain::new(0.0, 2.0 * y)?),
        ];
        for (orientation, seed) in seeds {
            let axis = self.axes.axis_mut(orientation);
            if axis.domain().is_none() {
                axis.set_domain(seed);
            }
        }
        let id = self.axes.series_mut().push(Series::new(plot));
        self.redraw();
        Ok(id)
    }

    /// Plot the histogram of `samples`: one rectangular patch per bin,
    /// from 0 to the bin count.
    pub fn hist(&mut self, samples: &[f64], opts: HistOptions) -> Result<Vec<SeriesId>> {
        log::debug!("hist: {} samples into {} bins", samples.len(), opts.nbins);
        let bins = hist::bin(samples, opts.nbins, opts.range, opts.binedges)?;
        let style = opts.patch.resolve()?;

        let plots: Vec<Plot> = bins
            .iter()
            .map(|b| Plot::Patch {
                data: b.rectangle().to_vec(),
                style,
            })
            .collect();
        let (xs, ys): (Vec<f64>, Vec<f64>) = plots
            .iter()
            .flat_map(|p| p.data())
            .map(|p| (p.x, p.y))
            .unzip();
        let domains = self.axes.merged(&xs, &ys)?;

        self.axes.set_domains(domains);
        let ids = plots
            .into_iter()
            .map(|plot| self.axes.series_mut().push(Series::new(plot)))
            .collect();
        self.redraw();
        Ok(ids)
    }

    fn add_series(&mut self, plot: Plot) -> Result<SeriesId> {
        let (xs, ys) = split(plot.data());
        let domains = self.axes.merged(&xs, &ys)?;
        self.axes.set_domains(domains);
        let id = self.axes.series_mut().push(Series::new(plot));
        self.redraw();
        Ok(id)
    }

    /// Redraw the whole figure from the current model.
    /// Redrawing an unchanged figure produces the same primitives.
    pub fn redraw(&mut self) {
        drawing::redraw(&mut self.surface, &mut self.axes, &self.theme);
    }

    /// Set the figure title. Only the title is redrawn.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.axes.set_title(title.into());
        drawing::draw_title(&mut self.surface, &mut self.axes, &self.theme);
    }

    /// Set the label of the x axis
    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.set_axis_label(Orientation::X, label.into());
    }

    /// Set the label of the y axis
    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.set_axis_label(Orientation::Y, label.into());
    }

    /// Set the label of the axis selected by `axis` (`'x'` or `'y'`)
    pub fn set_label(&mut self, axis: char, label: impl Into<String>) -> Result<()> {
        let orientation = Orientation::try_from(axis)?;
        self.set_axis_label(orientation, label.into());
        Ok(())
    }

    fn set_axis_label(&mut self, orientation: Orientation, label: String) {
        self.axes.axis_mut(orientation).set_label(label);
        self.redraw();
    }

    /// Set the limits of the x axis. See [`Figure::set_lim`].
    pub fn set_xlim(&mut self, lo: f64, hi: f64) -> Result<()> {
        self.set_axis_lim(Orientation::X, lo, hi)
    }

    /// Set the limits of the y axis. See [`Figure::set_lim`].
    pub fn set_ylim(&mut self, lo: f64, hi: f64) -> Result<()> {
        self.set_axis_lim(Orientation::Y, lo, hi)
    }

    /// Replace the domain of the axis selected by `axis` (`'x'` or `'y'`), and redraw.
    ///
    /// Unlike data, explicit limits may shrink the domain.
    /// The bounds may be given in any order, and are snapped to the enclosing ticks.
    /// Equal bounds are rejected with [`Error::DegenerateDomain`].
    pub fn set_lim(&mut self, axis: char, lo: f64, hi: f64) -> Result<()> {
        let orientation = Orientation::try_from(axis)?;
        self.set_axis_lim(orientation, lo, hi)
    }

    fn set_axis_lim(&mut self, orientation: Orientation, lo: f64, hi: f64) -> Result<()> {
        log::debug!("set {:?} limits to [{}, {}]", orientation, lo, hi);
        data::check_range(&[lo, hi])?;
        let domain = Domain::new(lo, hi)?;
        if domain.is_degenerate() {
            return Err(Error::DegenerateDomain(lo));
        }
        self.axes.axis_mut(orientation).set_domain(domain);
        self.redraw();
        Ok(())
    }

    /// The visible domain of the axis selected by `axis`
    pub fn lim(&self, axis: char) -> Result<Option<Domain>> {
        let orientation = Orientation::try_from(axis)?;
        Ok(self.axes.axis(orientation).domain())
    }

    /// The visible domain of the x axis
    pub fn xlim(&self) -> Option<Domain> {
        self.axes.x().domain()
    }

    /// The visible domain of the y axis
    pub fn ylim(&self) -> Option<Domain> {
        self.axes.y().domain()
    }

    /// The ticks of the axis selected by `axis`
    pub fn ticks(&self, axis: char) -> Result<Option<&Ticks>> {
        let orientation = Orientation::try_from(axis)?;
        Ok(self.axes.axis(orientation).ticks())
    }

    /// Show or hide the grid lines of the axis selected by `axis`
    pub fn set_grid(&mut self, axis: char, grid: bool) -> Result<()> {
        let orientation = Orientation::try_from(axis)?;
        self.axes.axis_mut(orientation).set_grid(grid);
        self.redraw();
        Ok(())
    }

    /// Change the theme and redraw
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.redraw();
    }

    /// Get a series by identifier
    pub fn series(&self, id: SeriesId) -> Option<&Series> {
        self.axes.series().get(id)
    }

    /// Number of plotted series
    pub fn series_count(&self) -> usize {
        self.axes.series().len()
    }

    /// The axes model
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    /// The figure layout
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The figure theme
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The rendering surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the figure and return its surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}
