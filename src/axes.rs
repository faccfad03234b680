//! The axes model: domains, ticks, labels and series of a figure.
//!
//! Each axis keeps a working domain, grown from data or set explicitly.
//! The visible domain is the working domain snapped to its enclosing ticks.
//! Regenerating the ticks from the working domain always yields the same result,
//! which is what makes a redraw idempotent.

use crate::data::{self, Domain};
use crate::render::ArtifactId;
use crate::series::SeriesStore;
use crate::ticks::{self, Ticks};
use crate::{Error, Result};

/// Orientation of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

impl TryFrom<char> for Orientation {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'x' | 'X' => Ok(Orientation::X),
            'y' | 'Y' => Ok(Orientation::Y),
            _ => Err(Error::InvalidAxisSelector(c)),
        }
    }
}

/// One axis of the figure
#[derive(Debug, Clone)]
pub struct Axis {
    orientation: Orientation,
    working: Option<Domain>,
    ticks: Option<Ticks>,
    label: String,
    grid: bool,
}

impl Axis {
    fn new(orientation: Orientation) -> Self {
        Axis {
            orientation,
            working: None,
            ticks: None,
            label: String::new(),
            grid: false,
        }
    }

    /// Orientation of this axis
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The visible domain, snapped to the first and last ticks.
    /// `None` until the first data or limit is set.
    pub fn domain(&self) -> Option<Domain> {
        self.ticks.as_ref().map(Ticks::domain)
    }

    /// The domain the ticks are generated from
    pub fn working_domain(&self) -> Option<Domain> {
        self.working
    }

    /// The current ticks
    pub fn ticks(&self) -> Option<&Ticks> {
        self.ticks.as_ref()
    }

    /// The axis label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether grid lines are drawn at every tick
    pub fn grid(&self) -> bool {
        self.grid
    }

    /// The domain this axis would have after adding `values`.
    /// The axis itself is not modified.
    pub fn merged(&self, values: &[f64]) -> Result<Domain> {
        data::merge(self.domain(), values)
    }

    pub(crate) fn set_domain(&mut self, domain: Domain) {
        self.working = Some(domain);
        self.update_ticks();
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub(crate) fn set_grid(&mut self, grid: bool) {
        self.grid = grid;
    }

    /// Regenerate the ticks from the working domain
    pub(crate) fn update_ticks(&mut self) {
        self.ticks = self.working.map(ticks::generate);
        if let Some(t) = &self.ticks {
            log::trace!(
                "{:?} ticks: {} values, step {}, domain {}",
                self.orientation,
                t.len(),
                t.step(),
                t.domain()
            );
        }
    }
}

/// The axes of a figure: two axes, a title and the plotted series
#[derive(Debug, Clone)]
pub struct Axes {
    x: Axis,
    y: Axis,
    title: String,
    title_artifacts: Vec<ArtifactId>,
    series: SeriesStore,
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

impl Axes {
    /// Empty axes, without domains
    pub fn new() -> Self {
        Axes {
            x: Axis::new(Orientation::X),
            y: Axis::new(Orientation::Y),
            title: String::new(),
            title_artifacts: Vec::new(),
            series: SeriesStore::new(),
        }
    }

    /// The horizontal axis
    pub fn x(&self) -> &Axis {
        &self.x
    }

    /// The vertical axis
    pub fn y(&self) -> &Axis {
        &self.y
    }

    /// The axis of the given orientation
    pub fn axis(&self, orientation: Orientation) -> &Axis {
        match orientation {
            Orientation::X => &self.x,
            Orientation::Y => &self.y,
        }
    }

    pub(crate) fn axis_mut(&mut self, orientation: Orientation) -> &mut Axis {
        match orientation {
            Orientation::X => &mut self.x,
            Orientation::Y => &mut self.y,
        }
    }

    /// The figure title
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Replace the title artifacts, returning the stale ones
    pub(crate) fn replace_title_artifacts(&mut self, ids: Vec<ArtifactId>) -> Vec<ArtifactId> {
        std::mem::replace(&mut self.title_artifacts, ids)
    }

    /// The plotted series
    pub fn series(&self) -> &SeriesStore {
        &self.series
    }

    pub(crate) fn series_mut(&mut self) -> &mut SeriesStore {
        &mut self.series
    }

    /// Whether both axes have a domain
    pub fn has_domains(&self) -> bool {
        self.x.domain().is_some() && self.y.domain().is_some()
    }

    /// Domains covering the current ones and the new data, without modifying the axes
    pub fn merged(&self, xs: &[f64], ys: &[f64]) -> Result<(Domain, Domain)> {
        Ok((self.x.merged(xs)?, self.y.merged(ys)?))
    }

    /// Set both working domains, typically from [`Axes::merged`]
    pub(crate) fn set_domains(&mut self, (x, y): (Domain, Domain)) {
        self.x.set_domain(x);
        self.y.set_domain(y);
    }

    /// Regenerate the ticks of both axes
    pub(crate) fn update_ticks(&mut self) {
        self.x.update_ticks();
        self.y.update_ticks();
    }
}
