//! Series store.
//!
//! A [`Series`] is one plotted dataset with its resolved style,
//! plus the handles of the artifacts it was last rendered to.
//! The [`SeriesStore`] keeps them in insertion order, which is also the drawing order.

use crate::data::Point;
use crate::render::ArtifactId;
use crate::style::series as style;

/// Identifier of a series within its figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(pub usize);

/// The kind of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Circle markers
    Point,
    /// Straight segments between consecutive points
    Line,
    /// Closed polygon
    Patch,
    /// Anchored text
    Text,
}

/// The plotted content of a series
#[derive(Debug, Clone, PartialEq)]
pub enum Plot {
    /// One marker per point
    Point {
        /// Data points
        data: Vec<Point>,
        /// Marker style
        style: style::Marker,
    },
    /// One segment per pair of consecutive points
    Line {
        /// Data points
        data: Vec<Point>,
        /// Line style
        style: style::Line,
    },
    /// One closed polygon through all points
    Patch {
        /// Polygon vertices
        data: Vec<Point>,
        /// Polygon style
        style: style::Patch,
    },
    /// One text label
    Text {
        /// Anchor point
        anchor: Point,
        /// Literal text
        text: String,
        /// Text style
        style: style::Text,
    },
}

impl Plot {
    /// The kind of this plot
    pub fn kind(&self) -> Kind {
        match self {
            Plot::Point { .. } => Kind::Point,
            Plot::Line { .. } => Kind::Line,
            Plot::Patch { .. } => Kind::Patch,
            Plot::Text { .. } => Kind::Text,
        }
    }

    /// The data points, in drawing order
    pub fn data(&self) -> &[Point] {
        match self {
            Plot::Point { data, .. } | Plot::Line { data, .. } | Plot::Patch { data, .. } => data,
            Plot::Text { anchor, .. } => std::slice::from_ref(anchor),
        }
    }
}

/// A plotted series
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    plot: Plot,
    artifacts: Vec<ArtifactId>,
}

impl Series {
    /// Build a series that was not rendered yet
    pub fn new(plot: Plot) -> Self {
        Series {
            plot,
            artifacts: Vec::new(),
        }
    }

    /// The kind of this series
    pub fn kind(&self) -> Kind {
        self.plot.kind()
    }

    /// The plotted content
    pub fn plot(&self) -> &Plot {
        &self.plot
    }

    /// The data points, in drawing order
    pub fn data(&self) -> &[Point] {
        self.plot.data()
    }

    /// Handles of the artifacts produced by the last render
    pub fn artifacts(&self) -> &[ArtifactId] {
        &self.artifacts
    }

    /// Replace the artifacts by those of a new render, returning the stale ones
    pub(crate) fn replace_artifacts(&mut self, artifacts: Vec<ArtifactId>) -> Vec<ArtifactId> {
        std::mem::replace(&mut self.artifacts, artifacts)
    }
}

/// Ordered, append-only collection of series
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    series: Vec<Series>,
}

impl SeriesStore {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a series and return its identifier
    pub fn push(&mut self, series: Series) -> SeriesId {
        self.series.push(series);
        SeriesId(self.series.len() - 1)
    }

    /// Get a series by identifier
    pub fn get(&self, id: SeriesId) -> Option<&Series> {
        self.series.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: SeriesId) -> Option<&mut Series> {
        self.series.get_mut(id.0)
    }

    /// Number of series
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the store holds no series
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Iterate over the series in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (SeriesId, &Series)> + '_ {
        self.series
            .iter()
            .enumerate()
            .map(|(idx, s)| (SeriesId(idx), s))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Series> + '_ {
        self.series.iter_mut()
    }
}
