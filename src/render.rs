//! Render module: provides abstraction over rendering surfaces.
//!
//! Surfaces are retained: every primitive created on a surface gets an [`ArtifactId`]
//! through which it can later be removed.
//! Primitives are created in one of the figure [`Region`]s, in coordinates relative to the
//! region's top-left corner.
//!
//! [`Recorder`] is an in-memory surface. See the `fxplot-svg` crate for an SVG surface.

use std::collections::BTreeMap;
use std::fmt;

use crate::layout::Layout;
use crate::style::{Font, HAlign, VAlign};
use crate::{Rgba, geom};

/// Surface trait: defines the rendering surface API
pub trait Surface {
    /// Prepare the surface for drawing, with the figure layout.
    /// Any primitive previously created is discarded.
    fn prepare(&mut self, layout: &Layout);

    /// The size of a region, as laid out by the last call to `prepare`
    fn region_size(&self, region: Region) -> geom::Size;

    /// Remove every primitive of a region
    fn clear(&mut self, region: Region);

    /// Create a primitive in a region and return its handle
    fn create(&mut self, region: Region, primitive: &Primitive) -> ArtifactId;

    /// Remove a primitive.
    /// Removing an artifact that no longer exists (e.g. after `clear`) is a no-op.
    fn remove(&mut self, id: ArtifactId);
}

/// The regions of a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Band above the graph, holding the title
    Title,
    /// Band right of the graph
    Legend,
    /// Band under the graph, holding x ticks and label
    XAxis,
    /// Band left of the graph, holding y ticks and label
    YAxis,
    /// Where the data series are drawn
    Graph,
}

impl Region {
    /// All regions, in drawing order
    pub const ALL: [Region; 5] = [
        Region::Title,
        Region::Legend,
        Region::XAxis,
        Region::YAxis,
        Region::Graph,
    ];

    /// Lower-case name of the region
    pub const fn name(&self) -> &'static str {
        match self {
            Region::Title => "title",
            Region::Legend => "legend",
            Region::XAxis => "xaxis",
            Region::YAxis => "yaxis",
            Region::Graph => "graph",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle to a primitive created on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactId(pub u64);

/// Paint pattern, used for fill operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Solid color fill
    Solid(Rgba),
}

impl Paint {
    /// The color of a solid paint
    pub const fn color(&self) -> Rgba {
        match self {
            Paint::Solid(c) => *c,
        }
    }
}

impl From<Rgba> for Paint {
    fn from(value: Rgba) -> Self {
        Paint::Solid(value)
    }
}

/// Line pattern defines how the line is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum LinePattern {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line. The pattern is relative to the line width.
    Dash(&'static [f32]),
}

/// Stroke style definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line color
    pub color: Rgba,
    /// Line width in figure units
    pub width: f32,
    /// Line pattern
    pub pattern: LinePattern,
}

/// Rectangle to draw
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    /// Rectangle geometry
    pub rect: geom::Rect,
    /// Fill style
    pub fill: Option<Paint>,
    /// Stroke style
    pub stroke: Option<Stroke>,
}

/// Circle to draw
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Center of the circle
    pub center: geom::Point,
    /// Radius of the circle
    pub radius: f32,
    /// Fill style
    pub fill: Option<Paint>,
    /// Stroke style
    pub stroke: Option<Stroke>,
}

/// Path to draw
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Path geometry
    pub path: geom::Path,
    /// Fill style
    pub fill: Option<Paint>,
    /// Stroke style
    pub stroke: Option<Stroke>,
}

/// Text to draw, anchored at a point
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// The text content
    pub text: String,
    /// Anchor point
    pub anchor: geom::Point,
    /// Font selection
    pub font: Font,
    /// Text color
    pub color: Rgba,
    /// Horizontal alignment relative to the anchor
    pub halign: HAlign,
    /// Vertical alignment relative to the anchor
    pub valign: VAlign,
    /// Rotation in degrees around the anchor, clockwise
    pub rotation: f32,
}

/// A graphical primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A rectangle
    Rect(Rect),
    /// A circle
    Circle(Circle),
    /// A path (segments, polygons)
    Path(Path),
    /// An anchored text
    Text(Text),
}

impl From<Rect> for Primitive {
    fn from(value: Rect) -> Self {
        Primitive::Rect(value)
    }
}

impl From<Circle> for Primitive {
    fn from(value: Circle) -> Self {
        Primitive::Circle(value)
    }
}

impl From<Path> for Primitive {
    fn from(value: Path) -> Self {
        Primitive::Path(value)
    }
}

impl From<Text> for Primitive {
    fn from(value: Text) -> Self {
        Primitive::Text(value)
    }
}

/// A primitive retained by a surface
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Handle of the primitive
    pub id: ArtifactId,
    /// Region of the primitive
    pub region: Region,
    /// The primitive itself
    pub primitive: Primitive,
}

/// An in-memory surface.
///
/// The recorder retains every live primitive in creation order,
/// keyed by handle as handles only ever grow. It is the backing store of the SVG surface, and is handy for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    layout: Layout,
    items: BTreeMap<ArtifactId, Item>,
    next_id: u64,
}

impl Recorder {
    /// Create an empty recorder, with the default layout
    pub fn new() -> Self {
        Self::default()
    }

    /// The layout given by the last `prepare` call
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Live primitives, in creation order
    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.values()
    }

    /// Live primitives of a region, in creation order
    pub fn region_items(&self, region: Region) -> impl Iterator<Item = &Item> + '_ {
        self.items.values().filter(move |it| it.region == region)
    }

    /// Get a live primitive by handle
    pub fn get(&self, id: ArtifactId) -> Option<&Primitive> {
        self.items.get(&id).map(|it| &it.primitive)
    }

    /// Number of live primitives
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there is no live primitive
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of live primitives in a region
    pub fn count(&self, region: Region) -> usize {
        self.region_items(region).count()
    }

    /// Texts of a region, in creation order
    pub fn texts(&self, region: Region) -> Vec<&str> {
        self.region_items(region)
            .filter_map(|it| match &it.primitive {
                Primitive::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn prepare(&mut self, layout: &Layout) {
        self.layout = layout.clone();
        self.items.clear();
    }

    fn region_size(&self, region: Region) -> geom::Size {
        self.layout.region(region).size()
    }

    fn clear(&mut self, region: Region) {
        self.items.retain(|_, it| it.region != region);
    }

    fn create(&mut self, region: Region, primitive: &Primitive) -> ArtifactId {
        let id = ArtifactId(self.next_id);
        self.next_id += 1;
        self.items.insert(
            id,
            Item {
                id,
                region,
                primitive: primitive.clone(),
            },
        );
        id
    }

    fn remove(&mut self, id: ArtifactId) {
        self.items.remove(&id);
    }
}
