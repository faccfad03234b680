//! SVG rendering surface for fxplot.
//!
//! [`SvgSurface`] retains the primitives of a figure like [`render::Recorder`] does,
//! and serializes them on demand: one `<g>` element per figure region,
//! translated to the region origin.
//!
//! ```
//! use fxplot::Figure;
//! use fxplot_svg::SvgSurface;
//!
//! let mut fig = Figure::new(SvgSurface::new());
//! fig.scatter(&[1.0, 2.0, 3.0], &[3.0, 1.0, 2.0], Default::default())?;
//!
//! let mut buf = Vec::new();
//! fig.surface().write(&mut buf).unwrap();
//! assert!(String::from_utf8(buf).unwrap().contains("<circle"));
//! # Ok::<(), fxplot::Error>(())
//! ```
use std::path::Path;
use std::{fmt, io};

use fxplot::geom;
use fxplot::layout::Layout;
use fxplot::render::{self, Primitive, Recorder, Region, Surface};
use fxplot::style::{HAlign, VAlign};
use svg::Node;
use svg::node::element;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
        }
    }
}

/// A surface producing SVG documents
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    rec: Recorder,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The retained primitives
    pub fn recorder(&self) -> &Recorder {
        &self.rec
    }

    /// Build the SVG document of the current primitives
    pub fn document(&self) -> svg::Document {
        let layout = self.rec.layout();
        let size = layout.size();
        let mut doc = svg::Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("viewBox", (0.0, 0.0, size.width(), size.height()));

        for region in Region::ALL {
            doc.append(self.region_group(layout, region));
        }
        doc
    }

    fn region_group(&self, layout: &Layout, region: Region) -> element::Group {
        let rect = layout.region(region);
        let mut group = element::Group::new()
            .set("class", format!("fxplot-{}", region))
            .set(
                "transform",
                format!("translate({} {})", rect.x(), rect.y()),
            );
        for item in self.rec.region_items(region) {
            match &item.primitive {
                Primitive::Rect(r) => group.append(rect_node(r)),
                Primitive::Circle(c) => group.append(circle_node(c)),
                Primitive::Path(p) => group.append(path_node(p)),
                Primitive::Text(t) => group.append(text_node(t)),
            }
        }
        group
    }

    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        log::debug!(
            "saving {} primitives to {}",
            self.rec.len(),
            path.as_ref().display()
        );
        svg::save(path, &self.document())?;
        Ok(())
    }

    pub fn write<W>(&self, dest: &mut W) -> Result<(), Error>
    where
        W: io::Write,
    {
        svg::write(dest, &self.document())?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn prepare(&mut self, layout: &Layout) {
        self.rec.prepare(layout);
    }

    fn region_size(&self, region: Region) -> geom::Size {
        self.rec.region_size(region)
    }

    fn clear(&mut self, region: Region) {
        self.rec.clear(region);
    }

    fn create(&mut self, region: Region, primitive: &Primitive) -> render::ArtifactId {
        self.rec.create(region, primitive)
    }

    fn remove(&mut self, id: render::ArtifactId) {
        self.rec.remove(id);
    }
}

fn assign_fill<N>(node: &mut N, fill: Option<&render::Paint>)
where
    N: Node,
{
    if let Some(render::Paint::Solid(color)) = fill {
        node.assign("fill", color.html());
        if let Some(opacity) = color.opacity() {
            node.assign("fill-opacity", opacity);
        }
    } else {
        node.assign("fill", "none");
    }
}

fn assign_stroke<N>(node: &mut N, stroke: Option<&render::Stroke>)
where
    N: Node,
{
    if let Some(stroke) = stroke {
        let w = stroke.width;
        node.assign("stroke", stroke.color.html());
        node.assign("stroke-width", w);
        if let Some(opacity) = stroke.color.opacity() {
            node.assign("stroke-opacity", opacity);
        }
        match stroke.pattern {
            render::LinePattern::Solid => (),
            render::LinePattern::Dash(dash) => {
                let array: Vec<f32> = dash.iter().map(|d| d * w).collect();
                node.assign("stroke-dasharray", array)
            }
        }
    } else {
        node.assign("stroke", "none");
    }
}

fn path_data(path: &geom::Path) -> element::path::Data {
    let mut data = element::path::Data::new();
    for segment in path.segments() {
        match segment {
            geom::PathSegment::MoveTo(p) => {
                data = data.move_to((p.x, p.y));
            }
            geom::PathSegment::LineTo(p) => {
                data = data.line_to((p.x, p.y));
            }
            geom::PathSegment::QuadTo(p1, p2) => {
                data = data.quadratic_curve_to((p1.x, p1.y, p2.x, p2.y));
            }
            geom::PathSegment::CubicTo(p1, p2, p3) => {
                data = data.cubic_curve_to((p1.x, p1.y, p2.x, p2.y, p3.x, p3.y));
            }
            geom::PathSegment::Close => {
                data = data.close();
            }
        }
    }
    data
}

fn rect_node(rect: &render::Rect) -> element::Rectangle {
    let r = &rect.rect;
    let mut node = element::Rectangle::new()
        .set("x", r.x())
        .set("y", r.y())
        .set("width", r.width())
        .set("height", r.height());
    assign_fill(&mut node, rect.fill.as_ref());
    assign_stroke(&mut node, rect.stroke.as_ref());
    node
}

fn circle_node(circle: &render::Circle) -> element::Circle {
    let mut node = element::Circle::new()
        .set("cx", circle.center.x)
        .set("cy", circle.center.y)
        .set("r", circle.radius);
    assign_fill(&mut node, circle.fill.as_ref());
    assign_stroke(&mut node, circle.stroke.as_ref());
    node
}

fn path_node(path: &render::Path) -> element::Path {
    let mut node = element::Path::new();
    assign_fill(&mut node, path.fill.as_ref());
    assign_stroke(&mut node, path.stroke.as_ref());
    node.assign("d", path_data(&path.path));
    node
}

fn text_anchor(align: HAlign) -> &'static str {
    match align {
        HAlign::Left => "start",
        HAlign::Center => "middle",
        HAlign::Right => "end",
    }
}

fn dominant_baseline(align: VAlign) -> &'static str {
    match align {
        VAlign::Top => "hanging",
        VAlign::Middle => "middle",
        VAlign::Bottom => "alphabetic",
    }
}

fn text_node(text: &render::Text) -> element::Text {
    let (x, y) = (text.anchor.x, text.anchor.y);
    let mut node = element::Text::new(text.text.clone())
        .set("x", x)
        .set("y", y)
        .set("font-family", text.font.family.clone())
        .set("font-size", text.font.size)
        .set("text-anchor", text_anchor(text.halign))
        .set("dominant-baseline", dominant_baseline(text.valign));
    if text.font.italic {
        node.assign("font-style", "italic");
    }
    if text.font.bold {
        node.assign("font-weight", "bold");
    }
    if text.font.underline {
        node.assign("text-decoration", "underline");
    }
    assign_fill(&mut node, Some(&text.color.into()));
    if text.rotation != 0.0 {
        node.assign(
            "transform",
            format!("rotate({} {} {})", text.rotation, x, y),
        );
    }
    node
}
