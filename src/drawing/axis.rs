//! Primitives of the axis decorations: title, graph frame and grids, ticks and labels.
//!
//! Each function produces the primitives of one region, in coordinates relative to the region.
//! The x axis region spans the same columns as the graph, and the y axis region the same rows,
//! so the axis scales are built from the region sizes.

use crate::axes::Axis;
use crate::render::{self, Primitive};
use crate::scale::Scale;
use crate::style::{self, Font, HAlign, Theme, VAlign, defaults};
use crate::{Rgba, geom};

fn text(
    text: &str,
    anchor: geom::Point,
    font: Font,
    color: Rgba,
    (halign, valign): (HAlign, VAlign),
    rotation: f32,
) -> Primitive {
    render::Text {
        text: text.to_string(),
        anchor,
        font,
        color,
        halign,
        valign,
        rotation,
    }
    .into()
}

fn lines<I>(segments: I, stroke: render::Stroke) -> Option<Primitive>
where
    I: IntoIterator<Item = ((f32, f32), (f32, f32))>,
{
    let mut pb = geom::PathBuilder::new();
    for ((x1, y1), (x2, y2)) in segments {
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
    }
    let path = pb.finish()?;
    Some(
        render::Path {
            path,
            fill: None,
            stroke: Some(stroke),
        }
        .into(),
    )
}

fn spine_stroke(theme: &Theme) -> render::Stroke {
    style::Line::from((theme.foreground, defaults::SPINE_WIDTH)).as_stroke()
}

/// Pixel positions of the ticks of an axis along a scale of `length`
fn tick_positions(axis: &Axis, length: f32, vertical: bool) -> Vec<(f32, String)> {
    let (Some(domain), Some(ticks)) = (axis.domain(), axis.ticks()) else {
        return Vec::new();
    };
    let scale = if vertical {
        Scale::y(domain, length)
    } else {
        Scale::x(domain, length)
    };
    ticks
        .values()
        .iter()
        .zip(ticks.labels())
        .map(|(v, lbl)| (scale.to_pixel(*v), lbl))
        .collect()
}

/// Primitives of the title region: the title centered in the region, if any
pub fn title(title: &str, size: geom::Size, theme: &Theme) -> Vec<Primitive> {
    if title.is_empty() {
        return Vec::new();
    }
    let font = Font {
        bold: true,
        ..Font::new(defaults::TITLE_FONT_SIZE)
    };
    let anchor = geom::Point::from_xy(size.width() / 2.0, size.height() / 2.0);
    vec![text(
        title,
        anchor,
        font,
        theme.foreground,
        (HAlign::Center, VAlign::Middle),
        0.0,
    )]
}

/// Primitives of the graph region: background, grid lines and frame
pub fn graph(x: &Axis, y: &Axis, size: geom::Size, theme: &Theme) -> Vec<Primitive> {
    let (w, h) = (size.width(), size.height());
    let rect = geom::Rect::from_xywh(0.0, 0.0, w, h);
    let mut prims = vec![
        render::Rect {
            rect,
            fill: Some(theme.background.into()),
            stroke: None,
        }
        .into(),
    ];

    if x.grid() {
        let stroke = style::Line::from((theme.x_grid, defaults::GRID_WIDTH)).as_stroke();
        let segs = tick_positions(x, w, false)
            .into_iter()
            .map(|(px, _)| ((px, 0.0), (px, h)));
        prims.extend(lines(segs, stroke));
    }
    if y.grid() {
        let stroke = style::Line::from((theme.y_grid, defaults::GRID_WIDTH)).as_stroke();
        let segs = tick_positions(y, h, true)
            .into_iter()
            .map(|(py, _)| ((0.0, py), (w, py)));
        prims.extend(lines(segs, stroke));
    }

    prims.push(
        render::Rect {
            rect,
            fill: None,
            stroke: Some(spine_stroke(theme)),
        }
        .into(),
    );
    prims
}

/// Primitives of the x axis region: tick marks, tick labels and axis label
pub fn x_axis(axis: &Axis, size: geom::Size, theme: &Theme) -> Vec<Primitive> {
    let ticks = tick_positions(axis, size.width(), false);
    let mut prims = Vec::with_capacity(ticks.len() + 2);

    let marks = ticks
        .iter()
        .map(|(px, _)| ((*px, 0.0), (*px, defaults::TICK_SIZE)));
    prims.extend(lines(marks, spine_stroke(theme)));

    let lbl_y = defaults::TICK_SIZE + defaults::TICK_LABEL_MARGIN;
    for (px, lbl) in &ticks {
        prims.push(text(
            lbl,
            geom::Point::from_xy(*px, lbl_y),
            Font::new(defaults::TICK_LABEL_FONT_SIZE),
            theme.foreground,
            (HAlign::Center, VAlign::Top),
            0.0,
        ));
    }

    if !axis.label().is_empty() {
        let anchor = geom::Point::from_xy(
            size.width() / 2.0,
            size.height() - defaults::TICK_LABEL_MARGIN,
        );
        prims.push(text(
            axis.label(),
            anchor,
            Font::new(defaults::AXIS_LABEL_FONT_SIZE),
            theme.foreground,
            (HAlign::Center, VAlign::Bottom),
            0.0,
        ));
    }
    prims
}

/// Primitives of the y axis region: tick marks, tick labels and the rotated axis label
pub fn y_axis(axis: &Axis, size: geom::Size, theme: &Theme) -> Vec<Primitive> {
    let w = size.width();
    let ticks = tick_positions(axis, size.height(), true);
    let mut prims = Vec::with_capacity(ticks.len() + 2);

    let marks = ticks
        .iter()
        .map(|(py, _)| ((w - defaults::TICK_SIZE, *py), (w, *py)));
    prims.extend(lines(marks, spine_stroke(theme)));

    let lbl_x = w - defaults::TICK_SIZE - defaults::TICK_LABEL_MARGIN;
    for (py, lbl) in &ticks {
        prims.push(text(
            lbl,
            geom::Point::from_xy(lbl_x, *py),
            Font::new(defaults::TICK_LABEL_FONT_SIZE),
            theme.foreground,
            (HAlign::Right, VAlign::Middle),
            0.0,
        ));
    }

    if !axis.label().is_empty() {
        let anchor = geom::Point::from_xy(defaults::Y_LABEL_OFFSET, size.height() / 2.0);
        prims.push(text(
            axis.label(),
            anchor,
            Font::new(defaults::AXIS_LABEL_FONT_SIZE),
            theme.foreground,
            (HAlign::Center, VAlign::Middle),
            -90.0,
        ));
    }
    prims
}
