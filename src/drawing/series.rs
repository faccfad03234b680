//! Primitives of the data series, in graph region coordinates.

use crate::data::Point;
use crate::geom;
use crate::render::{self, Primitive};
use crate::scale::ScaleXy;
use crate::series::Plot;
use crate::style::series as style;

/// The primitives of a series.
///
/// `y_floor` is the lower bound of the y domain, down to which line supports are filled.
pub fn primitives(plot: &Plot, scales: &ScaleXy, y_floor: f64) -> Vec<Primitive> {
    match plot {
        Plot::Point { data, style } => markers(data, style, scales),
        Plot::Line { data, style } => segments(data, style, scales, y_floor),
        Plot::Patch { data, style } => patch(data, style, scales).into_iter().collect(),
        Plot::Text {
            anchor,
            text,
            style,
        } => vec![label(*anchor, text, style, scales)],
    }
}

fn markers(data: &[Point], style: &style::Marker, scales: &ScaleXy) -> Vec<Primitive> {
    let fill = style.fill.map(render::Paint::from);
    let stroke = style.as_stroke();
    data.iter()
        .map(|p| {
            render::Circle {
                center: scales.map(*p),
                radius: style.radius,
                fill,
                stroke,
            }
            .into()
        })
        .collect()
}

fn segments(
    data: &[Point],
    style: &style::Line,
    scales: &ScaleXy,
    y_floor: f64,
) -> Vec<Primitive> {
    let stroke = style.as_stroke();
    let floor = scales.y.to_pixel(y_floor);
    let mut prims = Vec::with_capacity(2 * data.len());

    for pair in data.windows(2) {
        let (p0, p1) = (scales.map(pair[0]), scales.map(pair[1]));

        if let Some(support) = style.support {
            let mut pb = geom::PathBuilder::new();
            pb.move_to(p0.x, p0.y);
            pb.line_to(p1.x, p1.y);
            pb.line_to(p1.x, floor);
            pb.line_to(p0.x, floor);
            pb.close();
            if let Some(path) = pb.finish() {
                prims.push(
                    render::Path {
                        path,
                        fill: Some(support.into()),
                        stroke: None,
                    }
                    .into(),
                );
            }
        }

        if stroke.is_some() {
            let mut pb = geom::PathBuilder::new();
            pb.move_to(p0.x, p0.y);
            pb.line_to(p1.x, p1.y);
            if let Some(path) = pb.finish() {
                prims.push(
                    render::Path {
                        path,
                        fill: None,
                        stroke,
                    }
                    .into(),
                );
            }
        }
    }
    prims
}

fn patch(data: &[Point], style: &style::Patch, scales: &ScaleXy) -> Option<Primitive> {
    let mut pb = geom::PathBuilder::new();
    for (i, p) in data.iter().enumerate() {
        let p = scales.map(*p);
        let (x, y) = (p.x.round(), p.y.round());
        if i == 0 {
            pb.move_to(x, y);
        } else {
            pb.line_to(x, y);
        }
    }
    pb.close();
    let path = pb.finish()?;
    Some(
        render::Path {
            path,
            fill: style.fill.map(render::Paint::from),
            stroke: style.as_stroke(),
        }
        .into(),
    )
}

fn label(anchor: Point, text: &str, style: &style::Text, scales: &ScaleXy) -> Primitive {
    render::Text {
        text: text.to_string(),
        anchor: scales.map(anchor),
        font: style.font.clone(),
        color: style.color,
        halign: style.halign,
        valign: style.valign,
        rotation: 0.0,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::data::Domain;
    use crate::scale::Scale;
    use crate::style::{Font, HAlign, LinePattern, VAlign};

    fn scales() -> ScaleXy {
        ScaleXy {
            x: Scale::x(Domain::new(0.0, 10.0).unwrap(), 100.0),
            y: Scale::y(Domain::new(0.0, 10.0).unwrap(), 50.0),
        }
    }

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn line_style(support: Option<crate::Rgba>) -> style::Line {
        style::Line {
            color: Some(color::BLACK),
            width: 1.5,
            pattern: LinePattern::Dashed,
            support,
        }
    }

    #[test]
    fn one_marker_per_point() {
        let plot = Plot::Point {
            data: pts(&[(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]),
            style: style::Marker {
                radius: 4.0,
                fill: Some(color::BLUE),
                edge: None,
                edge_width: 1.0,
            },
        };
        let prims = primitives(&plot, &scales(), 0.0);
        assert_eq!(prims.len(), 3);
        let Primitive::Circle(c) = &prims[1] else {
            panic!("expected a circle");
        };
        assert_eq!((c.center.x, c.center.y), (50.0, 25.0));
        assert_eq!(c.radius, 4.0);
        assert!(c.stroke.is_none());
    }

    #[test]
    fn one_segment_per_pair() {
        let plot = Plot::Line {
            data: pts(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)]),
            style: line_style(None),
        };
        let prims = primitives(&plot, &scales(), 0.0);
        assert_eq!(prims.len(), 2);
        for p in &prims {
            let Primitive::Path(p) = p else {
                panic!("expected a path");
            };
            assert!(p.fill.is_none());
            let stroke = p.stroke.unwrap();
            assert!(matches!(stroke.pattern, render::LinePattern::Dash(_)));
        }
    }

    #[test]
    fn supports_go_down_to_floor() {
        let plot = Plot::Line {
            data: pts(&[(0.0, 5.0), (10.0, 5.0)]),
            style: line_style(Some(color::GRAY)),
        };
        let prims = primitives(&plot, &scales(), 0.0);
        assert_eq!(prims.len(), 2);
        let Primitive::Path(support) = &prims[0] else {
            panic!("expected a path");
        };
        assert_eq!(support.fill, Some(color::GRAY.into()));
        let bounds = support.path.bounds();
        assert_eq!((bounds.top(), bounds.bottom()), (25.0, 50.0));
    }

    #[test]
    fn single_point_line_has_no_segment() {
        let plot = Plot::Line {
            data: pts(&[(1.0, 1.0)]),
            style: line_style(Some(color::GRAY)),
        };
        assert!(primitives(&plot, &scales(), 0.0).is_empty());
    }

    #[test]
    fn patch_is_one_rounded_polygon() {
        let plot = Plot::Patch {
            data: pts(&[(0.0, 0.0), (3.33, 0.0), (3.33, 3.33)]),
            style: style::Patch {
                fill: Some(color::RED),
                edge: Some(color::BLACK),
                width: 1.0,
            },
        };
        let prims = primitives(&plot, &scales(), 0.0);
        assert_eq!(prims.len(), 1);
        let Primitive::Path(p) = &prims[0] else {
            panic!("expected a path");
        };
        for pt in p.path.points() {
            assert_eq!(pt.x, pt.x.round());
            assert_eq!(pt.y, pt.y.round());
        }
        assert!(p.fill.is_some() && p.stroke.is_some());
    }

    #[test]
    fn text_is_anchored() {
        let plot = Plot::Text {
            anchor: Point::new(10.0, 10.0),
            text: "peak".into(),
            style: style::Text {
                color: color::RED,
                font: Font::new(14.0),
                halign: HAlign::Center,
                valign: VAlign::Top,
            },
        };
        let prims = primitives(&plot, &scales(), 0.0);
        let [Primitive::Text(t)] = prims.as_slice() else {
            panic!("expected a single text");
        };
        assert_eq!(t.text, "peak");
        assert_eq!((t.anchor.x, t.anchor.y), (100.0, 0.0));
        assert_eq!((t.halign, t.valign), (HAlign::Center, VAlign::Top));
    }
}
