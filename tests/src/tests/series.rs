use fxplot::color::{self, ColorSpec};
use fxplot::options::{Options, PatchOptions, PlotOptions, ScatterOptions, TextOptions};
use fxplot::render::{Primitive, Region};
use fxplot::series::Kind;
use fxplot::{Error, Figure, SeriesId};
use fxplot_svg::SvgSurface;

use crate::{assert_redraw_stable, count, fig_small, fig_to_svg, texts};

/// Primitives last rendered for a series
fn primitives(fig: &Figure<SvgSurface>, id: SeriesId) -> Vec<Primitive> {
    let rec = fig.surface().recorder();
    fig.series(id)
        .unwrap()
        .artifacts()
        .iter()
        .map(|a| rec.get(*a).unwrap().clone())
        .collect()
}

#[test]
fn series_scatter() {
    let mut fig = fig_small();
    let id = fig
        .scatter(&[1.0, 2.0, 3.0], &[2.0, 1.0, 3.0], Default::default())
        .unwrap();

    assert_eq!(fig.series(id).unwrap().kind(), Kind::Point);
    let prims = primitives(&fig, id);
    assert_eq!(prims.len(), 3);
    assert!(prims.iter().all(|p| matches!(p, Primitive::Circle(_))));
    // background, frame and markers
    assert_eq!(count(&fig, Region::Graph), 5);

    assert_redraw_stable!(&mut fig, "series/scatter");
}

#[test]
fn series_scatter_hollow() {
    let mut fig = fig_small();
    let opts = ScatterOptions::default()
        .with_facecolor(None)
        .with_edgecolor(Some(color::RED.into()))
        .with_size(6.0);
    let id = fig.scatter(&[0.0, 1.0], &[0.0, 1.0], opts).unwrap();

    for prim in primitives(&fig, id) {
        let Primitive::Circle(circle) = prim else {
            panic!("expected a circle");
        };
        assert_eq!(circle.radius, 6.0);
        assert!(circle.fill.is_none());
        assert_eq!(circle.stroke.unwrap().color, color::RED);
    }
}

#[test]
fn series_plot_segments() {
    let mut fig = fig_small();
    let id = fig
        .plot(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 0.0, 1.0], Default::default())
        .unwrap();

    assert_eq!(fig.series(id).unwrap().kind(), Kind::Line);
    let prims = primitives(&fig, id);
    assert_eq!(prims.len(), 3);
    assert!(prims.iter().all(|p| matches!(p, Primitive::Path(_))));

    assert_redraw_stable!(&mut fig, "series/plot");
}

#[test]
fn series_plot_support() {
    let mut fig = fig_small();
    let opts = PlotOptions::default().with_supportcolor(color::RED);
    let id = fig
        .plot(&[0.0, 1.0, 2.0], &[1.0, 2.0, 1.0], opts)
        .unwrap();

    let prims = primitives(&fig, id);
    assert_eq!(prims.len(), 4);
    // support first, then the segment over it
    let Primitive::Path(support) = &prims[0] else {
        panic!("expected a path");
    };
    assert!(support.stroke.is_none());
    assert!(support.fill.is_some());
    let Primitive::Path(segment) = &prims[1] else {
        panic!("expected a path");
    };
    assert!(segment.fill.is_none());
    assert!(segment.stroke.is_some());

    assert_redraw_stable!(&mut fig, "series/plot-support");
}

#[test]
fn series_plot_without_color() {
    let mut fig = fig_small();
    let opts = PlotOptions::from_pairs([("color", "none"), ("supportcolor", "red")]).unwrap();
    let id = fig.plot(&[0.0, 1.0, 2.0], &[1.0, 2.0, 1.0], opts).unwrap();

    // supports only
    assert_eq!(primitives(&fig, id).len(), 2);
}

#[test]
fn series_patch() {
    let mut fig = fig_small();
    let opts = PatchOptions::default().with_color(ColorSpec::from("red"));
    let id = fig
        .patch(&[0.0, 2.0, 1.0], &[0.0, 0.0, 2.0], opts)
        .unwrap();

    assert_eq!(fig.series(id).unwrap().kind(), Kind::Patch);
    let prims = primitives(&fig, id);
    assert_eq!(prims.len(), 1);
    let Primitive::Path(path) = &prims[0] else {
        panic!("expected a path");
    };
    assert!(path.fill.is_some());
    assert!(path.stroke.is_some());

    assert_redraw_stable!(&mut fig, "series/patch");
}

#[test]
fn series_text_over_figure() {
    let mut fig = fig_small();
    fig.plot(&[0.0, 10.0], &[0.0, 10.0], Default::default())
        .unwrap();
    let before = fig.xlim();
    let graph = count(&fig, Region::Graph);

    let opts = TextOptions::from_pairs([("fontsize", 14.0)]).unwrap();
    let id = fig.text(20.0, 5.0, "outside", opts).unwrap();

    assert_eq!(fig.series(id).unwrap().kind(), Kind::Text);
    assert_eq!(fig.xlim(), before);
    assert_eq!(count(&fig, Region::Graph), graph + 1);
    assert_eq!(texts(&fig, Region::Graph), vec!["outside"]);

    assert_redraw_stable!(&mut fig, "series/text");
}

#[test]
fn series_text_seeds_empty_axes() {
    let mut fig = fig_small();
    fig.text(3.0, -2.0, "seed", Default::default()).unwrap();

    assert_eq!(fig.xlim(), Some((0.0, 6.0).try_into().unwrap()));
    assert_eq!(fig.ylim(), Some((-4.0, 0.0).try_into().unwrap()));
    assert_eq!(texts(&fig, Region::Graph), vec!["seed"]);
}

#[test]
fn series_errors_leave_figure_untouched() {
    let mut fig = fig_small();
    fig.scatter(&[1.0, 2.0], &[1.0, 2.0], Default::default())
        .unwrap();
    let svg = fig_to_svg(&fig);

    assert_eq!(
        fig.plot(&[1.0, 2.0, 3.0], &[1.0, 2.0], Default::default()),
        Err(Error::UnevenSeriesLength { x: 3, y: 2 })
    );
    assert_eq!(
        fig.scatter(&[], &[], Default::default()),
        Err(Error::EmptySeries)
    );
    assert!(matches!(
        fig.patch(&[0.0, f64::NAN], &[0.0, 1.0], Default::default()),
        Err(Error::NonFiniteValue(_))
    ));
    assert_eq!(
        fig.scatter(&[-1e308, 1e308], &[0.0, 1.0], Default::default()),
        Err(Error::ValueOutOfRange(-1e308))
    );
    assert!(matches!(
        fig.scatter(&[0.0, 1.0], &[0.0, 1.0], ScatterOptions::default().with_size(f64::NAN)),
        Err(Error::InvalidOption { .. })
    ));
    let bad = PatchOptions::default().with_color(ColorSpec::from("not-a-color"));
    assert!(matches!(
        fig.patch(&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0], bad),
        Err(Error::InvalidColorSpec(_))
    ));

    assert_eq!(fig.series_count(), 1);
    assert_eq!(fig_to_svg(&fig), svg);
}

#[test]
fn series_mixed_figure() {
    let mut fig = fig_small();
    fig.patch(&[0.0, 4.0, 4.0, 0.0], &[0.0, 0.0, 2.0, 2.0], Default::default())
        .unwrap();
    fig.plot(&[0.0, 2.0, 4.0], &[1.0, 3.0, 1.0], Default::default())
        .unwrap();
    fig.scatter(&[1.0, 3.0], &[2.5, 2.5], Default::default())
        .unwrap();
    fig.text(2.0, 0.5, "mixed", Default::default()).unwrap();

    assert_eq!(fig.series_count(), 4);
    // background, frame, patch, 2 segments, 2 markers, text
    assert_eq!(count(&fig, Region::Graph), 8);

    assert_redraw_stable!(&mut fig, "series/mixed");
    assert_eq!(count(&fig, Region::Graph), 8);
}
