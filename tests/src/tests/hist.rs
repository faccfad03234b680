use fxplot::data::Domain;
use fxplot::hist::BinEdges;
use fxplot::options::{HistOptions, OptValue, Options};
use fxplot::render::{Primitive, Region};
use fxplot::{Error, Figure, SeriesId};
use fxplot_svg::SvgSurface;

use crate::{assert_redraw_stable, count, fig_small};

const SAMPLES: [f64; 7] = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 5.0];

fn heights(fig: &Figure<SvgSurface>, ids: &[SeriesId]) -> Vec<f64> {
    ids.iter()
        .map(|id| fig.series(*id).unwrap().data()[2].y)
        .collect()
}

fn dom(lo: f64, hi: f64) -> Option<Domain> {
    Some(Domain::new(lo, hi).unwrap())
}

#[test]
fn hist_two_bins() {
    let mut fig = fig_small();
    let opts = HistOptions::default().with_nbins(2).with_range(0.0, 10.0);
    let ids = fig.hist(&[1.0, 2.0, 3.0, 8.0, 9.0], opts).unwrap();

    assert_eq!(heights(&fig, &ids), vec![3.0, 2.0]);
    assert_eq!(fig.xlim(), dom(0.0, 10.0));
    assert_eq!(fig.ylim(), dom(0.0, 3.0));

    assert_redraw_stable!(&mut fig, "hist/two-bins");
}

#[test]
fn hist_halfopen() {
    let mut fig = fig_small();
    let opts = HistOptions::default()
        .with_nbins(4)
        .with_binedges(BinEdges::HalfOpen);
    let ids = fig.hist(&SAMPLES, opts).unwrap();

    // the last bin is closed and holds the maximum
    assert_eq!(heights(&fig, &ids), vec![1.0, 2.0, 3.0, 1.0]);
    assert_eq!(fig.xlim(), dom(1.0, 5.0));
    assert_eq!(fig.ylim(), dom(0.0, 3.0));
    // background, frame and bars
    assert_eq!(count(&fig, Region::Graph), 6);

    assert_redraw_stable!(&mut fig, "hist/halfopen");
}

#[test]
fn hist_strict_drops_edge_samples() {
    let mut fig = fig_small();
    let opts = HistOptions::default().with_nbins(4);
    let ids = fig.hist(&SAMPLES, opts).unwrap();

    // every sample sits on an edge of 1, 2, 3, 4, 5
    assert_eq!(heights(&fig, &ids), vec![0.0; 4]);
}

#[test]
fn hist_from_pairs() {
    let mut fig = fig_small();
    let opts = HistOptions::from_pairs([
        ("nBins", OptValue::from(4)),
        ("binEdges", "half-open".into()),
        ("color", "red".into()),
        ("unknown", true.into()),
    ])
    .unwrap();
    let ids = fig.hist(&SAMPLES, opts).unwrap();
    assert_eq!(ids.len(), 4);

    let rec = fig.surface().recorder();
    for id in &ids {
        let series = fig.series(*id).unwrap();
        let [art] = series.artifacts() else {
            panic!("expected a single patch");
        };
        let Some(Primitive::Path(path)) = rec.get(*art) else {
            panic!("expected a path");
        };
        assert_eq!(path.fill.as_ref().map(|p| p.color().html()), Some("#ff0000".to_string()));
    }

    assert_redraw_stable!(&mut fig, "hist/from-pairs");
}

#[test]
fn hist_invalid_options() {
    assert!(matches!(
        HistOptions::from_pairs([("nbins", 0)]),
        Err(Error::InvalidOption { .. })
    ));
    assert!(matches!(
        HistOptions::from_pairs([("binedges", "loose")]),
        Err(Error::InvalidOption { .. })
    ));

    let mut fig = fig_small();
    assert_eq!(
        fig.hist(&[], HistOptions::default()),
        Err(Error::EmptySeries)
    );
    assert!(matches!(
        HistOptions::from_pairs([("nbins", 1e18)]),
        Err(Error::InvalidOption { .. })
    ));
    let huge = HistOptions::default().with_nbins(usize::MAX);
    assert!(matches!(
        fig.hist(&SAMPLES, huge),
        Err(Error::InvalidOption { .. })
    ));
    let zero = HistOptions::default().with_range(1.0, 1.0);
    assert!(matches!(
        fig.hist(&SAMPLES, zero),
        Err(Error::InvalidOption { .. })
    ));
    assert_eq!(fig.series_count(), 0);
    assert_eq!(fig.xlim(), None);
}

#[test]
fn hist_over_line() {
    let mut fig = fig_small();
    fig.plot(&[0.0, 6.0], &[0.0, 5.0], Default::default())
        .unwrap();
    let opts = HistOptions::default()
        .with_nbins(4)
        .with_binedges(BinEdges::HalfOpen);
    fig.hist(&SAMPLES, opts).unwrap();

    assert_eq!(fig.xlim(), dom(0.0, 6.0));
    assert_eq!(fig.ylim(), dom(0.0, 5.0));
    assert_eq!(fig.series_count(), 5);

    assert_redraw_stable!(&mut fig, "hist/over-line");
}
