use fxplot::Error;
use fxplot::data::Domain;
use fxplot::render::Region;

use crate::{assert_redraw_stable, count, fig_small, texts};

fn dom(lo: f64, hi: f64) -> Option<Domain> {
    Some(Domain::new(lo, hi).unwrap())
}

fn line(fig: &mut fxplot::Figure<fxplot_svg::SvgSurface>) {
    fig.plot(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], Default::default())
        .unwrap();
}

#[test]
fn axes_default() {
    let mut fig = fig_small();
    line(&mut fig);

    assert_eq!(fig.xlim(), dom(1.0, 3.0));
    assert_eq!(texts(&fig, Region::XAxis), vec!["1", "2", "3"]);
    assert_eq!(texts(&fig, Region::YAxis), vec!["1", "2", "3"]);

    assert_redraw_stable!(&mut fig, "axes/default");
}

#[test]
fn axes_titles() {
    let mut fig = fig_small();
    line(&mut fig);
    fig.set_xlabel("x axis");
    fig.set_label('y', "y axis").unwrap();

    assert_eq!(texts(&fig, Region::XAxis).last().unwrap(), "x axis");
    assert_eq!(texts(&fig, Region::YAxis).last().unwrap(), "y axis");

    assert_redraw_stable!(&mut fig, "axes/titles");
}

#[test]
fn axes_grids() {
    let mut fig = fig_small();
    line(&mut fig);
    let without = count(&fig, Region::Graph);
    fig.set_grid('x', true).unwrap();
    fig.set_grid('Y', true).unwrap();
    assert_eq!(count(&fig, Region::Graph), without + 2);

    assert_redraw_stable!(&mut fig, "axes/grids");

    fig.set_grid('x', false).unwrap();
    assert_eq!(count(&fig, Region::Graph), without + 1);
}

#[test]
fn axes_sequential_plots_cover_all_data() {
    let mut fig = fig_small();
    fig.plot(&[0.0, 5.0], &[0.0, 1.0], Default::default())
        .unwrap();
    fig.plot(&[3.0, 10.0], &[0.0, 1.0], Default::default())
        .unwrap();

    let x = fig.xlim().unwrap();
    assert!(x.lo() <= 0.0 && x.hi() >= 10.0);
    let ticks = fig.ticks('x').unwrap().unwrap();
    assert_eq!(ticks.values().first(), Some(&x.lo()));
    assert_eq!(ticks.values().last(), Some(&x.hi()));
}

#[test]
fn axes_decimal_ticks() {
    let mut fig = fig_small();
    fig.scatter(&[0.12, 0.34], &[-0.5, 0.25], Default::default())
        .unwrap();

    assert_eq!(fig.xlim(), dom(0.1, 0.4));
    assert_eq!(texts(&fig, Region::XAxis), vec!["0.1", "0.2", "0.3", "0.4"]);
    assert_eq!(fig.ylim(), dom(-0.5, 0.3));

    assert_redraw_stable!(&mut fig, "axes/decimal-ticks");
}

#[test]
fn axes_large_values_are_scientific() {
    let mut fig = fig_small();
    fig.plot(&[0.0, 1.0], &[0.0, 300_000.0], Default::default())
        .unwrap();

    assert_eq!(fig.ylim(), dom(0.0, 300_000.0));
    let labels = texts(&fig, Region::YAxis);
    assert_eq!(labels.last().unwrap(), "3.00e5");
}

#[test]
fn axes_explicit_limits() {
    let mut fig = fig_small();
    line(&mut fig);

    fig.set_xlim(0.0, 100.0).unwrap();
    assert_eq!(fig.xlim(), dom(0.0, 100.0));
    fig.set_lim('x', 3.0, 1.0).unwrap();
    assert_eq!(fig.xlim(), dom(1.0, 3.0));

    // data grows from the explicit limits
    fig.scatter(&[4.0], &[2.0], Default::default()).unwrap();
    let x = fig.xlim().unwrap();
    assert_eq!((x.lo(), x.hi()), (1.0, 4.0));

    assert_redraw_stable!(&mut fig, "axes/explicit-limits");
}

#[test]
fn axes_selector_errors() {
    let mut fig = fig_small();
    line(&mut fig);
    assert_eq!(fig.set_lim('z', 0.0, 1.0), Err(Error::InvalidAxisSelector('z')));
    assert_eq!(fig.set_ylim(1.0, 1.0), Err(Error::DegenerateDomain(1.0)));
    assert!(matches!(fig.ticks('r'), Err(Error::InvalidAxisSelector('r'))));
    assert_eq!(fig.ylim(), dom(1.0, 3.0));
}

#[test]
fn axes_single_value_is_widened() {
    let mut fig = fig_small();
    fig.scatter(&[5.0], &[0.0], Default::default()).unwrap();

    assert_eq!(fig.xlim(), dom(4.0, 6.0));
    assert_eq!(fig.ylim(), dom(-1.0, 1.0));

    assert_redraw_stable!(&mut fig, "axes/single-value");
}
