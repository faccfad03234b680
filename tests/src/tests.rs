use fxplot::render::Region;

use crate::*;

mod axes;
mod hist;
mod series;

#[test]
fn empty() {
    let mut fig = fig_small();
    assert_eq!(fig.xlim(), None);
    // background and frame
    assert_eq!(count(&fig, Region::Graph), 2);
    assert_eq!(count(&fig, Region::XAxis), 0);

    assert_redraw_stable!(&mut fig, "empty");
}

#[test]
fn empty_title() {
    let mut fig = fig_small();
    fig.set_title("Title");
    assert_eq!(texts(&fig, Region::Title), vec!["Title"]);

    assert_redraw_stable!(&mut fig, "empty-title");
}

#[test]
fn wide_figure_layout() {
    let fig = fig_wide();
    let graph = fig.layout().region(Region::Graph);
    assert_eq!((graph.left(), graph.right()), (80.0, 800.0));
    assert_eq!((graph.top(), graph.bottom()), (30.0, 240.0));

    let svg = fig_to_svg(&fig);
    assert!(svg.contains("viewBox=\"0 0 800 300\""));
    assert!(svg.contains("translate(80 30)"));
}

#[test]
fn full_figure() {
    let mut fig = fig_small();
    fig.set_title("Squares and roots");
    fig.set_xlabel("x");
    fig.set_ylabel("f(x)");
    fig.set_grid('x', true).unwrap();
    fig.set_grid('y', true).unwrap();

    let x: Vec<f64> = (0..=10).map(|i| i as f64).collect();
    let sq: Vec<f64> = x.iter().map(|x| x * x).collect();
    let rt: Vec<f64> = x.iter().map(|x| 10.0 * x.sqrt()).collect();
    fig.plot(&x, &sq, Default::default()).unwrap();
    fig.scatter(&x, &rt, Default::default()).unwrap();
    fig.text(5.0, 50.0, "crossing", Default::default()).unwrap();

    assert_eq!(fig.xlim(), Some((0.0, 10.0).try_into().unwrap()));
    assert_eq!(fig.ylim(), Some((0.0, 100.0).try_into().unwrap()));

    assert_redraw_stable!(&mut fig, "full-figure");
}
