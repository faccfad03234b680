#![cfg(test)]

use fxplot::render::Region;
use fxplot::{Figure, FigureConfig};
use fxplot_svg::SvgSurface;

mod harness;
mod tests;

pub(crate) use harness::{assert_redraw_stable, fig_to_svg};

fn fig_small() -> Figure<SvgSurface> {
    let config = FigureConfig::default().with_size(400.0, 300.0);
    Figure::with_config(SvgSurface::new(), config)
}

fn fig_wide() -> Figure<SvgSurface> {
    let config = FigureConfig::default().with_size(800.0, 300.0);
    Figure::with_config(SvgSurface::new(), config)
}

/// Number of primitives in a region
fn count(fig: &Figure<SvgSurface>, region: Region) -> usize {
    fig.surface().recorder().count(region)
}

/// Texts of a region, in creation order
fn texts(fig: &Figure<SvgSurface>, region: Region) -> Vec<String> {
    fig.surface()
        .recorder()
        .texts(region)
        .into_iter()
        .map(str::to_string)
        .collect()
}
