//! Drawing module
//!
//! This module converts the axes model into rendering primitives for a rendering surface.
//! The geometry is computed by the pure functions of [`axis`] and [`series`];
//! only the adapter functions of this module issue primitives to a [`Surface`].

pub mod axis;
pub mod series;

use crate::axes::Axes;
use crate::geom;
use crate::render::{ArtifactId, Primitive, Region, Surface};
use crate::scale::{Scale, ScaleXy};
use crate::series::Series;
use crate::style::Theme;

/// Scales mapping data to a graph region of `size`, once both axes have a domain
pub fn graph_scales(axes: &Axes, size: geom::Size) -> Option<ScaleXy> {
    Some(ScaleXy {
        x: Scale::x(axes.x().domain()?, size.width()),
        y: Scale::y(axes.y().domain()?, size.height()),
    })
}

fn create_all<S>(surface: &mut S, region: Region, prims: &[Primitive]) -> Vec<ArtifactId>
where
    S: Surface,
{
    prims.iter().map(|p| surface.create(region, p)).collect()
}

fn remove_all<S>(surface: &mut S, ids: Vec<ArtifactId>)
where
    S: Surface,
{
    for id in ids {
        surface.remove(id);
    }
}

/// Render a series in the graph region, replacing the artifacts of its previous render
pub(crate) fn render_series<S>(surface: &mut S, series: &mut Series, scales: &ScaleXy)
where
    S: Surface,
{
    remove_all(surface, series.replace_artifacts(Vec::new()));
    let y_floor = scales.y.domain().lo();
    let prims = series::primitives(series.plot(), scales, y_floor);
    let ids = create_all(surface, Region::Graph, &prims);
    series.replace_artifacts(ids);
}

/// Draw the title, replacing the previous one
pub(crate) fn draw_title<S>(surface: &mut S, axes: &mut Axes, theme: &Theme)
where
    S: Surface,
{
    remove_all(surface, axes.replace_title_artifacts(Vec::new()));
    let size = surface.region_size(Region::Title);
    let prims = axis::title(axes.title(), size, theme);
    let ids = create_all(surface, Region::Title, &prims);
    axes.replace_title_artifacts(ids);
}

/// Redraw the whole figure:
///  1. clear the graph and axis regions
///  2. regenerate the ticks from the working domains
///  3. draw the title and the axis decorations
///  4. render every series, in insertion order
pub(crate) fn redraw<S>(surface: &mut S, axes: &mut Axes, theme: &Theme)
where
    S: Surface,
{
    for region in [Region::Graph, Region::XAxis, Region::YAxis] {
        surface.clear(region);
    }

    axes.update_ticks();

    draw_title(surface, axes, theme);
    let graph_size = surface.region_size(Region::Graph);
    let prims = axis::graph(axes.x(), axes.y(), graph_size, theme);
    create_all(surface, Region::Graph, &prims);
    let prims = axis::x_axis(axes.x(), surface.region_size(Region::XAxis), theme);
    create_all(surface, Region::XAxis, &prims);
    let prims = axis::y_axis(axes.y(), surface.region_size(Region::YAxis), theme);
    create_all(surface, Region::YAxis, &prims);

    let scales = graph_scales(axes, graph_size);
    let mut artifacts = 0;
    for series in axes.series_mut().iter_mut() {
        match &scales {
            Some(scales) => render_series(surface, series, scales),
            // only reachable with a single-axis domain: nothing can be mapped
            None => remove_all(surface, series.replace_artifacts(Vec::new())),
        }
        artifacts += series.artifacts().len();
    }
    log::trace!(
        "redraw: {} series, {} series artifacts",
        axes.series().len(),
        artifacts
    );
}
