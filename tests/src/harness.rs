use std::path::{Path, PathBuf};

use fxplot::Figure;
use fxplot_svg::SvgSurface;

pub fn fig_to_svg(fig: &Figure<SvgSurface>) -> String {
    let mut buf = Vec::new();
    fig.surface().write(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn actual_file_path(name: &str) -> PathBuf {
    let tests_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(tests_dir)
        .join("actual")
        .join(format!("{}.svg", name))
}

fn diff_file_path(name: &str) -> PathBuf {
    let tests_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(tests_dir)
        .join("actual")
        .join(format!("{}.svg.diff", name))
}

/// Redraw `fig` and check that the SVG output did not change.
///
/// On failure, both renders and their unified diff are written under `actual/`.
pub fn check_redraw_stable(fig: &mut Figure<SvgSurface>, name: &str) -> Result<(), String> {
    let before = fig_to_svg(fig);
    fig.redraw();
    let after = fig_to_svg(fig);

    let actual_file = actual_file_path(name);
    let diff_file = diff_file_path(name);

    if before != after {
        let diff = similar::TextDiff::from_lines(before.as_str(), after.as_str());
        let udiff = diff
            .unified_diff()
            .header("before redraw", "after redraw")
            .to_string();

        std::fs::create_dir_all(actual_file.parent().unwrap()).unwrap();
        std::fs::write(&actual_file, &after).unwrap();
        std::fs::write(&diff_file, &udiff).unwrap();

        Err(format!(
            "SVG changed on redraw\n  Actual figure: {:?}\n           Diff: {:?}\n{}",
            actual_file, diff_file, udiff
        ))
    } else {
        for file in [&actual_file, &diff_file] {
            if std::fs::exists(file).unwrap() {
                std::fs::remove_file(file).unwrap();
            }
        }
        Ok(())
    }
}

macro_rules! assert_redraw_stable {
    ($fig:expr, $name:expr) => {
        if let Err(msg) = $crate::harness::check_redraw_stable($fig, $name) {
            panic!("{}", msg);
        }
    };
}

pub(crate) use assert_redraw_stable;
