use std::{fs, path::Path};

use plotters::{coord::Shift, prelude::*};

use crate::PlotError;

fn ensure_parent(path: &Path) -> Result<(), PlotError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Draw onto a white png image of `dims` pixels and write it to `path`.
/// Missing parent directories are created.
pub fn to_png<P, F, T>(path: P, dims: (u32, u32), draw: F) -> Result<T, PlotError>
where
    P: AsRef<Path>,
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<T, PlotError>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let root = BitMapBackend::new(path, dims).into_drawing_area();
    root.fill(&WHITE)?;
    let out = draw(&root)?;
    root.present()?;
    info!("successfully plotted to {}", path.display());

    Ok(out)
}

/// Draw onto a white svg document of `dims` pixels and write it to `path`.
/// Missing parent directories are created.
pub fn to_svg<P, F, T>(path: P, dims: (u32, u32), draw: F) -> Result<T, PlotError>
where
    P: AsRef<Path>,
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> Result<T, PlotError>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let root = SVGBackend::new(path, dims).into_drawing_area();
    root.fill(&WHITE)?;
    let out = draw(&root)?;
    root.present()?;
    info!("successfully plotted to {}", path.display());

    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn svg_without_text_is_written() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let path = env::temp_dir().join("cell-plot-test").join("empty.svg");
        let n = to_svg(&path, (64, 48), |area| {
            area.draw(&Rectangle::new([(4, 4), (20, 20)], RED.filled()))?;
            Ok(42)
        })
        .unwrap();
        assert_eq!(n, 42);

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn errors_from_draw_are_passed_on() {
        let path = env::temp_dir().join("cell-plot-test").join("failing.svg");
        let res: Result<(), PlotError> = to_svg(&path, (64, 48), |_| {
            Err(PlotError::Drawing("nope".to_string()))
        });
        assert!(matches!(res, Err(PlotError::Drawing(msg)) if msg == "nope"));
    }
}
