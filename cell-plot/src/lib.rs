//! Charts of simulated cytoplasmic and nuclear protein abundances, volumes
//! and concentrations over the cell cycle.
//!
//! All charts are drawn onto a `plotters` drawing area owned by the caller,
//! see [`to_png`] and [`to_svg`] for writing them to files.

#[macro_use]
extern crate log;

mod error;
mod figure;
mod output;
mod renderer;
mod style;

pub use cell_series::Series;
pub use error::PlotError;
pub use figure::{Figure, Trace};
pub use output::{to_png, to_svg};
pub use renderer::ChartRenderer;
pub use style::{ChartStyle, DARK_RED, ORANGE};
