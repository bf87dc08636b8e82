//! This crate provides the numeric side of the cell-cycle charts:
//! validated series, volume interpolants and the quantities derived from them.

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod concentrations;
mod cycles;
mod division;
mod error;
mod interpolant;
mod quantities;
mod validate;

pub use concentrations::CompartmentConcentrations;
pub use cycles::cycle_time_axis;
pub use division::{
    detect_division_index, hold_penultimate, hold_window, DivisionWindow, VolumeCorrection,
    SIMULATED_DIVISION_WINDOW,
};
pub use error::{Result, SeriesError};
pub use interpolant::{sample, Interpolant, LinearInterpolant};
pub use quantities::{abundance_ratio, concentrations, cytoplasmic_volumes, volume_ratio};
pub use validate::{ensure_len, trim_trailing, zip_series};

/// A plottable line of `(x, y)` points
pub type Series = Vec<(f64, f64)>;
