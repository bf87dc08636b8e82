//! Correction of the division transient in interpolated volumes.
//!
//! The simulation applies nuclear division at a single time step, but the
//! interpolated volumes smear that step over a few samples. Holding those
//! samples at the last pre-division value removes the resulting spike from
//! the concentration charts.

use std::ops::Range;

use crate::{Result, SeriesError};

/// The samples which the reference simulation's division event smears over
pub const SIMULATED_DIVISION_WINDOW: Range<usize> = 181..184;

/// Which samples of the nuclear volume to hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivisionWindow {
    /// Leave the volumes untouched
    Off,
    /// Hold exactly these indices at the value preceding the range
    Fixed(Range<usize>),
    /// Hold `width` samples from the start of the detected division transient
    Detect {
        /// Number of samples to hold
        width: usize,
    },
}

impl DivisionWindow {
    /// Resolve to the concrete indices to hold for the given volumes
    pub fn resolve(&self, volumes: &[f64]) -> Option<Range<usize>> {
        match self {
            DivisionWindow::Off => None,
            DivisionWindow::Fixed(r) => Some(r.clone()),
            DivisionWindow::Detect { width } => {
                let start = detect_division_index(volumes)?;
                Some(start..start.saturating_add(*width).min(volumes.len()))
            }
        }
    }
}

/// How to correct the sampled volumes before computing concentrations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeCorrection {
    /// Samples of the nuclear volume to hold at the pre-division value
    pub nuclear_window: DivisionWindow,
    /// Replace the penultimate cytoplasmic volume with the one before it
    pub hold_cytoplasmic_tail: bool,
}

impl Default for VolumeCorrection {
    fn default() -> Self {
        Self {
            nuclear_window: DivisionWindow::Detect { width: 3 },
            hold_cytoplasmic_tail: true,
        }
    }
}

impl VolumeCorrection {
    /// No correction at all
    pub fn none() -> Self {
        Self {
            nuclear_window: DivisionWindow::Off,
            hold_cytoplasmic_tail: false,
        }
    }

    /// Correct the nuclear and cytoplasmic volumes in place
    pub fn apply(&self, nuclear: &mut [f64], cytoplasmic: &mut [f64]) -> Result<()> {
        if let Some(window) = self.nuclear_window.resolve(nuclear) {
            debug!("holding nuclear volume over {:?}", window);
            hold_window(nuclear, window)?;
        }
        if self.hold_cytoplasmic_tail && !hold_penultimate(cytoplasmic) {
            warn!("only {} cytoplasmic volumes, tail not held", cytoplasmic.len());
        }

        Ok(())
    }
}

/// A drop counts as division only if it exceeds the median step this many times
const DIVISION_STEP_FACTOR: f64 = 10.0;

/// Index of the first sample of the division transient, if there is one.
///
/// The transient is the largest drop of the volumes, extended backwards over
/// the directly preceding drops which are at least half as large. Volumes
/// without a drop well above the median absolute step have no division.
pub fn detect_division_index(volumes: &[f64]) -> Option<usize> {
    let steps: Vec<f64> = volumes.windows(2).map(|w| w[1] - w[0]).collect();
    let mut magnitudes: Vec<f64> = steps
        .iter()
        .filter(|s| s.is_finite())
        .map(|s| s.abs())
        .collect();
    if magnitudes.is_empty() {
        return None;
    }
    magnitudes.sort_by(|a, b| a.total_cmp(b));
    let mid = magnitudes.len() / 2;
    let median = if magnitudes.len() % 2 == 0 {
        0.5 * (magnitudes[mid - 1] + magnitudes[mid])
    } else {
        magnitudes[mid]
    };

    let mut best: Option<(usize, f64)> = None;
    for (i, step) in steps.iter().enumerate() {
        let drop = -step;
        if !drop.is_finite() || drop <= 0.0 {
            continue;
        }
        match best {
            Some((_, d)) if d >= drop => {}
            _ => best = Some((i, drop)),
        }
    }
    let (mut start, max_drop) = best?;
    if max_drop <= DIVISION_STEP_FACTOR * median {
        debug!("largest drop {} is no division, median step {}", max_drop, median);
        return None;
    }
    while start > 0 && -steps[start - 1] >= 0.5 * max_drop {
        start -= 1;
    }

    // steps[i] lies between samples i and i + 1
    Some(start + 1)
}

/// Set every value in `window` to the value right before it
pub fn hold_window(values: &mut [f64], window: Range<usize>) -> Result<()> {
    if window.is_empty() {
        return Ok(());
    }
    if window.start == 0 || window.end > values.len() {
        return Err(SeriesError::WindowOutOfBounds {
            start: window.start,
            end: window.end,
            len: values.len(),
        });
    }
    let held = values[window.start - 1];
    values[window].iter_mut().for_each(|v| *v = held);

    Ok(())
}

/// Replace the second to last value with the third to last.
/// Returns false if there are fewer than three values.
pub fn hold_penultimate(values: &mut [f64]) -> bool {
    let n = values.len();
    if n < 3 {
        return false;
    }
    values[n - 2] = values[n - 3];

    true
}
