//! A synthetic cell cycle standing in for the output of the simulation.

use std::f64::consts::PI;

use cell_series::{LinearInterpolant, Result};

/// Number of samples per cycle
pub(crate) const CYCLE_LEN: usize = 200;
/// Duration of one cycle in minutes
pub(crate) const CYCLE_MINUTES: f64 = 120.0;
/// First sample after nuclear division
pub(crate) const DIVISION_INDEX: usize = 181;
/// The simulation leaves the last samples of a cycle invalid
pub(crate) const TRAILING_INVALID: usize = 2;
/// Nuclear volumes are only known at every n-th sample and interpolated in between
const NUCLEAR_KNOT_STRIDE: usize = 4;

const INITIAL_CELL_VOLUME: f64 = 1000.0;
const NUCLEAR_FRACTION: f64 = 0.08;
const INITIAL_ABUNDANCE: f64 = 5000.0;

/// Time points, abundances and volumes of one cell cycle
#[derive(Debug, Clone)]
pub(crate) struct Cycle {
    pub(crate) time: Vec<f64>,
    pub(crate) cytoplasmic_abundance: Vec<f64>,
    pub(crate) nuclear_abundance: Vec<f64>,
    pub(crate) cell_volume: Vec<f64>,
    pub(crate) nuclear_volume: Vec<f64>,
}

impl Cycle {
    /// Simulate one cycle in which the cell and its protein content double
    /// and the nucleus divides at `DIVISION_INDEX`
    pub(crate) fn simulate() -> Self {
        let dt = CYCLE_MINUTES / (CYCLE_LEN - 1) as f64;
        let time: Vec<f64> = (0..CYCLE_LEN).map(|i| i as f64 * dt).collect();
        let growth = |t: f64| (t / CYCLE_MINUTES * std::f64::consts::LN_2).exp();

        let cell_volume: Vec<f64> = time.iter().map(|t| INITIAL_CELL_VOLUME * growth(*t)).collect();
        let nuclear_volume: Vec<f64> = cell_volume
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let nuc = NUCLEAR_FRACTION * v;
                if i >= DIVISION_INDEX {
                    0.5 * nuc
                } else {
                    nuc
                }
            })
            .collect();

        let mut cytoplasmic_abundance = Vec::with_capacity(CYCLE_LEN);
        let mut nuclear_abundance = Vec::with_capacity(CYCLE_LEN);
        for (i, t) in time.iter().enumerate() {
            let total = INITIAL_ABUNDANCE * growth(*t);
            // nuclear import oscillates over the cycle
            let nuclear_share = 0.3 + 0.1 * (2.0 * PI * t / CYCLE_MINUTES).sin();
            let mut nuc = nuclear_share * total;
            if i >= DIVISION_INDEX {
                nuc *= 0.5;
            }
            cytoplasmic_abundance.push(total * (1.0 - nuclear_share));
            nuclear_abundance.push(nuc);
        }
        for i in CYCLE_LEN - TRAILING_INVALID..CYCLE_LEN {
            cytoplasmic_abundance[i] = f64::NAN;
            nuclear_abundance[i] = f64::NAN;
        }
        debug!("simulated a cycle of {} samples", CYCLE_LEN);

        Self {
            time,
            cytoplasmic_abundance,
            nuclear_abundance,
            cell_volume,
            nuclear_volume,
        }
    }

    /// Number of samples not invalidated by the simulation
    #[inline(always)]
    pub(crate) fn valid_len(&self) -> usize {
        self.time.len() - TRAILING_INVALID
    }

    /// Interpolated cell volume
    pub(crate) fn cell_volume_fn(&self) -> Result<LinearInterpolant> {
        LinearInterpolant::new(self.time.clone(), self.cell_volume.clone())
    }

    /// Interpolated nuclear volume, from a coarser set of knots which smears
    /// the division over a few samples
    pub(crate) fn nuclear_volume_fn(&self) -> Result<LinearInterpolant> {
        let (times, values): (Vec<f64>, Vec<f64>) = self
            .time
            .iter()
            .zip(self.nuclear_volume.iter())
            .step_by(NUCLEAR_KNOT_STRIDE)
            .map(|(t, v)| (*t, *v))
            .unzip();
        LinearInterpolant::new(times, values)
    }

    /// The valid abundances of `num_cycles` consecutive cycles, concatenated
    pub(crate) fn repeated(&self, num_cycles: usize) -> (Vec<f64>, Vec<f64>) {
        let n = self.valid_len();
        let cyt = self.cytoplasmic_abundance[..n].repeat(num_cycles);
        let nuc = self.nuclear_abundance[..n].repeat(num_cycles);

        (cyt, nuc)
    }
}
