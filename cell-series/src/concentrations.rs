use nalgebra::DVector;

use crate::{
    ensure_len, quantities::concentrations, sample, trim_trailing, Interpolant, Result,
    SeriesError, VolumeCorrection,
};

/// Cytoplasmic and nuclear protein concentrations over one cycle
#[derive(Debug, Clone)]
pub struct CompartmentConcentrations {
    /// The time points, with the trailing invalid samples removed
    pub time: Vec<f64>,
    /// Cytoplasmic abundance over cytoplasmic volume
    pub cytoplasmic: DVector<f64>,
    /// Nuclear abundance over nuclear volume
    pub nuclear: DVector<f64>,
    /// Nuclear over cytoplasmic concentration
    pub ratio: DVector<f64>,
}

impl CompartmentConcentrations {
    /// Compute the concentrations of both compartments by sampling the volume
    /// interpolants at every time point.
    ///
    /// # Arguments:
    /// trailing_invalid: Number of samples at the end of every input which
    /// the simulation leaves invalid, these are dropped before anything else
    /// correction: How to suppress the division transient of the volumes
    pub fn compute<C, N>(
        time: &[f64],
        cytoplasmic_abundance: &[f64],
        nuclear_abundance: &[f64],
        cell_volume: &C,
        nuclear_volume: &N,
        trailing_invalid: usize,
        correction: &VolumeCorrection,
    ) -> Result<Self>
    where
        C: Interpolant + ?Sized,
        N: Interpolant + ?Sized,
    {
        ensure_len("cytoplasmic_abundance", time.len(), cytoplasmic_abundance)?;
        ensure_len("nuclear_abundance", time.len(), nuclear_abundance)?;

        let time = trim_trailing(time, trailing_invalid)?;
        if time.is_empty() {
            return Err(SeriesError::Empty { name: "time" });
        }
        let cyt_ab = trim_trailing(cytoplasmic_abundance, trailing_invalid)?;
        let nuc_ab = trim_trailing(nuclear_abundance, trailing_invalid)?;

        let cell_vols = sample(cell_volume, time);
        let mut nuc_vols = sample(nuclear_volume, time);
        let mut cyt_vols: Vec<f64> = cell_vols
            .iter()
            .zip(nuc_vols.iter())
            .map(|(c, n)| c - n)
            .collect();
        correction.apply(&mut nuc_vols, &mut cyt_vols)?;

        let cytoplasmic = concentrations(cyt_ab, &cyt_vols)?;
        let nuclear = concentrations(nuc_ab, &nuc_vols)?;
        let ratio = nuclear.component_div(&cytoplasmic);
        debug!(
            "computed {} concentrations, dropped {} trailing samples",
            ratio.len(),
            trailing_invalid
        );

        Ok(Self {
            time: time.to_vec(),
            cytoplasmic,
            nuclear,
            ratio,
        })
    }

    /// Number of samples
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether there are no samples
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use round::round;

    use super::*;
    use crate::{DivisionWindow, LinearInterpolant, SIMULATED_DIVISION_WINDOW};

    #[test]
    fn trailing_invalid_samples_are_dropped() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let time: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let mut cyt = vec![40.0; 10];
        let mut nuc = vec![10.0; 10];
        cyt[8] = f64::NAN;
        cyt[9] = f64::NAN;
        nuc[9] = f64::NAN;

        let con = CompartmentConcentrations::compute(
            &time,
            &cyt,
            &nuc,
            &|_t: f64| 10.0,
            &|_t: f64| 2.0,
            2,
            &VolumeCorrection::none(),
        )
        .unwrap();

        assert_eq!(con.len(), 8);
        assert_eq!(con.cytoplasmic.len(), 8);
        assert_eq!(con.nuclear.len(), 8);
        assert_eq!(con.ratio.len(), 8);
        assert!(con.cytoplasmic.iter().all(|c| *c == 5.0));
        assert!(con.nuclear.iter().all(|c| *c == 5.0));
        assert!(con.ratio.iter().all(|r| *r == 1.0));
    }

    #[test]
    fn too_many_trailing_samples() {
        let time = [0.0, 1.0];
        let err = CompartmentConcentrations::compute(
            &time,
            &[1.0, 1.0],
            &[1.0, 1.0],
            &|_t: f64| 2.0,
            &|_t: f64| 1.0,
            3,
            &VolumeCorrection::none(),
        )
        .unwrap_err();
        assert_eq!(err, SeriesError::TrailingInvalid { trailing: 3, len: 2 });

        let err = CompartmentConcentrations::compute(
            &time,
            &[1.0, 1.0],
            &[1.0, 1.0],
            &|_t: f64| 2.0,
            &|_t: f64| 1.0,
            2,
            &VolumeCorrection::none(),
        )
        .unwrap_err();
        assert_eq!(err, SeriesError::Empty { name: "time" });
    }

    #[test]
    fn simulated_division_window() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let n = 200;
        let time: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let cell = LinearInterpolant::new(time.clone(), vec![1000.0; n]).unwrap();
        // nuclear volume drops from 200 to 100 over the samples 181..184
        let nuc_vals: Vec<f64> = (0..n)
            .map(|i| match i {
                0..=180 => 200.0,
                181 => 175.0,
                182 => 150.0,
                183 => 125.0,
                _ => 100.0,
            })
            .collect();
        let nucleus = LinearInterpolant::new(time.clone(), nuc_vals).unwrap();

        let cyt_ab = vec![800.0; n];
        let nuc_ab = vec![400.0; n];
        let correction = VolumeCorrection {
            nuclear_window: DivisionWindow::Fixed(SIMULATED_DIVISION_WINDOW),
            hold_cytoplasmic_tail: false,
        };
        let con =
            CompartmentConcentrations::compute(&time, &cyt_ab, &nuc_ab, &cell, &nucleus, 0, &correction)
                .unwrap();

        assert_eq!(con.len(), n);
        assert!(con.cytoplasmic.iter().all(|c| *c >= 0.0));
        assert!(con.nuclear.iter().all(|c| *c >= 0.0));
        // nuclear volume held at 200 in the window, so the concentration is too
        for i in 180..=183 {
            assert_eq!(con.nuclear[i], 2.0);
        }
        assert_eq!(con.nuclear[184], 4.0);
        assert_eq!(round(con.ratio[0], 6), 2.0);
    }

    #[test]
    fn detected_window_matches_fixed_one() {
        let n = 200;
        let time: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let nuc_vals: Vec<f64> = (0..n).map(|i| if i < 181 { 200.0 } else { 100.0 }).collect();
        let nucleus = LinearInterpolant::new(time.clone(), nuc_vals).unwrap();
        let ab = vec![1.0; n];

        let detected = CompartmentConcentrations::compute(
            &time,
            &ab,
            &ab,
            &|_t: f64| 1000.0,
            &nucleus,
            0,
            &VolumeCorrection::default(),
        )
        .unwrap();
        let fixed = CompartmentConcentrations::compute(
            &time,
            &ab,
            &ab,
            &|_t: f64| 1000.0,
            &nucleus,
            0,
            &VolumeCorrection {
                nuclear_window: DivisionWindow::Fixed(SIMULATED_DIVISION_WINDOW),
                hold_cytoplasmic_tail: true,
            },
        )
        .unwrap();

        assert_eq!(detected.nuclear, fixed.nuclear);
        assert_eq!(detected.cytoplasmic, fixed.cytoplasmic);
    }

    #[test]
    fn growth_without_division_is_not_corrected() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let n = 200;
        let time: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let nucleus = |t: f64| 100.0 * (t / 199.0 * std::f64::consts::LN_2).exp();
        let ab = vec![50.0; n];

        let corrected = CompartmentConcentrations::compute(
            &time,
            &ab,
            &ab,
            &|_t: f64| 1000.0,
            &nucleus,
            0,
            &VolumeCorrection::default(),
        )
        .unwrap();
        let raw = CompartmentConcentrations::compute(
            &time,
            &ab,
            &ab,
            &|_t: f64| 1000.0,
            &nucleus,
            0,
            &VolumeCorrection {
                nuclear_window: DivisionWindow::Off,
                hold_cytoplasmic_tail: true,
            },
        )
        .unwrap();

        assert_eq!(corrected.nuclear, raw.nuclear);
        assert_eq!(corrected.ratio, raw.ratio);
    }
}
