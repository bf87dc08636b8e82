use crate::{ensure_len, Result, SeriesError};

/// Maps a point in time to an interpolated volume
pub trait Interpolant {
    /// Evaluate at time `t`
    fn at(&self, t: f64) -> f64;
}

impl<F> Interpolant for F
where
    F: Fn(f64) -> f64,
{
    #[inline(always)]
    fn at(&self, t: f64) -> f64 {
        self(t)
    }
}

/// Evaluate `interpolant` at every point of `time`
pub fn sample<I: Interpolant + ?Sized>(interpolant: &I, time: &[f64]) -> Vec<f64> {
    time.iter().map(|t| interpolant.at(*t)).collect()
}

/// Piecewise linear interpolation between knots.
/// Outside of the knots the first or last value is held,
/// a non-finite time evaluates to NaN.
#[derive(Debug, Clone)]
pub struct LinearInterpolant {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl LinearInterpolant {
    /// Create a new instance from knot times and values
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if times.is_empty() {
            return Err(SeriesError::Empty { name: "knot_times" });
        }
        ensure_len("knot_values", times.len(), &values)?;
        if let Some(index) = times.iter().position(|t| !t.is_finite()) {
            return Err(SeriesError::NonFiniteKnot { index });
        }
        if let Some(i) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SeriesError::KnotsNotIncreasing { index: i + 1 });
        }

        Ok(Self { times, values })
    }

    /// The knot times
    #[inline(always)]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The knot values
    #[inline(always)]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Interpolant for LinearInterpolant {
    fn at(&self, t: f64) -> f64 {
        if !t.is_finite() {
            return f64::NAN;
        }
        let last = self.times.len() - 1;
        if t <= self.times[0] {
            return self.values[0];
        }
        if t >= self.times[last] {
            return self.values[last];
        }
        // first knot strictly after t, guaranteed to be in 1..=last here
        let hi = self.times.partition_point(|k| *k <= t);
        let lo = hi - 1;
        let frac = (t - self.times[lo]) / (self.times[hi] - self.times[lo]);

        self.values[lo] + frac * (self.values[hi] - self.values[lo])
    }
}

#[cfg(test)]
mod tests {
    use round::round;

    use super::*;

    #[test]
    fn closures_are_interpolants() {
        let f = |t: f64| 2.0 * t;
        assert_eq!(sample(&f, &[0.0, 1.5, 3.0]), vec![0.0, 3.0, 6.0]);
    }

    #[test]
    fn linear_interpolant() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let li = LinearInterpolant::new(vec![0.0, 10.0, 20.0], vec![100.0, 200.0, 150.0]).unwrap();
        assert_eq!(li.at(0.0), 100.0);
        assert_eq!(li.at(10.0), 200.0);
        assert_eq!(round(li.at(2.5), 6), 125.0);
        assert_eq!(round(li.at(15.0), 6), 175.0);

        // held outside of the knots
        assert_eq!(li.at(-5.0), 100.0);
        assert_eq!(li.at(25.0), 150.0);
    }

    #[test]
    fn linear_interpolant_single_knot() {
        let li = LinearInterpolant::new(vec![3.0], vec![7.0]).unwrap();
        assert_eq!(li.at(0.0), 7.0);
        assert_eq!(li.at(3.0), 7.0);
        assert_eq!(li.at(9.0), 7.0);
    }

    #[test]
    fn linear_interpolant_non_finite_time() {
        let li = LinearInterpolant::new(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]).unwrap();
        assert!(li.at(f64::NAN).is_nan());
        assert!(li.at(f64::INFINITY).is_nan());
        assert!(li.at(f64::NEG_INFINITY).is_nan());
        assert!(sample(&li, &[0.5, f64::NAN])[1].is_nan());
    }

    #[test]
    fn linear_interpolant_rejects_non_finite_knots() {
        assert_eq!(
            LinearInterpolant::new(vec![f64::NAN, 1.0, 2.0], vec![1.0, 2.0, 3.0]).unwrap_err(),
            SeriesError::NonFiniteKnot { index: 0 }
        );
        assert_eq!(
            LinearInterpolant::new(vec![0.0, f64::NAN, 2.0], vec![1.0, 2.0, 3.0]).unwrap_err(),
            SeriesError::NonFiniteKnot { index: 1 }
        );
        assert_eq!(
            LinearInterpolant::new(vec![0.0, 1.0, f64::INFINITY], vec![1.0, 2.0, 3.0]).unwrap_err(),
            SeriesError::NonFiniteKnot { index: 2 }
        );
    }

    #[test]
    fn linear_interpolant_rejects_bad_knots() {
        assert_eq!(
            LinearInterpolant::new(vec![], vec![]).unwrap_err(),
            SeriesError::Empty { name: "knot_times" }
        );
        assert!(matches!(
            LinearInterpolant::new(vec![0.0, 1.0], vec![1.0]),
            Err(SeriesError::LengthMismatch { .. })
        ));
        assert_eq!(
            LinearInterpolant::new(vec![0.0, 1.0, 1.0], vec![1.0, 2.0, 3.0]).unwrap_err(),
            SeriesError::KnotsNotIncreasing { index: 2 }
        );
    }
}
