use crate::{Result, Series, SeriesError};

/// Make sure `values` has exactly `expected` samples
pub fn ensure_len(name: &'static str, expected: usize, values: &[f64]) -> Result<()> {
    if values.len() != expected {
        return Err(SeriesError::LengthMismatch {
            name,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Drop the last `trailing` samples, which the simulation leaves invalid
pub fn trim_trailing(values: &[f64], trailing: usize) -> Result<&[f64]> {
    if trailing > values.len() {
        return Err(SeriesError::TrailingInvalid {
            trailing,
            len: values.len(),
        });
    }
    Ok(&values[..values.len() - trailing])
}

/// Pair up a time axis with its values.
/// Unlike a plain `zip`, a length mismatch is an error and never truncates.
pub fn zip_series(time: &[f64], values: &[f64]) -> Result<Series> {
    ensure_len("values", time.len(), values)?;
    Ok(time.iter().copied().zip(values.iter().copied()).collect())
}
