use crate::{Result, SeriesError};

/// Time axis for `num_cycles` concatenated cycles:
/// `len` evenly spaced points from 0 to `cycle_end * num_cycles`, both inclusive.
pub fn cycle_time_axis(cycle_end: f64, num_cycles: usize, len: usize) -> Result<Vec<f64>> {
    if num_cycles == 0 {
        return Err(SeriesError::ZeroCycles);
    }
    let end = cycle_end * num_cycles as f64;
    let axis = match len {
        0 => vec![],
        1 => vec![0.0],
        _ => {
            let step = end / (len - 1) as f64;
            let mut axis: Vec<f64> = (0..len).map(|i| i as f64 * step).collect();
            axis[len - 1] = end;
            axis
        }
    };

    Ok(axis)
}
