//! Element-wise quantities derived from abundances and volumes.
//!
//! Zero denominators are not guarded against; they produce non-finite values
//! which are passed on as they are.

use nalgebra::DVector;

use crate::{ensure_len, Result};

#[inline(always)]
fn column(values: &[f64]) -> DVector<f64> {
    DVector::from_column_slice(values)
}

/// Cytoplasmic volume as cell volume minus nuclear volume
pub fn cytoplasmic_volumes(cell_volume: &[f64], nuclear_volume: &[f64]) -> Result<DVector<f64>> {
    ensure_len("nuclear_volume", cell_volume.len(), nuclear_volume)?;

    Ok(column(cell_volume) - column(nuclear_volume))
}

/// Nuclear to cytoplasmic volume ratio: `nuclear / (cell - nuclear)`
pub fn volume_ratio(nuclear_volume: &[f64], cell_volume: &[f64]) -> Result<DVector<f64>> {
    let cyt = cytoplasmic_volumes(cell_volume, nuclear_volume)?;

    Ok(column(nuclear_volume).component_div(&cyt))
}

/// Nuclear to cytoplasmic abundance ratio: `nuclear / cytoplasmic`
pub fn abundance_ratio(
    cytoplasmic_abundance: &[f64],
    nuclear_abundance: &[f64],
) -> Result<DVector<f64>> {
    ensure_len("nuclear_abundance", cytoplasmic_abundance.len(), nuclear_abundance)?;

    Ok(column(nuclear_abundance).component_div(&column(cytoplasmic_abundance)))
}

/// Concentration of a compartment: `abundance / volume`
pub fn concentrations(abundance: &[f64], volume: &[f64]) -> Result<DVector<f64>> {
    ensure_len("volume", abundance.len(), volume)?;

    Ok(column(abundance).component_div(&column(volume)))
}
