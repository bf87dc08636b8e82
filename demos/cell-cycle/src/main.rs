#[macro_use]
extern crate log;

use std::time::Instant;

use cell_plot::{to_png, ChartRenderer, ChartStyle, PlotError};
use dialoguer::{theme::ColorfulTheme, Select};

mod cycle;

use cycle::{Cycle, TRAILING_INVALID};

const DIMS: (u32, u32) = (1600, 1200);
const STACKED_DIMS: (u32, u32) = (1600, 2400);
const NUM_CYCLES: usize = 3;

pub(crate) fn main() -> Result<(), PlotError> {
    pretty_env_logger::init();

    let cycle = Cycle::simulate();
    info!(
        "simulated {} samples over {} minutes",
        cycle.time.len(),
        cycle.time[cycle.time.len() - 1]
    );
    let renderer = ChartRenderer::new(ChartStyle::default());

    let charts = vec![
        "Abundances",
        "Volume ratio",
        "Abundance ratio",
        "Concentrations",
        "Multiple cycles",
        "All",
    ];
    let e = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select chart")
        .items(&charts)
        .default(0)
        .interact()?;

    let t0 = Instant::now();
    match e {
        0 => abundances(&renderer, &cycle)?,
        1 => volume_ratio(&renderer, &cycle)?,
        2 => abundance_ratio(&renderer, &cycle)?,
        3 => concentrations(&renderer, &cycle)?,
        4 => multiple_cycles(&renderer, &cycle)?,
        _ => {
            abundances(&renderer, &cycle)?;
            volume_ratio(&renderer, &cycle)?;
            abundance_ratio(&renderer, &cycle)?;
            concentrations(&renderer, &cycle)?;
            multiple_cycles(&renderer, &cycle)?;
        }
    }
    info!("plotting done in: {}ms", t0.elapsed().as_millis());

    Ok(())
}

fn abundances(renderer: &ChartRenderer, cycle: &Cycle) -> Result<(), PlotError> {
    let n = cycle.valid_len();
    to_png("img/abundances.png", DIMS, |area| {
        renderer.plot_abundances(
            area,
            &cycle.time[..n],
            &cycle.cytoplasmic_abundance[..n],
            &cycle.nuclear_abundance[..n],
        )
    })?;

    Ok(())
}

fn volume_ratio(renderer: &ChartRenderer, cycle: &Cycle) -> Result<(), PlotError> {
    to_png("img/volume_ratio.png", DIMS, |area| {
        renderer.plot_volume_ratio(area, &cycle.time, &cycle.nuclear_volume, &cycle.cell_volume)
    })?;

    Ok(())
}

fn abundance_ratio(renderer: &ChartRenderer, cycle: &Cycle) -> Result<(), PlotError> {
    let n = cycle.valid_len();
    to_png("img/abundance_ratio.png", DIMS, |area| {
        renderer.plot_abundance_ratio(
            area,
            &cycle.time[..n],
            &cycle.cytoplasmic_abundance[..n],
            &cycle.nuclear_abundance[..n],
        )
    })?;

    Ok(())
}

fn concentrations(renderer: &ChartRenderer, cycle: &Cycle) -> Result<(), PlotError> {
    let cell_volume = cycle.cell_volume_fn()?;
    let nuclear_volume = cycle.nuclear_volume_fn()?;
    let [_, _, ratio] = to_png("img/concentrations.png", STACKED_DIMS, |area| {
        renderer.plot_concentration_ratio(
            area,
            &cycle.time,
            &cycle.cytoplasmic_abundance,
            &cycle.nuclear_abundance,
            &cell_volume,
            &nuclear_volume,
            TRAILING_INVALID,
        )
    })?;
    let non_finite = ratio.primary.points.iter().filter(|p| !p.1.is_finite()).count();
    if non_finite > 0 {
        warn!("{} concentration ratios are not finite", non_finite);
    }

    Ok(())
}

fn multiple_cycles(renderer: &ChartRenderer, cycle: &Cycle) -> Result<(), PlotError> {
    let n = cycle.valid_len();
    let (cyt, nuc) = cycle.repeated(NUM_CYCLES);
    to_png("img/multiple_cycles.png", DIMS, |area| {
        renderer.plot_multiple_cycles(area, &cycle.time[..n], &cyt, &nuc, NUM_CYCLES)
    })?;

    Ok(())
}
