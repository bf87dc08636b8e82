use cell_series::{
    abundance_ratio, cycle_time_axis, ensure_len, volume_ratio, zip_series,
    CompartmentConcentrations, Interpolant, SeriesError,
};
use plotters::{coord::Shift, prelude::*};

use crate::{ChartStyle, Figure, PlotError, Trace};

const TIME_DESC: &str = "Time (minutes)";
const RATIO_DESC: &str = "Ratio";
const CONCENTRATION_DESC: &str = "Concentration";
const CYT_ABUNDANCE_DESC: &str = "Cytoplasmic protein abundance";
const NUC_ABUNDANCE_DESC: &str = "Nuclear protein abundance";

const ABUNDANCES_TITLE: &str = "Cytoplasmic and nuclear protein abundances over time";
const MULTIPLE_CYCLES_TITLE: &str =
    "Cytoplasmic and nuclear protein abundances over time (multiple cycles)";
const VOLUME_RATIO_TITLE: &str = "Nuclear to cytoplasmic volume ratio";
const ABUNDANCE_RATIO_TITLE: &str = "Nuclear to cytoplasmic abundance ratio";
const CYT_CONCENTRATION_TITLE: &str = "Cytoplasmic protein concentration";
const NUC_CONCENTRATION_TITLE: &str = "Nuclear protein concentration";
const CONCENTRATION_RATIO_TITLE: &str = "Nuclear to cytoplasmic protein concentration ratio";

/// Renders the cell-cycle charts onto caller provided drawing areas.
///
/// Every `plot_*` method validates its inputs, builds the [`Figure`], draws
/// it and returns it, so the plotted data can be inspected afterwards.
/// The matching `*_figure` methods only build the figure.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    style: ChartStyle,
}

impl ChartRenderer {
    /// Create a new instance of `ChartRenderer`
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// The style used for all charts
    #[inline(always)]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Cytoplasmic and nuclear abundance against a shared time axis,
    /// each with its own y axis
    pub fn abundances_figure(
        &self,
        time: &[f64],
        cytoplasmic_abundance: &[f64],
        nuclear_abundance: &[f64],
    ) -> Result<Figure, PlotError> {
        ensure_len("cytoplasmic_abundance", time.len(), cytoplasmic_abundance)?;
        ensure_len("nuclear_abundance", time.len(), nuclear_abundance)?;

        Ok(self.dual_abundance_figure(
            ABUNDANCES_TITLE,
            zip_series(time, cytoplasmic_abundance)?,
            zip_series(time, nuclear_abundance)?,
        ))
    }

    /// Draw [`Self::abundances_figure`]
    pub fn plot_abundances<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        time: &[f64],
        cytoplasmic_abundance: &[f64],
        nuclear_abundance: &[f64],
    ) -> Result<Figure, PlotError> {
        let fig = self.abundances_figure(time, cytoplasmic_abundance, nuclear_abundance)?;
        fig.draw(area, &self.style)?;

        Ok(fig)
    }

    /// Nuclear to cytoplasmic volume ratio, `nuclear / (cell - nuclear)`
    pub fn volume_ratio_figure(
        &self,
        time: &[f64],
        nuclear_volume: &[f64],
        cell_volume: &[f64],
    ) -> Result<Figure, PlotError> {
        ensure_len("cell_volume", time.len(), cell_volume)?;
        let ratio = volume_ratio(nuclear_volume, cell_volume)?;

        Ok(self.single_figure(
            VOLUME_RATIO_TITLE,
            RATIO_DESC,
            zip_series(time, ratio.as_slice())?,
        ))
    }

    /// Draw [`Self::volume_ratio_figure`]
    pub fn plot_volume_ratio<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        time: &[f64],
        nuclear_volume: &[f64],
        cell_volume: &[f64],
    ) -> Result<Figure, PlotError> {
        let fig = self.volume_ratio_figure(time, nuclear_volume, cell_volume)?;
        fig.draw(area, &self.style)?;

        Ok(fig)
    }

    /// Nuclear to cytoplasmic abundance ratio, `nuclear / cytoplasmic`
    pub fn abundance_ratio_figure(
        &self,
        time: &[f64],
        cytoplasmic_abundance: &[f64],
        nuclear_abundance: &[f64],
    ) -> Result<Figure, PlotError> {
        ensure_len("cytoplasmic_abundance", time.len(), cytoplasmic_abundance)?;
        let ratio = abundance_ratio(cytoplasmic_abundance, nuclear_abundance)?;

        Ok(self.single_figure(
            ABUNDANCE_RATIO_TITLE,
            RATIO_DESC,
            zip_series(time, ratio.as_slice())?,
        ))
    }

    /// Draw [`Self::abundance_ratio_figure`]
    pub fn plot_abundance_ratio<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        time: &[f64],
        cytoplasmic_abundance: &[f64],
        nuclear_abundance: &[f64],
    ) -> Result<Figure, PlotError> {
        let fig = self.abundance_ratio_figure(time, cytoplasmic_abundance, nuclear_abundance)?;
        fig.draw(area, &self.style)?;

        Ok(fig)
    }

    /// Cytoplasmic concentration, nuclear concentration and their ratio,
    /// in that order.
    /// The volumes are sampled from the interpolants at every time point and
    /// corrected with the style's [`cell_series::VolumeCorrection`].
    /// The last `trailing_invalid` samples of every input are ignored.
    pub fn concentration_figures<C, N>(
        &self,
        time: &[f64],
        cytoplasmic_abundance: &[f64],
        nuclear_abundance: &[f64],
        cell_volume: &C,
        nuclear_volume: &N,
        trailing_invalid: usize,
    ) -> Result<[Figure; 3], PlotError>
    where
        C: Interpolant + ?Sized,
        N: Interpolant + ?Sized,
    {
        let con = CompartmentConcentrations::compute(
            time,
            cytoplasmic_abundance,
            nuclear_abundance,
            cell_volume,
            nuclear_volume,
            trailing_invalid,
            &self.style.volume_correction,
        )?;

        Ok([
            self.single_figure(
                CYT_CONCENTRATION_TITLE,
                CONCENTRATION_DESC,
                zip_series(&con.time, con.cytoplasmic.as_slice())?,
            ),
            self.single_figure(
                NUC_CONCENTRATION_TITLE,
                CONCENTRATION_DESC,
                zip_series(&con.time, con.nuclear.as_slice())?,
            ),
            self.single_figure(
                CONCENTRATION_RATIO_TITLE,
                RATIO_DESC,
                zip_series(&con.time, con.ratio.as_slice())?,
            ),
        ])
    }

    /// Draw [`Self::concentration_figures`] stacked on top of each other
    #[allow(clippy::too_many_arguments)]
    pub fn plot_concentration_ratio<DB, C, N>(
        &self,
        area: &DrawingArea<DB, Shift>,
        time: &[f64],
        cytoplasmic_abundance: &[f64],
        nuclear_abundance: &[f64],
        cell_volume: &C,
        nuclear_volume: &N,
        trailing_invalid: usize,
    ) -> Result<[Figure; 3], PlotError>
    where
        DB: DrawingBackend,
        C: Interpolant + ?Sized,
        N: Interpolant + ?Sized,
    {
        let figs = self.concentration_figures(
            time,
            cytoplasmic_abundance,
            nuclear_abundance,
            cell_volume,
            nuclear_volume,
            trailing_invalid,
        )?;
        let areas = area.split_evenly((3, 1));
        for (fig, a) in figs.iter().zip(areas.iter()) {
            fig.draw(a, &self.style)?;
        }

        Ok(figs)
    }

    /// Abundances over several concatenated cycles.
    /// The time axis runs evenly from 0 to `num_cycles` times the end of `cycle_time`.
    pub fn multiple_cycles_figure(
        &self,
        cycle_time: &[f64],
        cytoplasmic_cycles: &[f64],
        nuclear_cycles: &[f64],
        num_cycles: usize,
    ) -> Result<Figure, PlotError> {
        let cycle_end = *cycle_time
            .last()
            .ok_or(SeriesError::Empty { name: "cycle_time" })?;
        ensure_len("nuclear_cycles", cytoplasmic_cycles.len(), nuclear_cycles)?;
        let t_axis = cycle_time_axis(cycle_end, num_cycles, cytoplasmic_cycles.len())?;

        Ok(self.dual_abundance_figure(
            MULTIPLE_CYCLES_TITLE,
            zip_series(&t_axis, cytoplasmic_cycles)?,
            zip_series(&t_axis, nuclear_cycles)?,
        ))
    }

    /// Draw [`Self::multiple_cycles_figure`]
    pub fn plot_multiple_cycles<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        cycle_time: &[f64],
        cytoplasmic_cycles: &[f64],
        nuclear_cycles: &[f64],
        num_cycles: usize,
    ) -> Result<Figure, PlotError> {
        let fig = self.multiple_cycles_figure(
            cycle_time,
            cytoplasmic_cycles,
            nuclear_cycles,
            num_cycles,
        )?;
        fig.draw(area, &self.style)?;

        Ok(fig)
    }

    fn single_figure(&self, title: &str, y_desc: &str, points: cell_series::Series) -> Figure {
        Figure {
            title: title.to_string(),
            x_desc: TIME_DESC.to_string(),
            primary: Trace {
                desc: y_desc.to_string(),
                color: self.style.nuclear_color,
                stroke_width: self.style.stroke_width,
                points,
            },
            secondary: None,
        }
    }

    fn dual_abundance_figure(
        &self,
        title: &str,
        cytoplasmic: cell_series::Series,
        nuclear: cell_series::Series,
    ) -> Figure {
        Figure {
            title: title.to_string(),
            x_desc: TIME_DESC.to_string(),
            primary: Trace {
                desc: CYT_ABUNDANCE_DESC.to_string(),
                color: self.style.cytoplasmic_color,
                stroke_width: self.style.abundance_stroke_width,
                points: cytoplasmic,
            },
            secondary: Some(Trace {
                desc: NUC_ABUNDANCE_DESC.to_string(),
                color: self.style.nuclear_color,
                stroke_width: self.style.abundance_stroke_width,
                points: nuclear,
            }),
        }
    }
}
