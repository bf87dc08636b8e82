use std::ops::Range;

use cell_series::Series;
use plotters::{coord::Shift, prelude::*};

use crate::{ChartStyle, PlotError};

const FONT: &str = "sans-serif";

/// One line on a chart together with the description of its y axis
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Description of the y axis the trace is plotted against
    pub desc: String,
    /// Line color
    pub color: RGBColor,
    /// Line width in pixels
    pub stroke_width: u32,
    /// The plotted points, non-finite values included
    pub points: Series,
}

/// Everything needed to draw one chart.
/// With a secondary trace the chart gets a second y axis on the right,
/// and both y axes are labelled in the color of their trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Chart title
    pub title: String,
    /// Description of the x axis
    pub x_desc: String,
    /// Trace on the left y axis
    pub primary: Trace,
    /// Trace on the right y axis
    pub secondary: Option<Trace>,
}

impl Figure {
    /// Draw the figure onto `area`
    pub fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        style: &ChartStyle,
    ) -> Result<(), PlotError> {
        let x_range = axis_range(self.primary.points.iter().map(|p| p.0));
        let y_range = axis_range(self.primary.points.iter().map(|p| p.1));
        debug!("{}: x_range: {:?}, y_range: {:?}", self.title, x_range, y_range);

        let mut builder = ChartBuilder::on(area);
        builder
            .margin(style.margin)
            .caption(self.title.as_str(), (FONT, style.caption_size).into_font())
            .x_label_area_size(style.label_area_size)
            .y_label_area_size(style.label_area_size);
        if self.secondary.is_some() {
            builder.right_y_label_area_size(style.label_area_size);
        }
        let mut cc = builder.build_cartesian_2d(x_range.clone(), y_range)?;

        let y_label_color = match self.secondary {
            Some(_) => self.primary.color,
            None => BLACK,
        };
        cc.configure_mesh()
            .disable_mesh()
            .x_desc(self.x_desc.as_str())
            .y_desc(self.primary.desc.as_str())
            .label_style((FONT, style.label_size).into_font())
            .y_label_style((FONT, style.label_size).into_font().color(&y_label_color))
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&|v| format!("{:.3}", v))
            .draw()?;
        for run in finite_runs(&self.primary.points) {
            cc.draw_series(LineSeries::new(
                run,
                self.primary.color.stroke_width(self.primary.stroke_width),
            ))?;
        }

        if let Some(secondary) = &self.secondary {
            let y2_range = axis_range(secondary.points.iter().map(|p| p.1));
            debug!("{}: secondary y_range: {:?}", self.title, y2_range);

            let mut cc = cc.set_secondary_coord(x_range, y2_range);
            let font = (FONT, style.label_size).into_font().color(&secondary.color);
            cc.configure_secondary_axes()
                .y_desc(secondary.desc.as_str())
                .label_style(font.clone())
                .axis_desc_style(font)
                .y_label_formatter(&|v| format!("{:.3}", v))
                .draw()?;
            for run in finite_runs(&secondary.points) {
                cc.draw_secondary_series(LineSeries::new(
                    run,
                    secondary.color.stroke_width(secondary.stroke_width),
                ))?;
            }
        }

        info!("drew \"{}\"", self.title);

        Ok(())
    }
}

/// Range covering all finite values with a 5% margin on both sides
pub(crate) fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min > max {
        return 0.0..1.0;
    }
    let pad = if max > min {
        (max - min) * 0.05
    } else {
        min.abs().max(1.0) * 0.05
    };

    (min - pad)..(max + pad)
}

/// Split a line at its non-finite points, leaving gaps where they were
pub(crate) fn finite_runs(points: &[(f64, f64)]) -> Vec<Series> {
    points
        .split(|(x, y)| !x.is_finite() || !y.is_finite())
        .filter(|run| !run.is_empty())
        .map(|run| run.to_vec())
        .collect()
}
