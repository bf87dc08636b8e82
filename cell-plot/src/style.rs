use cell_series::VolumeCorrection;
use plotters::style::RGBColor;

/// CSS `orange`
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
/// CSS `darkred`
pub const DARK_RED: RGBColor = RGBColor(139, 0, 0);

/// Everything about the look of the charts which is not fixed
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Margin around every chart in pixels
    pub margin: u32,
    /// Font size of the chart titles
    pub caption_size: f64,
    /// Font size of tick labels and axis descriptions
    pub label_size: f64,
    /// Space reserved for the labels of each axis
    pub label_area_size: u32,
    /// Line width of the abundance traces
    pub abundance_stroke_width: u32,
    /// Line width of ratio and concentration traces
    pub stroke_width: u32,
    /// Color of the cytoplasmic trace and its axis
    pub cytoplasmic_color: RGBColor,
    /// Color of the nuclear trace and its axis, and of all single-trace charts
    pub nuclear_color: RGBColor,
    /// Correction of the division transient in the concentration charts
    pub volume_correction: VolumeCorrection,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            margin: 10,
            caption_size: 24.0,
            label_size: 14.0,
            label_area_size: 60,
            abundance_stroke_width: 1,
            stroke_width: 2,
            cytoplasmic_color: ORANGE,
            nuclear_color: DARK_RED,
            volume_correction: VolumeCorrection::default(),
        }
    }
}
