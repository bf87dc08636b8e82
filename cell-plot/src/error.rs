use cell_series::SeriesError;
use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Why a chart could not be drawn
#[derive(Debug, Error)]
pub enum PlotError {
    /// The input series were invalid
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// The plotting backend failed
    #[error("drawing failed: {0}")]
    Drawing(String),

    /// The output location could not be prepared
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl<E> From<DrawingAreaErrorKind<E>> for PlotError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Drawing(err.to_string())
    }
}
