use thiserror::Error;

/// Errors that can occur while rendering a chart.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unsupported output format `{0}`, expected .png or .svg")]
    UnsupportedFormat(String),

    #[error("Invalid x axis range [{x_min}, {x_max}]")]
    InvalidAxis { x_min: f64, x_max: f64 },

    #[error("Logarithmic x axis needs a positive range, got [{x_min}, {x_max}]")]
    InvalidLogAxis { x_min: f64, x_max: f64 },

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
}
