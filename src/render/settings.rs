/// Default x axis label.
pub const DEFAULT_X_LABEL: &str = "Time Ratio";

/// Default output size in pixels.
pub const DEFAULT_SIZE: (u32, u32) = (1200, 800);

/// Number of samples used for tick generation on both axes.
pub const TICK_COUNT: usize = 8;

/// Controls the appearance of a rendered performance profile.
///
/// None of these settings influence the numbers being plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Title drawn above the chart.
    pub title: Option<String>,

    /// Label of the x axis.
    pub x_label: String,

    /// Draw a legend with the solver names.
    pub legend: bool,

    /// Use a base 10 logarithmic x axis.
    pub log_scale: bool,

    /// Draw every series in black with hollow markers.
    pub black_and_white: bool,

    /// Added to the column index before picking a style, so that a subset of
    /// solvers can keep the styles they had in a larger plot.
    pub style_offset: usize,

    /// Shade `x < 0` green and `x >= 0` red.
    pub draw_threshold_regions: bool,

    /// Output size in pixels.
    pub size: (u32, u32),
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            title: None,
            x_label: DEFAULT_X_LABEL.to_string(),
            legend: true,
            log_scale: false,
            black_and_white: false,
            style_offset: 0,
            draw_threshold_regions: false,
            size: DEFAULT_SIZE,
        }
    }
}
