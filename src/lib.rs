//! # perfprof
//!
//! Performance profiles for comparing solvers (or any algorithms) over a shared set of
//! problem instances.
//!
//! A tabular dataset of running times goes through a small numeric pipeline (shift,
//! ratio normalization, axis resolution, out-of-bound remapping), is turned into one
//! empirical cumulative distribution per solver and is finally drawn as a step chart.
//!
//! ```no_run
//! use perfprof::prelude::*;
//! use std::path::Path;
//!
//! let table = read_table_from_path(
//!     Path::new("times.txt"),
//!     &Delimiter::Whitespace,
//!     HeaderLayout::LabelledInstances,
//! )?;
//! let config = TransformConfig::default().with_ratio(true).with_upper_limit(Some(10.0));
//! let processed = transform(&table, &config)?;
//! let profile = build_profile(&processed, table.solver_names());
//! render_profile(&profile, &processed, &RenderSettings::default(), Path::new("profile.svg"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Loading of the instance x solver tables.
pub mod table {
    /// The in-memory table with instance names, solver names and data.
    pub mod data_table;

    /// Field delimiters used when splitting input lines.
    pub mod delimiter;

    pub mod errors;

    /// Whether the header labels the instance column.
    pub mod header_layout;

    /// Parses delimited text into a [`data_table::Table`].
    pub mod reader;
}

/// The numeric pipeline that prepares a table for plotting.
pub mod transform {
    /// Explicit or data-derived axis bounds.
    pub mod bound;

    /// Options of the pipeline.
    pub mod config;

    pub mod errors;

    /// Shift, ratio normalization, axis resolution and out-of-bound remapping.
    pub mod pipeline;

    /// Output of the pipeline.
    pub mod processed_matrix;
}

/// Empirical cumulative distributions built from the processed data.
pub mod distribution {
    pub mod builder;

    /// Step-post polylines of the distributions.
    pub mod staircase;
}

/// Human readable summaries of a profile.
pub mod report {
    pub mod summary;
}

/// Styling and drawing of the chart.
pub mod render {
    /// Splits polylines into dash pieces.
    pub mod dashes;

    pub mod errors;

    /// Legend label formatting.
    pub mod legend;

    /// Shaded regions below and above the threshold.
    pub mod regions;

    /// Cosmetic options of the chart.
    pub mod settings;

    /// Line, marker and color palettes.
    pub mod style;

    #[cfg(feature = "render")]
    pub mod plot;
}

pub mod utilities {
    /// Dense row-major matrix of `f64`.
    pub mod matrix;

    /// Axis tick generation.
    pub mod ticks;
}

/// Re-exports of the most commonly used items.
pub mod prelude {
    pub use crate::distribution::builder::{build_profile, DistributionSeries, Profile};
    pub use crate::render::errors::RenderError;
    #[cfg(feature = "render")]
    pub use crate::render::plot::render_profile;
    pub use crate::render::settings::RenderSettings;
    pub use crate::report::summary::{format_summary_table, summarize, SolverSummary};
    pub use crate::table::data_table::Table;
    pub use crate::table::delimiter::Delimiter;
    pub use crate::table::errors::TableError;
    pub use crate::table::header_layout::HeaderLayout;
    pub use crate::table::reader::{read_table, read_table_from_path};
    pub use crate::transform::bound::Bound;
    pub use crate::transform::config::TransformConfig;
    pub use crate::transform::errors::{TransformError, TransformWarning};
    pub use crate::transform::pipeline::transform;
    pub use crate::transform::processed_matrix::ProcessedMatrix;
    pub use crate::utilities::matrix::Matrix;
    pub use crate::utilities::ticks::ticks;
}
