use argh::FromArgs;
use perfprof::prelude::*;
use perfprof::render::settings::DEFAULT_X_LABEL;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

/// Draws a performance profile from a table of solver running times
#[derive(FromArgs, Debug)]
pub struct Args {
    /// input table; the first line holds the solver names
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// output chart, .svg or .png
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// single byte field delimiter (default: whitespace)
    #[argh(option, short = 'D')]
    delimiter: Option<String>,

    /// the header has no label for the instance column; every field names a solver
    #[argh(switch)]
    unlabelled_instances: bool,

    /// left end of the x axis (default: derived from the data)
    #[argh(option, short = 'm')]
    x_min: Option<f64>,

    /// right end of the x axis (default: derived from the data)
    #[argh(option, short = 'M')]
    x_max: Option<f64>,

    /// added to every observation (default: 0)
    #[argh(option, short = 'S', default = "0.0")]
    shift: f64,

    /// use observations as they are, ignoring the shift
    #[argh(switch)]
    raw: bool,

    /// logarithmic x axis
    #[argh(switch)]
    logplot: bool,

    /// hide samples at or below this value, in input units
    #[argh(option)]
    x_lower_limit: Option<f64>,

    /// hide samples at or above this value, in input units
    #[argh(option)]
    x_upper_limit: Option<f64>,

    /// plot title
    #[argh(option, short = 'P')]
    plot_title: Option<String>,

    /// do not draw the legend
    #[argh(switch)]
    no_legend: bool,

    /// x axis label (default: "Time Ratio")
    #[argh(option, short = 'X', default = "DEFAULT_X_LABEL.to_string()")]
    x_label: String,

    /// plot in black and white
    #[argh(switch, short = 'B')]
    bw: bool,

    /// divide every row by its best value
    #[argh(switch)]
    plot_as_ratios: bool,

    /// index of the first style to use (default: 0)
    #[argh(option, default = "0")]
    startidx: usize,

    /// shade the regions below and above zero
    #[argh(switch)]
    draw_separated_regions: bool,

    /// print a per-solver summary table
    #[argh(switch)]
    summary: bool,

    /// chart width in pixels (default: 1200)
    #[argh(option, default = "1200")]
    width: u32,

    /// chart height in pixels (default: 800)
    #[argh(option, default = "800")]
    height: u32,

    /// verbose logging
    #[argh(switch, short = 'v')]
    verbose: bool,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input table: {0}")]
    Table(#[from] TableError),

    #[error("Failed to process data: {0}")]
    Transform(#[from] TransformError),

    #[error("Failed to render profile: {0}")]
    Render(#[from] RenderError),

    #[error("Chart size must be non-zero, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    if args.width == 0 || args.height == 0 {
        return Err(CliError::InvalidSize {
            width: args.width,
            height: args.height,
        });
    }

    let delimiter = Delimiter::from_option(args.delimiter.as_deref())?;
    let table = read_table_from_path(&args.input, &delimiter, header_layout(args))?;
    info!(
        input = %args.input.display(),
        instances = table.instance_names().len(),
        solvers = table.solver_names().len(),
        "Loaded table"
    );

    let processed = transform(&table, &transform_config(args))?;
    let profile = build_profile(&processed, table.solver_names());

    if args.summary {
        let summaries = summarize(&profile, &processed);
        println!(
            "{}",
            format_summary_table(&summaries, args.plot_title.as_deref())
        );
    }

    render_profile(&profile, &processed, &render_settings(args), &args.output)?;
    Ok(())
}

fn header_layout(args: &Args) -> HeaderLayout {
    if args.unlabelled_instances {
        HeaderLayout::SolversOnly
    } else {
        HeaderLayout::LabelledInstances
    }
}

fn transform_config(args: &Args) -> TransformConfig {
    TransformConfig::default()
        .with_shift(args.shift)
        .with_raw(args.raw)
        .with_ratio(args.plot_as_ratios)
        .with_x_min(args.x_min)
        .with_x_max(args.x_max)
        .with_lower_limit(args.x_lower_limit)
        .with_upper_limit(args.x_upper_limit)
}

fn render_settings(args: &Args) -> RenderSettings {
    RenderSettings {
        title: args.plot_title.clone(),
        x_label: args.x_label.clone(),
        legend: !args.no_legend,
        log_scale: args.logplot,
        black_and_white: args.bw,
        style_offset: args.startidx,
        draw_threshold_regions: args.draw_separated_regions,
        size: (args.width, args.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut all = vec!["-i", "times.txt", "-o", "profile.svg"];
        all.extend_from_slice(extra);
        Args::from_args(&["perfprof"], &all).unwrap()
    }

    #[test]
    fn defaults_match_library_defaults() {
        let args = parse(&[]);
        assert_eq!(transform_config(&args), TransformConfig::default());
        assert_eq!(render_settings(&args), RenderSettings::default());
    }

    #[test]
    fn maps_flags_onto_transform_config() {
        let args = parse(&[
            "-S", "10", "--plot-as-ratios", "-m", "1", "--x-upper-limit", "100", "-D", ",",
        ]);
        let config = transform_config(&args);

        assert_eq!(config.shift, 10.0);
        assert!(config.as_ratio);
        assert!(!config.raw);
        assert_eq!(config.x_min, Bound::Explicit(1.0));
        assert_eq!(config.x_max, Bound::Derived);
        assert_eq!(config.x_upper_limit, Some(100.0));
        assert_eq!(config.x_lower_limit, None);
        assert_eq!(args.delimiter.as_deref(), Some(","));
    }

    #[test]
    fn maps_flags_onto_render_settings() {
        let args = parse(&[
            "-P", "Solvers", "--no-legend", "--logplot", "-B", "--startidx", "2", "--width", "640",
        ]);
        let settings = render_settings(&args);

        assert_eq!(settings.title.as_deref(), Some("Solvers"));
        assert!(!settings.legend);
        assert!(settings.log_scale);
        assert!(settings.black_and_white);
        assert_eq!(settings.style_offset, 2);
        assert_eq!(settings.size, (640, 800));
    }

    #[test]
    fn zero_size_is_rejected() {
        let args = parse(&["--height", "0"]);
        assert!(matches!(
            run(&args),
            Err(CliError::InvalidSize { height: 0, .. })
        ));
    }

    #[test]
    fn header_layout_follows_flag() {
        assert_eq!(header_layout(&parse(&[])), HeaderLayout::LabelledInstances);
        assert_eq!(
            header_layout(&parse(&["--unlabelled-instances"])),
            HeaderLayout::SolversOnly
        );
    }

    #[test]
    fn multi_byte_delimiter_fails() {
        let args = parse(&["-D", "::"]);
        assert!(matches!(
            run(&args),
            Err(CliError::Table(TableError::InvalidDelimiter(_)))
        ));
    }

    #[test]
    fn missing_input_fails() {
        let args = parse(&[]);
        assert!(matches!(run(&args), Err(CliError::Table(TableError::Io(_)))));
    }
}
