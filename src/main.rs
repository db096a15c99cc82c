use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing_subscriber::EnvFilter;

use clumpcorr_core::{build_table, preview, ClumpConfig, Dataset, OutputFormat};
use clumpcorr_stats::analyzer::analyze;

const CONFIG_FILE: &str = ".clumpcorr.toml";

#[derive(Parser)]
#[command(
    name = "clumpcorr",
    version,
    about = "Correlate data clumps with bug-introducing changes",
    long_about = "clumpcorr correlates data clump counts with bug-introducing changes (BICs)\n\
                   across a project's tagged releases and charts both over time.\n\n\
                   Run without a subcommand for the full analysis: data overview, Spearman\n\
                   correlation per project and globally, and one PNG chart per project.\n\n\
                   Examples:\n  \
                     clumpcorr                          Full analysis with charts\n  \
                     clumpcorr correlate --format json  Correlation report as JSON\n  \
                     clumpcorr plot --output-dir out    Charts only, into ./out\n  \
                     clumpcorr init                     Create a .clumpcorr.toml"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (default: .clumpcorr.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format for the correlation report
    #[arg(
        long,
        global = true,
        default_value = "text",
        long_help = "Output format for the correlation report.\n\n\
                       Formats:\n  \
                         text      Console lines with a data overview (default)\n  \
                         json      Machine-readable JSON with camelCase keys\n  \
                         markdown  GitHub-flavored Markdown"
    )]
    format: OutputFormat,

    /// Directory for chart images (overrides plot.output_dir)
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the data overview and correlation report without charts
    Correlate,
    /// Render the metrics-over-time charts only
    #[command(long_about = "Render the metrics-over-time charts only.\n\n\
        Writes <project>_metrics_over_time.png for every project, overwriting\n\
        existing files.\n\n\
        Examples:\n  clumpcorr plot\n  clumpcorr plot --output-dir charts")]
    Plot,
    /// Create a default .clumpcorr.toml configuration file
    #[command(long_about = "Create a default .clumpcorr.toml configuration file.\n\n\
        Generates a commented template with all available options.\n\
        Fails if .clumpcorr.toml already exists.")]
    Init,
    /// Generate shell completion scripts
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

const DEFAULT_CONFIG: &str = r#"# clumpcorr configuration
# All values are optional; the ones shown are the defaults.

[report]
# Rows shown in the data overview
# preview_rows = 5

[plot]
# Chart size in pixels
# width = 1200
# height = 600
# Directory for <project>_metrics_over_time.png files
# output_dir = "."
"#;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<ClumpConfig> {
    let config = match explicit {
        Some(path) => ClumpConfig::from_file(path)?,
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                ClumpConfig::from_file(default_path)?
            } else {
                ClumpConfig::default()
            }
        }
    };
    Ok(config)
}

fn print_correlation(dataset: &Dataset, config: &ClumpConfig, format: OutputFormat) -> Result<()> {
    let rows = build_table(dataset);
    tracing::debug!(
        projects = dataset.len(),
        rows = rows.len(),
        "table materialized"
    );
    let report = analyze(&rows);
    let rendered = clumpcorr_stats::report::render(&report, format)?;

    if format == OutputFormat::Text {
        println!("\n--- Data overview ---");
        print!("{}", preview(&rows, config.report.preview_rows));
        println!("\n--- Correlation analysis ---");
    }
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn write_plots(dataset: &Dataset, config: &ClumpConfig, format: OutputFormat) -> Result<()> {
    let written = clumpcorr_plot::render_all(dataset, &config.plot).wrap_err(format!(
        "writing charts to {}",
        config.plot.output_dir.display()
    ))?;
    tracing::debug!(charts = written.len(), "plots finished");

    if format == OutputFormat::Text {
        println!("\n--- Plots saved ---");
    } else {
        for path in &written {
            eprintln!("Saved {}", path.display());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .into_diagnostic()?;
    human_panic::setup_panic!();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(dir) = &cli.output_dir {
        config.plot.output_dir = dir.clone();
    }
    tracing::debug!(format = %cli.format, output_dir = %config.plot.output_dir.display(), "configuration resolved");

    match cli.command {
        None => {
            let dataset = Dataset::embedded();
            print_correlation(&dataset, &config, cli.format)?;
            write_plots(&dataset, &config, cli.format)?;
        }
        Some(Command::Correlate) => {
            print_correlation(&Dataset::embedded(), &config, cli.format)?;
        }
        Some(Command::Plot) => {
            write_plots(&Dataset::embedded(), &config, cli.format)?;
        }
        Some(Command::Init) => {
            let path = Path::new(CONFIG_FILE);
            if path.exists() {
                miette::bail!("{CONFIG_FILE} already exists");
            }
            std::fs::write(path, DEFAULT_CONFIG).into_diagnostic()?;
            println!("Created {CONFIG_FILE} with default configuration");
        }
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "clumpcorr", &mut std::io::stdout());
        }
    }

    Ok(())
}
