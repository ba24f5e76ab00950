#![warn(missing_docs)]
//! Ampulla CLI Library
//!
//! Command-line driver for the neuroepithelium Monte Carlo experiment.
//! Configuration is layered: built-in defaults, then `ampulla.toml`, then
//! command-line flags.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     ampulla_cli::run()
//! }
//! ```

mod config;
mod executor;

pub use config::*;
pub use executor::{build_report, execute, format_human_output};

use ampulla_core::{SamplingLawKind, SimulationConfig};
use ampulla_report::{OutputFormat, generate_json_report};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Ampulla CLI arguments
#[derive(Parser, Debug)]
#[command(name = "ampulla")]
#[command(
    author,
    version,
    about = "Ampulla - Monte Carlo check of the tri-axial ellipsoid neuroepithelium model"
)]
pub struct Cli {
    /// Optional subcommand (Run, Config); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (discovered as ampulla.toml if not specified)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of simulated organs
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sampling law for both axes: normal, uniform
    #[arg(long)]
    pub law: Option<String>,

    /// Output format: human, json
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the experiment (default)
    Run,
    /// Print the default ampulla.toml
    Config,
}

/// Run the Ampulla CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Ampulla CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Config) => {
            print!("{}", AmpullaConfig::default_toml());
            Ok(())
        }
        Some(Commands::Run) | None => {
            let config = load_config(&cli)?;
            run_experiment(&cli, &config)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "ampulla=debug" } else { "ampulla=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A second initialisation (e.g. repeated in-process runs) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> anyhow::Result<AmpullaConfig> {
    match &cli.config {
        Some(path) => AmpullaConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display())),
        None => Ok(AmpullaConfig::discover().unwrap_or_default()),
    }
}

/// Build the simulation configuration by layering: ampulla.toml → CLI overrides.
pub fn build_simulation_config(
    cli: &Cli,
    config: &AmpullaConfig,
) -> anyhow::Result<SimulationConfig> {
    let mut simulation = config.simulation.clone();

    if let Some(samples) = cli.samples {
        simulation.samples = samples;
    }
    if let Some(seed) = cli.seed {
        simulation.seed = Some(seed);
    }
    if let Some(law) = &cli.law {
        let law: SamplingLawKind = law.parse().map_err(anyhow::Error::msg)?;
        simulation = simulation.with_law(law);
    }

    Ok(simulation)
}

/// Resolve the output format: CLI wins, then ampulla.toml.
pub fn resolve_format(cli: &Cli, config: &AmpullaConfig) -> anyhow::Result<OutputFormat> {
    cli.format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse::<OutputFormat>()
        .map_err(anyhow::Error::msg)
}

/// Run the experiment and render the report, without writing it anywhere.
pub fn render_report(cli: &Cli, config: &AmpullaConfig) -> anyhow::Result<String> {
    let simulation = build_simulation_config(cli, config)?;
    let format = resolve_format(cli, config)?;

    let run = execute(simulation)?;
    let report = build_report(&run);

    let rendered = match format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Human => format_human_output(&report, config.output.tolerance_percent),
    };
    Ok(rendered)
}

fn run_experiment(cli: &Cli, config: &AmpullaConfig) -> anyhow::Result<()> {
    let output = render_report(cli, config)?;

    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        eprintln!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ampulla").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(cli.samples.is_none());
        assert!(!cli.verbose);

        let simulation = build_simulation_config(&cli, &AmpullaConfig::default()).unwrap();
        assert_eq!(simulation, SimulationConfig::default());
        assert_eq!(
            resolve_format(&cli, &AmpullaConfig::default()).unwrap(),
            OutputFormat::Human
        );
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = parse(&["-n", "1000", "--seed", "9", "--law", "uniform", "--format", "json"]);
        let mut config = AmpullaConfig::default();
        config.simulation.samples = 50;
        config.output.format = "human".to_string();

        let simulation = build_simulation_config(&cli, &config).unwrap();
        assert_eq!(simulation.samples, 1000);
        assert_eq!(simulation.seed, Some(9));
        assert_eq!(simulation.major.law, SamplingLawKind::Uniform);
        assert_eq!(simulation.depth.law, SamplingLawKind::Uniform);
        assert_eq!(resolve_format(&cli, &config).unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_config_used_without_flags() {
        let cli = parse(&[]);
        let mut config = AmpullaConfig::default();
        config.simulation.samples = 50;
        config.output.format = "json".to_string();

        assert_eq!(build_simulation_config(&cli, &config).unwrap().samples, 50);
        assert_eq!(resolve_format(&cli, &config).unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_bad_law_and_format() {
        let cli = parse(&["--law", "poisson"]);
        assert!(build_simulation_config(&cli, &AmpullaConfig::default()).is_err());

        let cli = parse(&["--format", "xml"]);
        assert!(resolve_format(&cli, &AmpullaConfig::default()).is_err());
    }

    #[test]
    fn test_subcommands() {
        assert_eq!(parse(&["config"]).command, Some(Commands::Config));
        assert_eq!(parse(&["-n", "5", "run"]).command, Some(Commands::Run));
    }

    #[test]
    fn test_render_same_seed_same_text() {
        let cli = parse(&["-n", "500", "--seed", "77"]);
        let config = AmpullaConfig::default();

        let first = render_report(&cli, &config).unwrap();
        let second = render_report(&cli, &config).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("seed: 77"));
    }

    #[test]
    fn test_render_rejects_zero_samples() {
        let cli = parse(&["-n", "0"]);
        assert!(render_report(&cli, &AmpullaConfig::default()).is_err());
    }

    #[test]
    fn test_explicit_malformed_config_is_fatal() {
        let path =
            std::env::temp_dir().join(format!("ampulla-cli-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[output]\nformat = ").unwrap();

        let cli = parse(&["--config", path.to_str().unwrap()]);
        let result = load_config(&cli);
        std::fs::remove_file(&path).ok();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("failed to load configuration"));
    }
}
