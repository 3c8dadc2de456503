//! cyber-maturity: cybersecurity maturity self-assessment tool
//!
//! Scores a questionnaire session, ranks remediation work and plans a
//! three-phase budget.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{bail, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use cyber_maturity::{
    cli,
    config::{
        self, file::CONFIG_FILE_NAMES, AppConfig, AppConfigBuilder, AssessConfig, ConfigPreset,
        SimulateConfig,
    },
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with catalog info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nBuilt-in catalogs:",
        "\n  9 security domains, 34 questions",
        "\n  3 budget phases (0-6, 6-12, 12-24 months)",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown, csv"
    )
}

#[derive(Parser)]
#[command(name = "cyber-maturity")]
#[command(version, long_version = build_long_version())]
#[command(about = "Cybersecurity maturity self-assessment", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Threshold failed (--min-maturity, --fail-on-critical) or catalog check failed
    3  Error occurred

EXAMPLES:
    # Terminal summary of a saved session
    cyber-maturity assess audit_town_hall_2026-03-02.json

    # CI gate: fail below 50% or on any critical gap
    cyber-maturity --preset ci-cd assess audit.json

    # Written report for the client
    cyber-maturity assess audit.json -o markdown -O report.md

    # What phases 1 and 2 would bring
    cyber-maturity simulate audit.json --phase 0 --phase 1")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start from a named preset (default, workshop, ci-cd)
    #[arg(long, global = true, value_parser = parse_preset)]
    preset: Option<ConfigPreset>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments shared by commands that read alternate catalogs
#[derive(Args, Default)]
struct CatalogArgs {
    /// Questionnaire file replacing the built-in one (YAML or JSON)
    #[arg(long, value_name = "PATH")]
    questions: Option<PathBuf>,

    /// Budget items file replacing the built-in one
    #[arg(long, value_name = "PATH")]
    budget_items: Option<PathBuf>,

    /// Benchmark table replacing the built-in one
    #[arg(long, value_name = "PATH")]
    benchmarks: Option<PathBuf>,
}

/// Arguments for the `assess` subcommand
#[derive(Args)]
struct AssessArgs {
    /// Session file exported from the questionnaire
    session: PathBuf,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file (stdout when omitted)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Only list the first N recommendations
    #[arg(long, value_parser = clap::value_parser!(usize))]
    max_recommendations: Option<usize>,

    /// Exit with code 1 when maturity is below this percentage
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_maturity: Option<u8>,

    /// Exit with code 1 when any critical recommendation is raised
    #[arg(long)]
    fail_on_critical: bool,

    /// Drop out-of-range answers with a warning instead of failing
    #[arg(long)]
    lenient: bool,

    #[command(flatten)]
    catalogs: CatalogArgs,
}

/// Arguments for the `simulate` subcommand
#[derive(Args)]
struct SimulateArgs {
    /// Session file exported from the questionnaire
    session: PathBuf,

    /// Budget phase assumed delivered (0, 1 or 2; repeatable)
    #[arg(short, long = "phase", value_name = "INDEX", required = true)]
    phases: Vec<usize>,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file (stdout when omitted)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Drop out-of-range answers with a warning instead of failing
    #[arg(long)]
    lenient: bool,

    #[command(flatten)]
    catalogs: CatalogArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a session: maturity, recommendations, budget
    Assess(AssessArgs),

    /// Project maturity once selected budget phases are delivered
    Simulate(SimulateArgs),

    /// Inspect the question, budget and benchmark catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Write an empty session file for a client
    ExportTemplate {
        /// Client (organization) name
        client_name: String,

        /// Output file (defaults to audit_<client>_<date>.json)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `catalog` command
#[derive(Subcommand)]
enum CatalogAction {
    /// Report every consistency violation
    Check {
        #[command(flatten)]
        catalogs: CatalogArgs,
    },
    /// Print categories with question ids and weights
    List {
        /// Output file (stdout when omitted)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,

        #[command(flatten)]
        catalogs: CatalogArgs,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Write a commented example config to the user config directory
    Init,
}

fn parse_preset(name: &str) -> std::result::Result<ConfigPreset, String> {
    ConfigPreset::from_name(name).ok_or_else(|| {
        let valid: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        format!("unknown preset '{name}' (valid: {})", valid.join(", "))
    })
}

/// Preset, then config file, then CLI flags.
fn merged_config(
    config_path: Option<&Path>,
    preset: Option<ConfigPreset>,
    overrides: &AppConfig,
) -> (AppConfig, Option<PathBuf>) {
    let mut effective = preset.map_or_else(AppConfig::default, AppConfig::from_preset);
    let loaded_from = config::apply_config_file(&mut effective, config_path);
    effective.merge(overrides);
    (effective, loaded_from)
}

fn effective_config(
    config_path: Option<&Path>,
    preset: Option<ConfigPreset>,
    overrides: &AppConfig,
) -> Result<AppConfig> {
    let (effective, loaded_from) = merged_config(config_path, preset, overrides);
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    Ok(effective.validated()?)
}

fn with_catalogs(builder: AppConfigBuilder, args: CatalogArgs) -> AppConfigBuilder {
    builder
        .questions_file(args.questions)
        .budget_items_file(args.budget_items)
        .benchmarks_file(args.benchmarks)
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let Cli {
        quiet,
        no_color,
        config: config_path,
        preset,
        command,
        ..
    } = cli;
    let config_path = config_path.as_deref();
    let globals = || AppConfig::builder().no_color(no_color).quiet(quiet);

    match command {
        Commands::Assess(args) => {
            let overrides = globals()
                .output_file(args.output_file)
                .max_recommendations(args.max_recommendations)
                .min_maturity(args.min_maturity)
                .fail_on_critical(args.fail_on_critical)
                .strict_answers(!args.lenient);
            let overrides = match args.output {
                Some(format) => overrides.output_format(format),
                None => overrides,
            };
            let overrides = with_catalogs(overrides, args.catalogs).build();

            let app = effective_config(config_path, preset, &overrides)?;
            cli::run_assess(AssessConfig::from_app_config(args.session, &app))
        }

        Commands::Simulate(args) => {
            let overrides = globals()
                .output_file(args.output_file)
                .strict_answers(!args.lenient);
            let overrides = match args.output {
                Some(format) => overrides.output_format(format),
                None => overrides,
            };
            let overrides = with_catalogs(overrides, args.catalogs).build();

            let app = effective_config(config_path, preset, &overrides)?;
            cli::run_simulate(SimulateConfig::from_app_config(
                args.session,
                args.phases,
                &app,
            ))
        }

        Commands::Catalog { action } => match action {
            CatalogAction::Check { catalogs } => {
                let overrides = with_catalogs(globals(), catalogs).build();
                let app = effective_config(config_path, preset, &overrides)?;
                cli::run_catalog_check(&app.catalogs)
            }
            CatalogAction::List {
                output_file,
                catalogs,
            } => {
                let overrides = with_catalogs(globals(), catalogs).build();
                let app = effective_config(config_path, preset, &overrides)?;
                cli::run_catalog_list(&app.catalogs, output_file)
            }
        },

        Commands::ExportTemplate {
            client_name,
            output_file,
        } => cli::run_export_template(&client_name, output_file),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "cyber-maturity", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (effective, loaded_from) =
                    merged_config(config_path, preset, &globals().build());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&effective).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    ::dirs::config_dir().map(|p| p.join("cyber-maturity").display().to_string()),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(config_path) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = config_path.map_or_else(config::default_config_path, Path::to_path_buf);
                if target.exists() {
                    bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
                std::fs::write(&target, config::generate_full_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
