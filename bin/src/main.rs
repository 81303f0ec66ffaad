//! devsalary CLI - Programming language salary statistics from HeadHunter and SuperJob.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use devsalary_lib::config::parse_parallelism;
use devsalary_lib::prelude::*;
use std::path::PathBuf;

mod commands;
mod display;
mod telemetry;

use display::Format;

#[derive(Parser)]
#[command(name = "devsalary")]
#[command(
    about = "Average salaries of programmers by language from HeadHunter and SuperJob",
    long_about = None
)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    report: ReportArgs,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect and print salary statistics (default)
    Report(ReportArgs),

    /// Show the platform IDs the city and role resolve to
    Resolve(LocationArgs),

    /// List the languages that would be surveyed
    Languages,
}

#[derive(Args, Clone, Default)]
struct LocationArgs {
    /// City name (default: DEVSALARY_CITY or Москва)
    #[arg(short, long)]
    city: Option<String>,

    /// HeadHunter professional role (default: DEVSALARY_ROLE or Программист)
    #[arg(short, long)]
    role: Option<String>,
}

#[derive(Args, Clone, Default)]
struct ReportArgs {
    /// Platform to query (hh, sj); repeatable. Defaults to both.
    #[arg(short, long = "platform")]
    platforms: Vec<Platform>,

    #[command(flatten)]
    location: LocationArgs,

    /// Language to survey; repeatable. Defaults to DEVSALARY_LANGUAGES or the built-in list.
    #[arg(short, long = "language")]
    languages: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Output file path. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Languages fetched concurrently
    #[arg(long, value_parser = parse_parallelism)]
    parallel: Option<usize>,

    /// What to do when the city or role is not found (unfiltered, abort)
    #[arg(long)]
    on_unresolved: Option<UnresolvedPolicy>,
}

impl LocationArgs {
    /// Applies the overrides on top of the loaded configuration.
    fn apply(self, config: &mut AppConfig) {
        if let Some(city) = self.city {
            config.city = city;
        }
        if let Some(role) = self.role {
            config.professional_role = role;
        }
    }
}

impl ReportArgs {
    /// Applies the overrides and returns the selected platforms.
    fn apply(self, config: &mut AppConfig) -> Vec<Platform> {
        self.location.apply(config);
        if !self.languages.is_empty() {
            config.languages = self.languages;
        }
        if let Some(parallel) = self.parallel {
            config.parallelism = parallel;
        }
        if let Some(policy) = self.on_unresolved {
            config.on_unresolved = policy;
        }

        if self.platforms.is_empty() {
            Platform::all().to_vec()
        } else {
            let mut platforms = Vec::with_capacity(self.platforms.len());
            for platform in self.platforms {
                if !platforms.contains(&platform) {
                    platforms.push(platform);
                }
            }
            platforms
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Failed to load configuration")?;
    telemetry::init(cli.verbose, config.log_filter.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let command = cli.command.unwrap_or(Commands::Report(cli.report));

    match command {
        Commands::Report(args) => {
            let format = args.format;
            let output = args.output.clone();
            let platforms = args.apply(&mut config);
            commands::report::report(&config, &platforms, format, output, cli.quiet).await
        }
        Commands::Resolve(args) => {
            args.apply(&mut config);
            commands::resolve::resolve(&config).await
        }
        Commands::Languages => {
            commands::languages::list_languages(&config);
            Ok(())
        }
    }
}
