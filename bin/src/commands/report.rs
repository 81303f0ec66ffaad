//! Report command implementation.
//!
//! This module collects salary statistics from each selected platform and
//! writes the rendered reports.

use crate::display::{Format, emit_reports, language_progress};
use anyhow::{Context, Result, bail};
use devsalary_lib::prelude::*;
use std::path::PathBuf;
use tracing::error;

/// Collect and write reports for the selected platforms.
///
/// A platform that fails is logged and skipped; the remaining reports are
/// still written and the command then fails.
pub(crate) async fn report(
    config: &AppConfig,
    platforms: &[Platform],
    format: Format,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    // Fail before any request when the SuperJob key is missing
    if platforms.contains(&Platform::SuperJob) {
        config.secret_key()?;
    }

    let client = ApiClient::with_defaults().context("Failed to create HTTP client")?;
    let mut reports = Vec::with_capacity(platforms.len());
    let mut failed = 0usize;

    for &platform in platforms {
        match platform_report(&client, config, platform, quiet).await {
            Ok(report) => reports.push(report),
            Err(err) => {
                error!(%platform, "{err:#}");
                failed += 1;
            }
        }
    }

    emit_reports(&reports, format, output.as_deref())?;

    if let Some(path) = &output {
        if !quiet {
            eprintln!("Output written to: {}", path.display());
        }
    }

    if failed > 0 {
        bail!("{failed} of {} platform reports failed", platforms.len());
    }
    Ok(())
}

/// Resolve the platform's source and collect its report.
async fn platform_report(
    client: &ApiClient,
    config: &AppConfig,
    platform: Platform,
    quiet: bool,
) -> Result<StatsReport> {
    match platform {
        Platform::HeadHunter => {
            let source = HeadHunterSource::resolve(
                client.clone(),
                &config.city,
                &config.professional_role,
                config.on_unresolved,
            )
            .await
            .context("Failed to resolve HeadHunter filters")?;
            collect(&source, config, quiet).await
        }
        Platform::SuperJob => {
            let source = SuperJobSource::resolve(
                client.clone(),
                &config.city,
                config.secret_key()?,
                config.on_unresolved,
            )
            .await
            .context("Failed to resolve SuperJob town")?;
            collect(&source, config, quiet).await
        }
    }
}

/// Collect one source's report with a progress bar.
async fn collect<S: VacancySource>(
    source: &S,
    config: &AppConfig,
    quiet: bool,
) -> Result<StatsReport> {
    let title = source.platform().report_title(source.location());
    let progress = language_progress(&title, config.languages.len(), quiet);

    let report = collect_report_with(
        source,
        &config.languages,
        config.parallelism,
        |language, _| {
            progress.set_message(language.to_string());
            progress.inc(1);
        },
    )
    .await
    .with_context(|| format!("Failed to collect {title} statistics"));

    progress.finish_and_clear();
    report
}
