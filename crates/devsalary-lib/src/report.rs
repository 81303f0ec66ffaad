//! Per-language report collection.

use futures::{StreamExt, TryStreamExt, stream};
use std::pin::pin;
use tracing::{debug, info};

use devsalary_aggregate::aggregate_predicted;
use devsalary_fetch::VacancySource;
use devsalary_types::{DevsalaryError, LanguageStat, StatsReport};

/// Collects the salary report for every language from one source.
///
/// See [`collect_report_with`].
///
/// # Errors
///
/// Returns the first fetch error; the report for this source is abandoned.
pub async fn collect_report<S, L>(
    source: &S,
    languages: &[L],
    parallelism: usize,
) -> Result<StatsReport, DevsalaryError>
where
    S: VacancySource,
    L: AsRef<str> + Sync,
{
    collect_report_with(source, languages, parallelism, |_, _| {}).await
}

/// Collects the salary report for every language from one source, calling
/// `on_language` as each language is added.
///
/// Up to `parallelism` languages are fetched at once (0 is treated as 1).
/// Results are consumed in input order, so the report order always matches
/// `languages` regardless of which fetch completes first.
///
/// # Errors
///
/// Returns the first fetch error; the report for this source is abandoned.
pub async fn collect_report_with<S, L, F>(
    source: &S,
    languages: &[L],
    parallelism: usize,
    mut on_language: F,
) -> Result<StatsReport, DevsalaryError>
where
    S: VacancySource,
    L: AsRef<str> + Sync,
    F: FnMut(&str, &LanguageStat),
{
    let platform = source.platform();
    let mut report = StatsReport::new(platform, platform.report_title(source.location()));
    debug!(%platform, languages = languages.len(), parallelism, "collecting report");

    let mut stats = pin!(
        stream::iter(languages)
            .map(|language| async move {
                let language = language.as_ref();
                let vacancies = source.fetch_vacancies(language).await?;
                Ok::<_, DevsalaryError>((language, aggregate_predicted(&vacancies)))
            })
            .buffered(parallelism.max(1))
    );

    while let Some((language, stat)) = stats.try_next().await? {
        info!(
            %platform,
            language,
            found = stat.vacancies_found(),
            processed = stat.vacancies_processed(),
            avg_salary = stat.avg_salary(),
            "language done"
        );
        on_language(language, &stat);
        report.insert(language, stat);
    }

    Ok(report)
}
