//! Per-platform vacancy sources.

use async_trait::async_trait;

use devsalary_estimate::PredictSalary;
use devsalary_types::{DevsalaryError, Platform};

/// Fetches every vacancy for a language from one platform.
///
/// Implementations carry whatever the platform needs (resolved city and role
/// filters, credentials) so callers only supply the language.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Raw vacancy record produced by this source.
    type Vacancy: PredictSalary + Send + Sync;

    /// Returns the platform this source queries.
    fn platform(&self) -> Platform;

    /// Returns the city name the source was resolved for.
    fn location(&self) -> &str;

    /// Fetches all vacancies matching `language`, following pagination to the
    /// end.
    ///
    /// # Errors
    ///
    /// Returns an error if any request fails.
    async fn fetch_vacancies(&self, language: &str) -> Result<Vec<Self::Vacancy>, DevsalaryError>;
}
