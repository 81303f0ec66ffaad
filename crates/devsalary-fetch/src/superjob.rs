//! SuperJob (superjob.ru) API access.

use async_trait::async_trait;
use futures::Stream;
use serde::Deserialize;
use tracing::{debug, info, warn};

use devsalary_types::{DevsalaryError, Lookup, Platform, SjVacancy, UnresolvedPolicy};

use crate::client::{ApiClient, FetchError, Query};
use crate::pages::{Page, collect_items, page_stream};
use crate::source::VacancySource;
use crate::url::{sj_towns_url, sj_vacancies_url};

/// Header carrying the SuperJob application secret key.
pub const APP_ID_HEADER: &str = "X-Api-App-Id";

/// Response of the `/towns/` endpoint.
#[derive(Debug, Deserialize)]
struct Towns {
    #[serde(default)]
    objects: Vec<Town>,
}

#[derive(Debug, Deserialize)]
struct Town {
    id: i64,
}

/// One page of the SuperJob vacancy search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SjPage {
    /// Vacancies on this page.
    #[serde(default)]
    pub objects: Vec<SjVacancy>,
    /// Whether another page follows.
    #[serde(default)]
    pub more: bool,
    /// Total number of matching vacancies.
    #[serde(default)]
    pub total: u64,
}

impl Page for SjPage {
    type Item = SjVacancy;

    fn has_next(&self, _index: u32) -> bool {
        self.more
    }

    fn into_items(self) -> Vec<SjVacancy> {
        self.objects
    }
}

/// Search filters for one SuperJob vacancy query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SjSearch {
    /// Keyword searched in vacancies.
    pub keyword: String,
    /// Town ID; `None` searches all towns.
    pub town: Option<i64>,
}

impl SjSearch {
    /// Builds the query string for page `page`.
    ///
    /// An unset town is omitted from the query.
    #[must_use]
    pub fn query(&self, client: &ApiClient, page: u32) -> Query {
        let config = client.config();
        let mut query: Query = Vec::with_capacity(5);
        query.push(("keyword", self.keyword.clone()));
        if let Some(town) = self.town {
            query.push(("town", town.to_string()));
        }
        query.push(("catalogues", config.sj_catalogue.to_string()));
        query.push(("count", config.per_page.to_string()));
        query.push(("page", page.to_string()));
        query
    }
}

/// Resolves a town name to a SuperJob town ID.
///
/// # Errors
///
/// Returns an error if the request fails; "not found" is
/// [`Lookup::Unresolved`].
pub async fn resolve_town(client: &ApiClient, name: &str) -> Result<Lookup<i64>, FetchError> {
    let url = sj_towns_url(&client.config().sj_base_url);
    let found: Towns = client
        .get_json(&url, &[("keyword", name.to_string())], &[])
        .await?;
    Ok(Lookup::from_match(
        found.objects.first().map(|town| town.id),
        name,
    ))
}

/// Creates a lazy stream of SuperJob vacancy pages for a search.
pub fn vacancy_pages<'a>(
    client: &'a ApiClient,
    search: &'a SjSearch,
    secret_key: &'a str,
) -> impl Stream<Item = Result<Vec<SjVacancy>, FetchError>> + 'a {
    let url = sj_vacancies_url(&client.config().sj_base_url);
    page_stream(move |page| {
        let url = url.clone();
        let query = search.query(client, page);
        async move {
            debug!(keyword = %search.keyword, page, "requesting SuperJob page");
            client
                .get_json::<SjPage>(&url, &query, &[(APP_ID_HEADER, secret_key)])
                .await
        }
    })
}

/// Fetches every vacancy matching a search.
///
/// # Errors
///
/// Returns the first request or decoding error.
pub async fn fetch_vacancies(
    client: &ApiClient,
    search: &SjSearch,
    secret_key: &str,
) -> Result<Vec<SjVacancy>, FetchError> {
    collect_items(vacancy_pages(client, search, secret_key)).await
}

/// SuperJob vacancies for a resolved town.
#[derive(Clone)]
pub struct SuperJobSource {
    client: ApiClient,
    city: String,
    town: Lookup<i64>,
    town_filter: Option<i64>,
    secret_key: String,
}

impl SuperJobSource {
    /// Resolves the town and applies the policy for an unresolved name.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup request fails, or if the town is
    /// unresolved and the policy is [`UnresolvedPolicy::Abort`].
    pub async fn resolve(
        client: ApiClient,
        city: &str,
        secret_key: impl Into<String>,
        policy: UnresolvedPolicy,
    ) -> Result<Self, DevsalaryError> {
        let town = resolve_town(&client, city).await?;
        info!(%town, "resolved SuperJob filters");

        let town_filter = town.apply(policy, Platform::SuperJob, "town")?.copied();
        if town_filter.is_none() {
            warn!(city, "SuperJob town not found, searching all towns");
        }

        Ok(Self {
            client,
            city: city.to_string(),
            town,
            town_filter,
            secret_key: secret_key.into(),
        })
    }

    /// Returns the town lookup result.
    #[must_use]
    pub const fn town(&self) -> &Lookup<i64> {
        &self.town
    }

    /// Builds the search for a language.
    #[must_use]
    pub fn search(&self, language: &str) -> SjSearch {
        SjSearch {
            keyword: language.to_string(),
            town: self.town_filter,
        }
    }
}

impl std::fmt::Debug for SuperJobSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuperJobSource")
            .field("city", &self.city)
            .field("town", &self.town)
            .field("secret_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl VacancySource for SuperJobSource {
    type Vacancy = SjVacancy;

    fn platform(&self) -> Platform {
        Platform::SuperJob
    }

    fn location(&self) -> &str {
        &self.city
    }

    async fn fetch_vacancies(&self, language: &str) -> Result<Vec<SjVacancy>, DevsalaryError> {
        let search = self.search(language);
        let vacancies = fetch_vacancies(&self.client, &search, &self.secret_key).await?;
        debug!(language, count = vacancies.len(), "fetched SuperJob vacancies");
        Ok(vacancies)
    }
}
