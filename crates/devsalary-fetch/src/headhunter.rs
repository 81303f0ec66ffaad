//! HeadHunter (hh.ru) API access.

use async_trait::async_trait;
use futures::Stream;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use devsalary_types::{DevsalaryError, HhVacancy, Lookup, Platform, UnresolvedPolicy};

use crate::client::{ApiClient, FetchError, Query};
use crate::pages::{Page, collect_items, page_stream};
use crate::source::VacancySource;
use crate::url::{hh_areas_url, hh_professional_roles_url, hh_vacancies_url};

/// Response of the `/suggests/*` endpoints.
#[derive(Debug, Deserialize)]
struct Suggestions {
    #[serde(default)]
    items: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
struct Suggestion {
    id: Value,
}

impl Suggestions {
    /// Returns the ID of the first suggestion, if any.
    fn first_id(&self) -> Option<String> {
        self.items.first().and_then(|item| match &item.id {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        })
    }
}

/// One page of the HeadHunter vacancy search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhPage {
    /// Vacancies on this page.
    #[serde(default)]
    pub items: Vec<HhVacancy>,
    /// Total number of pages available.
    #[serde(default)]
    pub pages: u32,
    /// Total number of matching vacancies.
    #[serde(default)]
    pub found: u64,
}

impl Page for HhPage {
    type Item = HhVacancy;

    fn has_next(&self, index: u32) -> bool {
        index + 1 < self.pages
    }

    fn into_items(self) -> Vec<HhVacancy> {
        self.items
    }
}

/// Search filters for one HeadHunter vacancy query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HhSearch {
    /// Text searched in vacancy titles.
    pub text: String,
    /// Area ID; `None` searches all areas.
    pub area: Option<String>,
    /// Professional role ID; `None` searches all roles.
    pub professional_role: Option<String>,
}

impl HhSearch {
    /// Builds the query string for page `page`.
    ///
    /// Unset filters are omitted from the query.
    #[must_use]
    pub fn query(&self, client: &ApiClient, page: u32) -> Query {
        let config = client.config();
        let mut query: Query = Vec::with_capacity(8);
        if let Some(role) = &self.professional_role {
            query.push(("professional_role", role.clone()));
        }
        if let Some(area) = &self.area {
            query.push(("area", area.clone()));
        }
        query.push(("period", config.hh_period_days.to_string()));
        query.push(("order_by", "publication_time".to_string()));
        query.push(("search_field", "name".to_string()));
        query.push(("text", self.text.clone()));
        query.push(("page", page.to_string()));
        query.push(("per_page", config.per_page.to_string()));
        query
    }
}

/// Resolves a city or region name to a HeadHunter area ID.
///
/// # Errors
///
/// Returns an error if the request fails; "not found" is
/// [`Lookup::Unresolved`].
pub async fn resolve_area(client: &ApiClient, name: &str) -> Result<Lookup<String>, FetchError> {
    let url = hh_areas_url(&client.config().hh_base_url);
    let found: Suggestions = client
        .get_json(&url, &[("text", name.to_string())], &[])
        .await?;
    Ok(Lookup::from_match(found.first_id(), name))
}

/// Resolves a professional role name to a HeadHunter role ID.
///
/// # Errors
///
/// Returns an error if the request fails; "not found" is
/// [`Lookup::Unresolved`].
pub async fn resolve_professional_role(
    client: &ApiClient,
    name: &str,
) -> Result<Lookup<String>, FetchError> {
    let url = hh_professional_roles_url(&client.config().hh_base_url);
    let found: Suggestions = client
        .get_json(&url, &[("text", name.to_string())], &[])
        .await?;
    Ok(Lookup::from_match(found.first_id(), name))
}

/// Creates a lazy stream of HeadHunter vacancy pages for a search.
pub fn vacancy_pages<'a>(
    client: &'a ApiClient,
    search: &'a HhSearch,
) -> impl Stream<Item = Result<Vec<HhVacancy>, FetchError>> + 'a {
    let url = hh_vacancies_url(&client.config().hh_base_url);
    page_stream(move |page| {
        let url = url.clone();
        let query = search.query(client, page);
        async move {
            debug!(text = %search.text, page, "requesting HeadHunter page");
            client.get_json::<HhPage>(&url, &query, &[]).await
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
    search: &HhSearch,
) -> Result<Vec<HhVacancy>, FetchError> {
    collect_items(vacancy_pages(client, search)).await
}

/// HeadHunter vacancies for a resolved city and professional role.
#[derive(Debug, Clone)]
pub struct HeadHunterSource {
    client: ApiClient,
    city: String,
    area: Lookup<String>,
    professional_role: Lookup<String>,
    area_filter: Option<String>,
    role_filter: Option<String>,
}

impl HeadHunterSource {
    /// Resolves the city and professional role and applies the policy for
    /// names that could not be resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if a lookup request fails, or if a name is unresolved
    /// and the policy is [`UnresolvedPolicy::Abort`].
    pub async fn resolve(
        client: ApiClient,
        city: &str,
        professional_role: &str,
        policy: UnresolvedPolicy,
    ) -> Result<Self, DevsalaryError> {
        let area = resolve_area(&client, city).await?;
        let role = resolve_professional_role(&client, professional_role).await?;
        info!(%area, professional_role = %role, "resolved HeadHunter filters");

        let area_filter = area
            .apply(policy, Platform::HeadHunter, "area")?
            .cloned();
        let role_filter = role
            .apply(policy, Platform::HeadHunter, "professional role")?
            .cloned();
        if area_filter.is_none() {
            warn!(city, "HeadHunter area not found, searching all areas");
        }
        if role_filter.is_none() {
            warn!(
                professional_role,
                "HeadHunter professional role not found, searching all roles"
            );
        }

        Ok(Self {
            client,
            city: city.to_string(),
            area,
            professional_role: role,
            area_filter,
            role_filter,
        })
    }

    /// Returns the area lookup result.
    #[must_use]
    pub const fn area(&self) -> &Lookup<String> {
        &self.area
    }

    /// Returns the professional role lookup result.
    #[must_use]
    pub const fn professional_role(&self) -> &Lookup<String> {
        &self.professional_role
    }

    /// Builds the search for a language.
    #[must_use]
    pub fn search(&self, language: &str) -> HhSearch {
        HhSearch {
            text: language.to_string(),
            area: self.area_filter.clone(),
            professional_role: self.role_filter.clone(),
        }
    }
}

#[async_trait]
impl VacancySource for HeadHunterSource {
    type Vacancy = HhVacancy;

    fn platform(&self) -> Platform {
        Platform::HeadHunter
    }

    fn location(&self) -> &str {
        &self.city
    }

    async fn fetch_vacancies(&self, language: &str) -> Result<Vec<HhVacancy>, DevsalaryError> {
        let search = self.search(language);
        let vacancies = fetch_vacancies(&self.client, &search).await?;
        debug!(language, count = vacancies.len(), "fetched HeadHunter vacancies");
        Ok(vacancies)
    }
}
