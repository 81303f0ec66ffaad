//! Job-search API endpoint construction.

/// Base URL of the HeadHunter API.
pub const HH_BASE_URL: &str = "https://api.hh.ru";

/// Base URL of the SuperJob API.
pub const SJ_BASE_URL: &str = "https://api.superjob.ru/2.0";

/// Builds the HeadHunter area suggestion URL.
///
/// # Example
///
/// ```
/// use devsalary_fetch::url::{HH_BASE_URL, hh_areas_url};
///
/// assert_eq!(hh_areas_url(HH_BASE_URL), "https://api.hh.ru/suggests/areas");
/// ```
#[must_use]
pub fn hh_areas_url(base: &str) -> String {
    format!("{}/suggests/areas", base.trim_end_matches('/'))
}

/// Builds the HeadHunter professional role suggestion URL.
#[must_use]
pub fn hh_professional_roles_url(base: &str) -> String {
    format!("{}/suggests/professional_roles", base.trim_end_matches('/'))
}

/// Builds the HeadHunter vacancy search URL.
#[must_use]
pub fn hh_vacancies_url(base: &str) -> String {
    format!("{}/vacancies", base.trim_end_matches('/'))
}

/// Builds the SuperJob town search URL.
///
/// SuperJob endpoints expect a trailing slash.
#[must_use]
pub fn sj_towns_url(base: &str) -> String {
    format!("{}/towns/", base.trim_end_matches('/'))
}

/// Builds the SuperJob vacancy search URL.
#[must_use]
pub fn sj_vacancies_url(base: &str) -> String {
    format!("{}/vacancies/", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hh_urls() {
        assert_eq!(
            hh_professional_roles_url(HH_BASE_URL),
            "https://api.hh.ru/suggests/professional_roles"
        );
        assert_eq!(hh_vacancies_url(HH_BASE_URL), "https://api.hh.ru/vacancies");
    }

    #[test]
    fn test_sj_urls() {
        assert_eq!(sj_towns_url(SJ_BASE_URL), "https://api.superjob.ru/2.0/towns/");
        assert_eq!(
            sj_vacancies_url(SJ_BASE_URL),
            "https://api.superjob.ru/2.0/vacancies/"
        );
    }

    #[test]
    fn test_trailing_slash_in_base() {
        assert_eq!(
            hh_vacancies_url("http://127.0.0.1:8080/"),
            "http://127.0.0.1:8080/vacancies"
        );
        assert_eq!(
            sj_towns_url("http://127.0.0.1:8080/2.0/"),
            "http://127.0.0.1:8080/2.0/towns/"
        );
    }
}
