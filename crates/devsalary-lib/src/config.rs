//! Run configuration loaded from the environment.

use std::env;
use thiserror::Error;

use devsalary_types::{
    DEFAULT_CITY, DEFAULT_LANGUAGES, DEFAULT_PROFESSIONAL_ROLE, DevsalaryError, UnresolvedPolicy,
    UnresolvedPolicyParseError,
};

/// SuperJob application secret key.
pub const SECRET_KEY_VAR: &str = "SJ_SECRET_KEY";
/// City name.
pub const CITY_VAR: &str = "DEVSALARY_CITY";
/// HeadHunter professional role name.
pub const ROLE_VAR: &str = "DEVSALARY_ROLE";
/// Comma-separated language list.
pub const LANGUAGES_VAR: &str = "DEVSALARY_LANGUAGES";
/// Number of languages fetched concurrently.
pub const PARALLEL_VAR: &str = "DEVSALARY_PARALLEL";
/// Policy for unresolved city or role names.
pub const ON_UNRESOLVED_VAR: &str = "DEVSALARY_ON_UNRESOLVED";
/// Log filter.
pub const LOG_VAR: &str = "DEVSALARY_LOG";

/// Errors raised while loading or querying the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The SuperJob secret key is not set.
    #[error("{var} is not set; SuperJob requires an application secret key")]
    MissingSecret {
        /// Name of the missing variable.
        var: &'static str,
    },

    /// Parallelism is not a positive integer.
    #[error("DEVSALARY_PARALLEL must be a positive integer, got '{value}'")]
    InvalidParallelism {
        /// The rejected value.
        value: String,
    },

    /// Unresolved policy could not be parsed.
    #[error("invalid DEVSALARY_ON_UNRESOLVED: {source}")]
    InvalidPolicy {
        /// Underlying parse error.
        #[from]
        source: UnresolvedPolicyParseError,
    },
}

impl From<ConfigError> for DevsalaryError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Settings for one run, loaded once at startup and passed down explicitly.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    secret_key: Option<String>,
    /// City whose vacancies are surveyed.
    pub city: String,
    /// HeadHunter professional role.
    pub professional_role: String,
    /// Languages surveyed, in report order.
    pub languages: Vec<String>,
    /// Languages fetched concurrently (at least 1).
    pub parallelism: usize,
    /// What to do when a lookup finds nothing.
    pub on_unresolved: UnresolvedPolicy,
    /// Log filter from the environment, if any.
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_key: None,
            city: DEFAULT_CITY.to_string(),
            professional_role: DEFAULT_PROFESSIONAL_ROLE.to_string(),
            languages: default_languages(),
            parallelism: 1,
            on_unresolved: UnresolvedPolicy::default(),
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the process environment, after reading
    /// an optional `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup function.
    ///
    /// Unset and blank variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self {
            secret_key: var(SECRET_KEY_VAR),
            log_filter: var(LOG_VAR),
            ..Self::default()
        };

        if let Some(city) = var(CITY_VAR) {
            config.city = city;
        }
        if let Some(role) = var(ROLE_VAR) {
            config.professional_role = role;
        }
        if let Some(languages) = var(LANGUAGES_VAR) {
            config.languages = parse_languages(&languages);
        }
        if let Some(parallel) = var(PARALLEL_VAR) {
            config.parallelism = parse_parallelism(&parallel)?;
        }
        if let Some(policy) = var(ON_UNRESOLVED_VAR) {
            config.on_unresolved = policy.parse()?;
        }

        Ok(config)
    }

    /// Returns the SuperJob secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSecret`] if no key is configured.
    pub fn secret_key(&self) -> Result<&str, ConfigError> {
        self.secret_key
            .as_deref()
            .ok_or(ConfigError::MissingSecret {
                var: SECRET_KEY_VAR,
            })
    }

    /// Sets the SuperJob secret key.
    #[must_use]
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("city", &self.city)
            .field("professional_role", &self.professional_role)
            .field("languages", &self.languages)
            .field("parallelism", &self.parallelism)
            .field("on_unresolved", &self.on_unresolved)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(ToString::to_string).collect()
}

/// Splits a comma-separated list, dropping blank entries.
///
/// A list with no entries falls back to the default languages.
fn parse_languages(raw: &str) -> Vec<String> {
    let languages: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .map(ToString::to_string)
        .collect();
    if languages.is_empty() {
        default_languages()
    } else {
        languages
    }
}

/// Parses a parallelism value, which must be at least 1.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidParallelism`] for zero or non-numeric input.
pub fn parse_parallelism(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(parallelism) if parallelism > 0 => Ok(parallelism),
        _ => Err(ConfigError::InvalidParallelism {
            value: raw.to_string(),
        }),
    }
}
