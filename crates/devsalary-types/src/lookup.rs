//! Name-to-ID lookup results.

use std::str::FromStr;

use crate::{DevsalaryError, Platform};

/// Result of resolving a human-readable name (city, professional role) to a
/// platform identifier.
///
/// "Not found" is a regular outcome, distinct from a transport error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The platform returned at least one match; this is the first one.
    Resolved(T),
    /// The platform returned no match for the query.
    Unresolved {
        /// The name that was looked up.
        query: String,
    },
}

impl<T> Lookup<T> {
    /// Builds a lookup from an optional first match.
    #[must_use]
    pub fn from_match(first: Option<T>, query: impl Into<String>) -> Self {
        match first {
            Some(id) => Self::Resolved(id),
            None => Self::Unresolved {
                query: query.into(),
            },
        }
    }

    /// Returns true if the lookup found a match.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns the resolved identifier, if any.
    #[must_use]
    pub const fn id(&self) -> Option<&T> {
        match self {
            Self::Resolved(id) => Some(id),
            Self::Unresolved { .. } => None,
        }
    }

    /// Applies an [`UnresolvedPolicy`] to this lookup.
    ///
    /// Returns `Ok(Some(id))` when resolved, `Ok(None)` when unresolved and the
    /// policy allows an unfiltered search.
    ///
    /// # Errors
    ///
    /// Returns [`DevsalaryError::Unresolved`] when unresolved and the policy is
    /// [`UnresolvedPolicy::Abort`].
    pub fn apply(
        &self,
        policy: UnresolvedPolicy,
        platform: Platform,
        subject: &'static str,
    ) -> Result<Option<&T>, DevsalaryError> {
        match (self, policy) {
            (Self::Resolved(id), _) => Ok(Some(id)),
            (Self::Unresolved { .. }, UnresolvedPolicy::Unfiltered) => Ok(None),
            (Self::Unresolved { query }, UnresolvedPolicy::Abort) => {
                Err(DevsalaryError::Unresolved {
                    platform,
                    subject,
                    query: query.clone(),
                })
            }
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Lookup<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolved(id) => write!(f, "{id}"),
            Self::Unresolved { query } => write!(f, "unresolved ('{query}')"),
        }
    }
}

/// What to do when a city or role lookup finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnresolvedPolicy {
    /// Search without the filter, covering all cities or roles.
    #[default]
    Unfiltered,
    /// Fail the platform's report.
    Abort,
}

impl UnresolvedPolicy {
    /// Returns the policy as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unfiltered => "unfiltered",
            Self::Abort => "abort",
        }
    }
}

impl std::fmt::Display for UnresolvedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnresolvedPolicy {
    type Err = UnresolvedPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unfiltered" | "ignore" => Ok(Self::Unfiltered),
            "abort" | "fail" => Ok(Self::Abort),
            _ => Err(UnresolvedPolicyParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid unresolved policy string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPolicyParseError(String);

impl std::fmt::Display for UnresolvedPolicyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid unresolved policy '{}', expected one of: unfiltered, abort",
            self.0
        )
    }
}

impl std::error::Error for UnresolvedPolicyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_match() {
        let found = Lookup::from_match(Some(4), "Москва");
        assert_eq!(found, Lookup::Resolved(4));
        assert!(found.is_resolved());
        assert_eq!(found.id(), Some(&4));

        let missing: Lookup<i64> = Lookup::from_match(None, "Атлантида");
        assert!(!missing.is_resolved());
        assert_eq!(missing.id(), None);
        assert_eq!(missing.to_string(), "unresolved ('Атлантида')");
    }

    #[test]
    fn test_apply_unfiltered() {
        let missing: Lookup<String> = Lookup::from_match(None, "Атлантида");
        let applied = missing
            .apply(UnresolvedPolicy::Unfiltered, Platform::HeadHunter, "area")
            .unwrap();
        assert_eq!(applied, None);
    }

    #[test]
    fn test_apply_abort() {
        let missing: Lookup<i64> = Lookup::from_match(None, "Атлантида");
        let err = missing
            .apply(UnresolvedPolicy::Abort, Platform::SuperJob, "town")
            .unwrap_err();
        assert!(matches!(
            err,
            DevsalaryError::Unresolved { subject: "town", .. }
        ));
        assert!(err.to_string().contains("Атлантида"));

        let found = Lookup::Resolved(4_i64);
        let applied = found
            .apply(UnresolvedPolicy::Abort, Platform::SuperJob, "town")
            .unwrap();
        assert_eq!(applied, Some(&4));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(
            "abort".parse::<UnresolvedPolicy>().unwrap(),
            UnresolvedPolicy::Abort
        );
        assert_eq!(
            "Unfiltered".parse::<UnresolvedPolicy>().unwrap(),
            UnresolvedPolicy::Unfiltered
        );
        assert!("retry".parse::<UnresolvedPolicy>().is_err());
    }
}
