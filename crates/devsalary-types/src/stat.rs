//! Per-language salary statistics.

use serde::{Deserialize, Serialize};

/// Salary statistics for a single programming language on one platform.
///
/// Fields are fixed at construction; `vacancies_processed` never exceeds
/// `vacancies_found`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LanguageStat {
    vacancies_found: usize,
    vacancies_processed: usize,
    avg_salary: i64,
}

impl LanguageStat {
    /// Creates statistics from raw counts and the sum of predicted salaries.
    ///
    /// The average is the floor of `salary_sum / vacancies_processed`, or 0
    /// when nothing was processed. `vacancies_processed` is clamped to
    /// `vacancies_found`. The sum is wide so that large salaries cannot
    /// overflow it; the average is narrowed back to `i64`, saturating.
    #[must_use]
    pub const fn from_totals(
        vacancies_found: usize,
        vacancies_processed: usize,
        salary_sum: i128,
    ) -> Self {
        let vacancies_processed = if vacancies_processed > vacancies_found {
            vacancies_found
        } else {
            vacancies_processed
        };
        let avg_salary = if vacancies_processed == 0 {
            0
        } else {
            let avg = salary_sum.div_euclid(vacancies_processed as i128);
            if avg > i64::MAX as i128 {
                i64::MAX
            } else if avg < i64::MIN as i128 {
                i64::MIN
            } else {
                avg as i64
            }
        };
        Self {
            vacancies_found,
            vacancies_processed,
            avg_salary,
        }
    }

    /// Returns the number of vacancies returned by the search.
    #[must_use]
    pub const fn vacancies_found(&self) -> usize {
        self.vacancies_found
    }

    /// Returns the number of vacancies with a predictable ruble salary.
    #[must_use]
    pub const fn vacancies_processed(&self) -> usize {
        self.vacancies_processed
    }

    /// Returns the average predicted salary in rubles (0 if none processed).
    #[must_use]
    pub const fn avg_salary(&self) -> i64 {
        self.avg_salary
    }
}
