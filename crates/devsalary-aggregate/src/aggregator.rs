//! Streaming salary aggregation.

use devsalary_estimate::PredictSalary;
use devsalary_types::LanguageStat;

/// Streaming salary aggregator.
///
/// Counts every vacancy it sees and accumulates the predicted salaries that
/// could be determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryAggregator {
    found: usize,
    processed: usize,
    sum: i128,
}

impl SalaryAggregator {
    /// Creates an empty aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            found: 0,
            processed: 0,
            sum: 0,
        }
    }

    /// Records one vacancy's predicted salary (`None` if unknown).
    pub const fn process(&mut self, estimate: Option<i64>) {
        self.found += 1;
        if let Some(salary) = estimate {
            self.sum += salary as i128;
            self.processed += 1;
        }
    }

    /// Returns the number of vacancies seen so far.
    #[must_use]
    pub const fn found(&self) -> usize {
        self.found
    }

    /// Returns the number of vacancies with a known salary so far.
    #[must_use]
    pub const fn processed(&self) -> usize {
        self.processed
    }

    /// Finishes aggregation.
    #[must_use]
    pub const fn finish(self) -> LanguageStat {
        LanguageStat::from_totals(self.found, self.processed, self.sum)
    }
}

/// Aggregates vacancies using an explicit salary adapter.
///
/// Never fails: an empty slice yields all-zero statistics.
pub fn aggregate<V, F>(vacancies: &[V], adapter: F) -> LanguageStat
where
    F: Fn(&V) -> Option<i64>,
{
    let mut aggregator = SalaryAggregator::new();
    for vacancy in vacancies {
        aggregator.process(adapter(vacancy));
    }
    aggregator.finish()
}

/// Aggregates vacancies using their own [`PredictSalary`] implementation.
pub fn aggregate_predicted<V: PredictSalary>(vacancies: &[V]) -> LanguageStat {
    aggregate(vacancies, <V as PredictSalary>::predicted_salary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use devsalary_types::{HhSalary, HhVacancy, SjVacancy};

    fn identity(estimate: &Option<i64>) -> Option<i64> {
        *estimate
    }

    #[test]
    fn test_empty_input() {
        let stat = aggregate(&[] as &[Option<i64>], identity);
        assert_eq!(stat, LanguageStat::from_totals(0, 0, 0));

        let stat = aggregate(&[] as &[Option<i64>], |_| Some(1_000_000));
        assert_eq!(stat.vacancies_found(), 0);
        assert_eq!(stat.avg_salary(), 0);
    }

    #[test]
    fn test_all_unknown() {
        let stat = aggregate(&[None, None, None, None], identity);
        assert_eq!(stat.vacancies_found(), 4);
        assert_eq!(stat.vacancies_processed(), 0);
        assert_eq!(stat.avg_salary(), 0);
    }

    #[test]
    fn test_average_of_known() {
        let stat = aggregate(&[Some(1000), Some(2000), Some(3000)], identity);
        assert_eq!(stat.vacancies_found(), 3);
        assert_eq!(stat.vacancies_processed(), 3);
        assert_eq!(stat.avg_salary(), 2000);
    }

    #[test]
    fn test_unknown_excluded_from_average() {
        let stat = aggregate(&[Some(1000), None, Some(2001), None], identity);
        assert_eq!(stat.vacancies_found(), 4);
        assert_eq!(stat.vacancies_processed(), 2);
        assert_eq!(stat.avg_salary(), 1500);
    }

    #[test]
    fn test_sum_beyond_i64_range() {
        let stat = aggregate(&[Some(i64::MAX), Some(i64::MAX), Some(100_000)], identity);
        let expected = (2 * i64::MAX as i128 + 100_000) / 3;
        assert_eq!(stat.vacancies_processed(), 3);
        assert_eq!(stat.avg_salary() as i128, expected);
    }

    #[test]
    fn test_streaming_matches_slice() {
        let mut agg = SalaryAggregator::new();
        agg.process(Some(100));
        agg.process(None);
        assert_eq!(agg.found(), 2);
        assert_eq!(agg.processed(), 1);

        let stat = agg.finish();
        assert_eq!(stat, aggregate(&[Some(100), None], identity));
    }

    #[test]
    fn test_hh_vacancies() {
        let vacancies = vec![
            HhVacancy::with_salary(Some(HhSalary::new(Some(100_000), Some(200_000), "RUR"))),
            HhVacancy::with_salary(Some(HhSalary::new(Some(100_000), None, "RUR"))),
            HhVacancy::with_salary(Some(HhSalary::new(Some(5_000), None, "USD"))),
            HhVacancy::with_salary(None),
        ];
        let stat = aggregate_predicted(&vacancies);
        assert_eq!(stat.vacancies_found(), 4);
        assert_eq!(stat.vacancies_processed(), 2);
        assert_eq!(stat.avg_salary(), 135_000);
    }

    #[test]
    fn test_sj_vacancies() {
        let vacancies = vec![
            SjVacancy::new(Some(1000), Some(0), "usd"),
            SjVacancy::new(Some(0), Some(100_000), "rub"),
            SjVacancy::new(Some(0), Some(0), "rub"),
        ];
        let stat = aggregate_predicted(&vacancies);
        assert_eq!(stat.vacancies_found(), 3);
        assert_eq!(stat.vacancies_processed(), 1);
        assert_eq!(stat.avg_salary(), 80_000);
    }
}
