//! Platform salary adapters.
//!
//! Each platform publishes salary bounds in its own shape and currency
//! convention. The adapters pull out the two bounds, reject non-ruble
//! vacancies and hand the rest to [`predict_rub_salary`].

use devsalary_types::{HhVacancy, SjVacancy, Vacancy};

use crate::predict_rub_salary;

/// Currency code HeadHunter uses for rubles.
pub const HH_RUBLE_CURRENCY: &str = "RUR";

/// Currency code SuperJob uses for rubles.
pub const SJ_RUBLE_CURRENCY: &str = "rub";

/// A vacancy record that can produce a predicted ruble salary.
pub trait PredictSalary {
    /// Returns the predicted salary in rubles, or `None` if it cannot be
    /// determined (no salary, foreign currency, no usable bounds).
    fn predicted_salary(&self) -> Option<i64>;
}

impl PredictSalary for HhVacancy {
    fn predicted_salary(&self) -> Option<i64> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(HH_RUBLE_CURRENCY) {
            return None;
        }
        predict_rub_salary(salary.from, salary.to)
    }
}

impl PredictSalary for SjVacancy {
    fn predicted_salary(&self) -> Option<i64> {
        if self.currency.as_deref() != Some(SJ_RUBLE_CURRENCY) {
            return None;
        }
        predict_rub_salary(self.payment_from, self.payment_to)
    }
}

impl PredictSalary for Vacancy {
    fn predicted_salary(&self) -> Option<i64> {
        match self {
            Self::HeadHunter(vacancy) => vacancy.predicted_salary(),
            Self::SuperJob(vacancy) => vacancy.predicted_salary(),
        }
    }
}

impl<T: PredictSalary + ?Sized> PredictSalary for &T {
    fn predicted_salary(&self) -> Option<i64> {
        (**self).predicted_salary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devsalary_types::HhSalary;

    #[test]
    fn test_hh_ruble_salary() {
        let vacancy = HhVacancy::with_salary(Some(HhSalary::new(Some(100_000), Some(200_000), "RUR")));
        assert_eq!(vacancy.predicted_salary(), Some(150_000));
    }

    #[test]
    fn test_hh_null_salary() {
        let vacancy = HhVacancy::with_salary(None);
        assert_eq!(vacancy.predicted_salary(), None);
    }

    #[test]
    fn test_hh_foreign_currency() {
        let vacancy = HhVacancy::with_salary(Some(HhSalary::new(Some(3000), None, "USD")));
        assert_eq!(vacancy.predicted_salary(), None);
    }

    #[test]
    fn test_hh_missing_currency() {
        let vacancy = HhVacancy::with_salary(Some(HhSalary {
            from: Some(3000),
            to: None,
            currency: None,
        }));
        assert_eq!(vacancy.predicted_salary(), None);
    }

    #[test]
    fn test_sj_ruble_salary() {
        let vacancy = SjVacancy::new(Some(80_000), Some(0), "rub");
        assert_eq!(vacancy.predicted_salary(), Some(96_000));
    }

    #[test]
    fn test_sj_foreign_currency() {
        let vacancy = SjVacancy::new(Some(1000), None, "usd");
        assert_eq!(vacancy.predicted_salary(), None);

        let vacancy = SjVacancy::new(Some(1000), Some(2000), "uah");
        assert_eq!(vacancy.predicted_salary(), None);
    }

    #[test]
    fn test_sj_unspecified_payment() {
        let vacancy = SjVacancy::new(Some(0), Some(0), "rub");
        assert_eq!(vacancy.predicted_salary(), None);
    }

    #[test]
    fn test_currency_codes_are_case_sensitive() {
        let vacancy = SjVacancy::new(Some(1000), None, "RUB");
        assert_eq!(vacancy.predicted_salary(), None);
    }

    #[test]
    fn test_vacancy_dispatch() {
        let hh: Vacancy = HhVacancy::with_salary(Some(HhSalary::new(None, Some(1000), "RUR"))).into();
        let sj: Vacancy = SjVacancy::new(Some(1000), None, "rub").into();
        assert_eq!(hh.predicted_salary(), Some(800));
        assert_eq!(sj.predicted_salary(), Some(1200));
    }

    #[test]
    fn test_from_raw_json() {
        let raw = r#"{"salary": {"from": null, "to": 150000, "currency": "RUR"}}"#;
        let vacancy: HhVacancy = serde_json::from_str(raw).unwrap();
        assert_eq!(vacancy.predicted_salary(), Some(120_000));
    }
}
