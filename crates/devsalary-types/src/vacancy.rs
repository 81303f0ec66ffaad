//! Raw vacancy records as returned by the job-search APIs.
//!
//! Only the fields needed for salary prediction are modeled. Salary fields are
//! deserialized leniently: a missing, `null`, non-numeric or otherwise
//! malformed value becomes `None` instead of failing the whole page.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Salary block of a HeadHunter vacancy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HhSalary {
    /// Lower salary bound.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub from: Option<i64>,
    /// Upper salary bound.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub to: Option<i64>,
    /// Currency code, `RUR` for rubles.
    #[serde(default, deserialize_with = "lenient_text")]
    pub currency: Option<String>,
}

impl HhSalary {
    /// Creates a new salary block.
    #[must_use]
    pub fn new(from: Option<i64>, to: Option<i64>, currency: impl Into<String>) -> Self {
        Self {
            from,
            to,
            currency: Some(currency.into()),
        }
    }
}

/// A single vacancy from the HeadHunter search API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HhVacancy {
    /// Vacancy title.
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Salary block; `null` when the employer did not publish a salary.
    #[serde(default, deserialize_with = "lenient_salary")]
    pub salary: Option<HhSalary>,
}

impl HhVacancy {
    /// Creates a vacancy with the given salary block.
    #[must_use]
    pub const fn with_salary(salary: Option<HhSalary>) -> Self {
        Self { name: None, salary }
    }
}

/// A single vacancy from the SuperJob search API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SjVacancy {
    /// Vacancy title.
    #[serde(default, deserialize_with = "lenient_text")]
    pub profession: Option<String>,
    /// Lower salary bound; SuperJob reports `0` when unspecified.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub payment_from: Option<i64>,
    /// Upper salary bound; SuperJob reports `0` when unspecified.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub payment_to: Option<i64>,
    /// Currency code, `rub` for rubles.
    #[serde(default, deserialize_with = "lenient_text")]
    pub currency: Option<String>,
}

impl SjVacancy {
    /// Creates a vacancy with the given payment bounds and currency.
    #[must_use]
    pub fn new(
        payment_from: Option<i64>,
        payment_to: Option<i64>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            profession: None,
            payment_from,
            payment_to,
            currency: Some(currency.into()),
        }
    }
}

/// A vacancy from any supported platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vacancy {
    /// HeadHunter vacancy.
    HeadHunter(HhVacancy),
    /// SuperJob vacancy.
    SuperJob(SjVacancy),
}

impl From<HhVacancy> for Vacancy {
    fn from(value: HhVacancy) -> Self {
        Self::HeadHunter(value)
    }
}

impl From<SjVacancy> for Vacancy {
    fn from(value: SjVacancy) -> Self {
        Self::SuperJob(value)
    }
}

/// Reads a salary amount from a JSON number, truncating fractions.
fn amount_from_value(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|amount| amount.is_finite())
            .map(|amount| amount.trunc() as i64)
    })
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(amount_from_value))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

fn lenient_salary<'de, D>(deserializer: D) -> Result<Option<HhSalary>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(block @ Value::Object(_)) => serde_json::from_value(block).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hh_vacancy_with_salary() {
        let raw = r#"{
            "id": "93353083",
            "name": "Python developer",
            "salary": {"from": 150000, "to": 250000, "currency": "RUR", "gross": false}
        }"#;
        let vacancy: HhVacancy = serde_json::from_str(raw).unwrap();
        assert_eq!(vacancy.name.as_deref(), Some("Python developer"));
        let salary = vacancy.salary.unwrap();
        assert_eq!(salary.from, Some(150_000));
        assert_eq!(salary.to, Some(250_000));
        assert_eq!(salary.currency.as_deref(), Some("RUR"));
    }

    #[test]
    fn test_hh_vacancy_null_salary() {
        let vacancy: HhVacancy = serde_json::from_str(r#"{"salary": null}"#).unwrap();
        assert_eq!(vacancy.salary, None);

        let vacancy: HhVacancy = serde_json::from_str("{}").unwrap();
        assert_eq!(vacancy.salary, None);
    }

    #[test]
    fn test_hh_vacancy_malformed_salary() {
        let vacancy: HhVacancy = serde_json::from_str(r#"{"salary": "negotiable"}"#).unwrap();
        assert_eq!(vacancy.salary, None);

        let vacancy: HhVacancy =
            serde_json::from_str(r#"{"salary": {"from": "a lot", "to": 99999.9, "currency": 7}}"#)
                .unwrap();
        let salary = vacancy.salary.unwrap();
        assert_eq!(salary.from, None);
        assert_eq!(salary.to, Some(99_999));
        assert_eq!(salary.currency, None);
    }

    #[test]
    fn test_sj_vacancy() {
        let raw = r#"{
            "id": 46452211,
            "profession": "Программист Java",
            "payment_from": 120000,
            "payment_to": 0,
            "currency": "rub"
        }"#;
        let vacancy: SjVacancy = serde_json::from_str(raw).unwrap();
        assert_eq!(vacancy.payment_from, Some(120_000));
        assert_eq!(vacancy.payment_to, Some(0));
        assert_eq!(vacancy.currency.as_deref(), Some("rub"));
    }

    #[test]
    fn test_sj_vacancy_missing_fields() {
        let vacancy: SjVacancy =
            serde_json::from_str(r#"{"payment_from": null, "currency": null}"#).unwrap();
        assert_eq!(vacancy.payment_from, None);
        assert_eq!(vacancy.payment_to, None);
        assert_eq!(vacancy.currency, None);
    }

    #[test]
    fn test_vacancy_from_platform_records() {
        let hh = Vacancy::from(HhVacancy::default());
        let sj = Vacancy::from(SjVacancy::new(None, None, "rub"));
        assert!(matches!(hh, Vacancy::HeadHunter(_)));
        assert!(matches!(sj, Vacancy::SuperJob(v) if v.currency.as_deref() == Some("rub")));
    }
}
