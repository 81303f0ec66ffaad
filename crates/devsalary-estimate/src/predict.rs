//! Salary prediction heuristic.

/// Multiplier applied when only the lower bound is published.
pub const LOWER_BOUND_FACTOR: f64 = 1.2;

/// Multiplier applied when only the upper bound is published.
pub const UPPER_BOUND_FACTOR: f64 = 0.8;

/// Predicts a single ruble salary from a vacancy's salary bounds.
///
/// - both bounds: the floor of their mean
/// - lower bound only: `lower * 1.2`, truncated
/// - upper bound only: `upper * 0.8`, truncated
/// - neither: `None`
///
/// A bound of `0` counts as absent, and a prediction of exactly `0` is
/// reported as `None`.
///
/// # Example
///
/// ```
/// use devsalary_estimate::predict_rub_salary;
///
/// assert_eq!(predict_rub_salary(Some(1000), Some(2000)), Some(1500));
/// assert_eq!(predict_rub_salary(Some(1000), None), Some(1200));
/// assert_eq!(predict_rub_salary(None, Some(1000)), Some(800));
/// assert_eq!(predict_rub_salary(None, None), None);
/// ```
#[must_use]
pub fn predict_rub_salary(lower: Option<i64>, upper: Option<i64>) -> Option<i64> {
    let lower = lower.filter(|amount| *amount != 0);
    let upper = upper.filter(|amount| *amount != 0);

    let predicted = match (lower, upper) {
        (Some(lower), Some(upper)) => midpoint(lower, upper),
        (Some(lower), None) => scale(lower, LOWER_BOUND_FACTOR),
        (None, Some(upper)) => scale(upper, UPPER_BOUND_FACTOR),
        (None, None) => return None,
    };

    if predicted == 0 { None } else { Some(predicted) }
}

/// Floor of the mean, computed without overflow.
fn midpoint(lower: i64, upper: i64) -> i64 {
    let sum = i128::from(lower) + i128::from(upper);
    sum.div_euclid(2) as i64
}

/// Scales an amount and truncates toward zero.
fn scale(amount: i64, factor: f64) -> i64 {
    (amount as f64 * factor) as i64
}
