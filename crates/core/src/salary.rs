//! Salary rendering for job postings

use serde::{Deserialize, Serialize};

use crate::lenient::{lenient, lenient_object};

/// Salary sub-record of a MyCareersFuture search result
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RawSalary {
    #[serde(default, deserialize_with = "lenient")]
    pub minimum: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub maximum: Option<f64>,
    #[serde(rename = "type", default, deserialize_with = "lenient_object")]
    pub salary_type: Option<RawSalaryType>,
}

/// Salary period, e.g. `{"salaryType": "Monthly"}`
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RawSalaryType {
    #[serde(rename = "salaryType", default, deserialize_with = "lenient")]
    pub salary_type: Option<String>,
}

/// Render a salary record as display text
///
/// - `"$3,000 – $5,000 Monthly"` when both bounds are present and differ
/// - `"$3,000 Monthly"` when only one bound is present or both are equal
///   (the minimum wins when both are present)
/// - `None` when the record is absent or has no bounds
///
/// The period suffix is title-cased and omitted when the provider sends none.
pub fn format_salary(raw: Option<&RawSalary>) -> Option<String> {
    let raw = raw?;

    let range = match (raw.minimum, raw.maximum) {
        (None, None) => return None,
        (Some(minimum), Some(maximum)) if minimum != maximum => {
            format!("{} – {}", format_amount(minimum), format_amount(maximum))
        }
        (minimum, maximum) => format_amount(minimum.or(maximum)?),
    };

    let period = raw
        .salary_type
        .as_ref()
        .and_then(|t| t.salary_type.as_deref())
        .filter(|t| !t.is_empty())
        .map(title_case);

    Some(match period {
        Some(period) => format!("{range} {period}"),
        None => range,
    })
}

fn format_amount(value: f64) -> String {
    format!("${}", format_thousands(value))
}

/// Round to a whole number and group the digits with commas (`1234.5` -> `"1,234"`)
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let grouped = group_digits(&rounded);

    if value.is_sign_negative() && rounded != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Insert a comma between every group of three digits, counting from the right
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Upper-case the first letter of every word and lower-case the rest
///
/// A word starts after any non-alphabetic character, so `"per-month"` becomes
/// `"Per-Month"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salary(minimum: Option<f64>, maximum: Option<f64>, period: Option<&str>) -> RawSalary {
        RawSalary {
            minimum,
            maximum,
            salary_type: period.map(|p| RawSalaryType {
                salary_type: Some(p.to_string()),
            }),
        }
    }

    #[test]
    fn test_format_salary_equal_bounds_with_period() {
        let raw = salary(Some(1000.0), Some(1000.0), Some("Monthly"));
        assert_eq!(format_salary(Some(&raw)), Some("$1,000 Monthly".to_string()));
    }

    #[test]
    fn test_format_salary_range_without_period() {
        let raw = salary(Some(3000.0), Some(5000.0), None);
        assert_eq!(
            format_salary(Some(&raw)),
            Some("$3,000 – $5,000".to_string())
        );
    }

    #[test]
    fn test_format_salary_range_with_lowercase_period() {
        let raw = salary(Some(4500.0), Some(7250.0), Some("monthly"));
        assert_eq!(
            format_salary(Some(&raw)),
            Some("$4,500 – $7,250 Monthly".to_string())
        );
    }

    #[test]
    fn test_format_salary_absent_record() {
        assert_eq!(format_salary(None), None);
    }

    #[test]
    fn test_format_salary_no_bounds() {
        let raw = salary(None, None, Some("Monthly"));
        assert_eq!(format_salary(Some(&raw)), None);
        assert_eq!(format_salary(Some(&RawSalary::default())), None);
    }

    #[test]
    fn test_format_salary_only_maximum() {
        let raw = salary(None, Some(8000.0), Some("Annually"));
        assert_eq!(
            format_salary(Some(&raw)),
            Some("$8,000 Annually".to_string())
        );
    }

    #[test]
    fn test_format_salary_only_minimum() {
        let raw = salary(Some(2500.0), None, None);
        assert_eq!(format_salary(Some(&raw)), Some("$2,500".to_string()));
    }

    #[test]
    fn test_format_salary_zero_minimum_still_ranges() {
        let raw = salary(Some(0.0), Some(5000.0), None);
        assert_eq!(format_salary(Some(&raw)), Some("$0 – $5,000".to_string()));
    }

    #[test]
    fn test_format_salary_empty_period_has_no_suffix() {
        let raw = salary(Some(1200.0), Some(1200.0), Some(""));
        assert_eq!(format_salary(Some(&raw)), Some("$1,200".to_string()));
    }

    #[test]
    fn test_format_salary_rounds_to_whole_dollars() {
        let raw = salary(Some(1234.4), Some(98765.6), None);
        assert_eq!(
            format_salary(Some(&raw)),
            Some("$1,234 – $98,766".to_string())
        );
    }

    #[test]
    fn test_format_salary_malformed_bounds_are_absent() {
        let raw: RawSalary = serde_json::from_value(serde_json::json!({
            "minimum": "3000",
            "maximum": null,
            "type": { "salaryType": 7 }
        }))
        .unwrap();
        assert_eq!(format_salary(Some(&raw)), None);
    }

    #[test]
    fn test_format_salary_from_provider_json() {
        let raw: RawSalary = serde_json::from_value(serde_json::json!({
            "minimum": 6000,
            "maximum": 9000,
            "type": { "id": 4, "salaryType": "Monthly" }
        }))
        .unwrap();
        assert_eq!(
            format_salary(Some(&raw)),
            Some("$6,000 – $9,000 Monthly".to_string())
        );
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(-2500.0), "-2,500");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("150"), "150");
        assert_eq!(group_digits("12345"), "12,345");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("monthly"), "Monthly");
        assert_eq!(title_case("ANNUALLY"), "Annually");
        assert_eq!(title_case("per hour"), "Per Hour");
        assert_eq!(title_case("per-month"), "Per-Month");
    }
}
