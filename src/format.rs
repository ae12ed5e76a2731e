//! Display Formatting
//!
//! Small helpers turning recipe numbers and dates into display strings.

use chrono::{DateTime, Utc};

/// `0` -> `-`, `45` -> `45 min`, `120` -> `2 h`, `95` -> `1 h 35 min`
pub fn format_duration(minutes: i64) -> String {
    if minutes <= 0 {
        return "-".to_string();
    }
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{} h", h),
        (h, m) => format!("{} h {} min", h, m),
    }
}

pub fn format_servings(servings: i64) -> String {
    if servings == 1 {
        "1 serving".to_string()
    } else {
        format!("{} servings", servings)
    }
}

/// Ingredient quantity without trailing zeros; empty when unknown
pub fn format_amount(amount: f64, unit: &str) -> String {
    if amount <= 0.0 {
        return unit.to_string();
    }
    let number = if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        let fixed = format!("{:.2}", amount);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    };
    if unit.is_empty() {
        number
    } else {
        format!("{} {}", number, unit)
    }
}

/// List footer, e.g. `10 of 42 tags`
pub fn format_count(shown: usize, total: usize, noun: &str) -> String {
    format!("{} of {} {}", shown, total.max(shown), noun)
}

pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "-");
        assert_eq!(format_duration(-5), "-");
        assert_eq!(format_duration(45), "45 min");
        assert_eq!(format_duration(120), "2 h");
        assert_eq!(format_duration(95), "1 h 35 min");
    }

    #[test]
    fn test_format_servings() {
        assert_eq!(format_servings(1), "1 serving");
        assert_eq!(format_servings(4), "4 servings");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2.0, "cups"), "2 cups");
        assert_eq!(format_amount(1.5, "tbsp"), "1.5 tbsp");
        assert_eq!(format_amount(0.333, ""), "0.33");
        assert_eq!(format_amount(0.0, "pinch"), "pinch");
        assert_eq!(format_amount(0.0, ""), "");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(10, 42, "tags"), "10 of 42 tags");
        // Total never reads lower than what is on screen
        assert_eq!(format_count(12, 10, "recipes"), "12 of 12 recipes");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(format_date(Some(date)), "Mar 7, 2024");
        assert_eq!(format_date(None), "");
    }
}
