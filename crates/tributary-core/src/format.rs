//! Display formatting for flow values.
//!
//! Hover text in rendered charts shows values the way d3's `",.0f"` format
//! does: rounded to whole units, with comma thousands separators.

/// Format a flow value as a whole number with comma thousands separators.
///
/// Halves round away from zero. Values that round to zero never carry a sign,
/// and negative values use the Unicode minus sign like the d3 locale default.
///
/// # Examples
///
/// ```
/// use tributary_core::format::format_value;
///
/// assert_eq!(format_value(1234567.4), "1,234,567");
/// assert_eq!(format_value(999.5), "1,000");
/// assert_eq!(format_value(12.0), "12");
/// ```
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "\u{2212}Infinity" }.to_string();
    }

    let rounded = value.round();
    if rounded == 0.0 {
        return "0".to_string();
    }

    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);

    if rounded < 0.0 {
        format!("\u{2212}{grouped}")
    } else {
        grouped
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(999.0), "999");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_value(1000.0), "1,000");
        assert_eq!(format_value(12000.0), "12,000");
        assert_eq!(format_value(400000.0), "400,000");
        assert_eq!(format_value(1_234_567_890.0), "1,234,567,890");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(format_value(2.5), "3");
        assert_eq!(format_value(0.4), "0");
        assert_eq!(format_value(1499.5), "1,500");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_value(-0.2), "0");
        assert_eq!(format_value(-1500.0), "\u{2212}1,500");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Removing the separators leaves the rounded magnitude.
    fn check_digits_survive_grouping(value: f64) -> Result<(), TestCaseError> {
        let formatted = format_value(value);
        let digits: String = formatted
            .chars()
            .filter(|ch| *ch != ',' && *ch != '\u{2212}')
            .collect();

        prop_assert_eq!(digits, format!("{:.0}", value.round().abs()));
        Ok(())
    }

    /// Separators fall every three digits counting from the right.
    fn check_groups_are_three_wide(value: f64) -> Result<(), TestCaseError> {
        let formatted = format_value(value);
        let magnitude = formatted.trim_start_matches('\u{2212}');
        let groups: Vec<_> = magnitude.split(',').collect();

        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn digits_survive_grouping(value in -1.0e12f64..1.0e12) {
            check_digits_survive_grouping(value)?;
        }

        #[test]
        fn groups_are_three_wide(value in -1.0e12f64..1.0e12) {
            check_groups_are_three_wide(value)?;
        }
    }
}
