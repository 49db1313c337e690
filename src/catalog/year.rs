//! Revision-year parsing for catalog descriptions

use crate::models::RevisionYear;
use regex::Regex;
use once_cell::sync::Lazy;

static FOUR_DIGIT_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(20\d{2})\b").expect("valid four-digit year pattern"));

static TWO_DIGIT_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2})(?:[-/]?(\d{2}))?\b").expect("valid two-digit year pattern")
});

/// Two-digit years at or above this value belong to the 1900s.
const CENTURY_PIVOT: u16 = 50;

/// Extract the revision year a description starts with.
///
/// `"2025 Form 1040"` yields 2025, `"1224 Form 941"` (MMYY) yields 2024 and
/// `"99 Form X"` yields 1999. Anything else is `RevisionYear::Unknown`.
pub fn extract_revision_year(description: &str) -> RevisionYear {
    let text = description.trim_start();

    if let Some(caps) = FOUR_DIGIT_YEAR.captures(text) {
        if let Ok(year) = caps[1].parse::<u16>() {
            return RevisionYear::Known(year);
        }
    }

    if let Some(caps) = TWO_DIGIT_YEAR.captures(text) {
        let short = caps.get(2).or_else(|| caps.get(1)).map(|m| m.as_str());
        if let Some(Ok(short)) = short.map(str::parse::<u16>) {
            return RevisionYear::Known(expand_two_digit_year(short));
        }
    }

    RevisionYear::Unknown
}

fn expand_two_digit_year(short: u16) -> u16 {
    if short >= CENTURY_PIVOT {
        1900 + short
    } else {
        2000 + short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_digit_year() {
        assert_eq!(extract_revision_year("2025 Form 1040"), RevisionYear::Known(2025));
        assert_eq!(extract_revision_year("  2019 Schedule A"), RevisionYear::Known(2019));
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(extract_revision_year("99 Form X"), RevisionYear::Known(1999));
        assert_eq!(extract_revision_year("07 Form W-4"), RevisionYear::Known(2007));
    }

    #[test]
    fn test_two_digit_pair_uses_second_group() {
        assert_eq!(extract_revision_year("12-24 Form 941"), RevisionYear::Known(2024));
        assert_eq!(extract_revision_year("1224 Form 941"), RevisionYear::Known(2024));
        assert_eq!(extract_revision_year("03/98 Form 8821"), RevisionYear::Known(1998));
    }

    #[test]
    fn test_century_pivot() {
        assert_eq!(extract_revision_year("49 Form"), RevisionYear::Known(2049));
        assert_eq!(extract_revision_year("50 Form"), RevisionYear::Known(1950));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(extract_revision_year("no year here"), RevisionYear::Unknown);
        assert_eq!(extract_revision_year(""), RevisionYear::Unknown);
        assert_eq!(extract_revision_year("Form 1040 (2025)"), RevisionYear::Unknown);
        assert_eq!(extract_revision_year("123 Form"), RevisionYear::Unknown);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        for description in ["2025 Form 1040", "99 Form X", "no year here", "1224 Form 941"] {
            assert_eq!(
                extract_revision_year(description),
                extract_revision_year(description)
            );
        }
    }
}
