//! Candidate-set construction
//!
//! Turns either the scraped metadata catalog or the built-in legacy list into
//! the ordered set of form filenames to download. Everything here is a pure
//! function of its inputs.

pub mod language;
pub mod legacy;
pub mod year;

pub use language::is_language_variant;
pub use year::extract_revision_year;

use crate::models::{Candidate, FormRecord, RevisionYear};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use once_cell::sync::Lazy;

static FORM_FILENAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^f([0-9a-z]+?)(?:--(\d{4}))?\.pdf$").expect("valid form filename pattern")
});

/// Administrative/compliance forms (f12xxx-f15xxx) are not tax returns.
const ADMIN_SERIES: std::ops::RangeInclusive<u32> = 12000..=15999;

/// True if `filename` follows the `f<number><letters>.pdf` form naming
/// convention. Instructions (`i1040.pdf`) and publications (`p17.pdf`) fail.
pub fn is_form_filename(filename: &str) -> bool {
    FORM_FILENAME.is_match(filename)
}

/// True for the IRS-internal compliance series, e.g. `f14039.pdf`.
pub fn is_admin_form(filename: &str) -> bool {
    let Some(caps) = FORM_FILENAME.captures(filename) else {
        return false;
    };
    let number: String = caps[1].chars().take_while(|c| c.is_ascii_digit()).collect();
    number.len() == 5
        && number
            .parse::<u32>()
            .map(|n| ADMIN_SERIES.contains(&n))
            .unwrap_or(false)
}

/// For a year-stamped name like `f1099b--2025.pdf`, return the undated
/// name it duplicates (`f1099b.pdf`).
pub fn undated_name(filename: &str) -> Option<String> {
    let caps = FORM_FILENAME.captures(filename)?;
    caps.get(2)?;
    Some(format!("f{}.pdf", &caps[1]))
}

/// Filename-level filter shared by both modes.
fn keep_filename(filename: &str, known: &HashSet<&str>) -> bool {
    if !is_form_filename(filename) || is_language_variant(filename) || is_admin_form(filename) {
        return false;
    }
    match undated_name(filename) {
        Some(undated) => !known.contains(undated.as_str()),
        None => true,
    }
}

/// Build the download set from scraped metadata.
///
/// Records are keyed by filename (the last record for a name wins). When
/// `years` is non-empty only forms whose revision year is listed survive.
/// The result is sorted by revision year, unknown first, then filename.
pub fn candidates_from_metadata(records: &[FormRecord], years: &[u16]) -> Vec<Candidate> {
    let by_name: HashMap<&str, &str> = records
        .iter()
        .map(|r| (r.filename.as_str(), r.description.as_str()))
        .collect();
    let known: HashSet<&str> = by_name.keys().copied().collect();

    let mut candidates: Vec<Candidate> = by_name
        .iter()
        .filter(|(filename, _)| keep_filename(filename, &known))
        .map(|(filename, description)| Candidate {
            filename: filename.to_string(),
            year: extract_revision_year(description),
        })
        .filter(|candidate| year_requested(candidate.year, years))
        .collect();

    candidates.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.filename.cmp(&b.filename)));
    candidates
}

fn year_requested(year: RevisionYear, years: &[u16]) -> bool {
    years.is_empty() || year.as_known().is_some_and(|y| years.contains(&y))
}

/// Filter a literal filename list, preserving its order.
pub fn candidates_from_list<S: AsRef<str>>(list: &[S]) -> Vec<String> {
    let known: HashSet<&str> = list.iter().map(|name| name.as_ref()).collect();
    list.iter()
        .map(|name| name.as_ref())
        .filter(|filename| keep_filename(filename, &known))
        .map(str::to_string)
        .collect()
}
