//! Detection of non-English translations of IRS forms

/// Suffixes the IRS appends to a form name for translated editions,
/// longest first.
pub const LANGUAGE_SUFFIXES: &[&str] = &[
    "zhs", "zht", "vie", "sp", "ru", "ko", "ar", "bn", "cs", "de", "fa", "fr", "gj", "gu", "ht",
    "it", "ja", "km", "kr", "pa", "pl", "pt", "so", "tl", "ur", "vn", "cn",
];

/// Shortest form root a suffix may be stripped from.
const MIN_ROOT_LEN: usize = 3;

/// Returns true if `filename` looks like a translated edition of a form
/// (e.g. `f1040sp.pdf`).
///
/// A suffix only counts when the root left after removing it is longer than
/// two characters, so short form numbers that happen to end in a language
/// code are kept. Any suffix that satisfies this is enough.
pub fn is_language_variant(filename: &str) -> bool {
    let base = filename.strip_suffix(".pdf").unwrap_or(filename);

    LANGUAGE_SUFFIXES
        .iter()
        .any(|suffix| base.ends_with(suffix) && base.len() - suffix.len() >= MIN_ROOT_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_variant_detected() {
        assert!(is_language_variant("f1040sp.pdf"));
        assert!(is_language_variant("fw4sp.pdf"));
        assert!(is_language_variant("f1040zhs.pdf"));
        assert!(is_language_variant("f1040vie.pdf"));
    }

    #[test]
    fn test_english_forms_kept() {
        assert!(!is_language_variant("f1040.pdf"));
        assert!(!is_language_variant("f1040sr.pdf"));
        assert!(!is_language_variant("fw8bene.pdf"));
        assert!(!is_language_variant("f990ez.pdf"));
    }

    /// Suffixes that do not themselves end in a shorter known suffix.
    fn standalone_suffixes() -> impl Iterator<Item = &'static str> {
        LANGUAGE_SUFFIXES.iter().copied().filter(|suffix| {
            !LANGUAGE_SUFFIXES
                .iter()
                .any(|other| other.len() < suffix.len() && suffix.ends_with(other))
        })
    }

    #[test]
    fn test_suffixes_sorted_longest_first() {
        assert!(LANGUAGE_SUFFIXES
            .windows(2)
            .all(|pair| pair[0].len() >= pair[1].len()));
    }

    #[test]
    fn test_short_roots_are_not_variants() {
        for suffix in standalone_suffixes() {
            for root in ["f", "f1", "fw"] {
                let name = format!("{}{}.pdf", root, suffix);
                assert!(!is_language_variant(&name), "{} wrongly rejected", name);
            }
        }
    }

    #[test]
    fn test_long_roots_are_variants() {
        for suffix in LANGUAGE_SUFFIXES {
            let name = format!("f941{}.pdf", suffix);
            assert!(is_language_variant(&name), "{} not rejected", name);
        }
    }

    #[test]
    fn test_shorter_suffix_can_classify() {
        // "zht" leaves too short a root, but "ht" leaves "f1z"
        assert!(is_language_variant("f1zht.pdf"));
        assert!(!is_language_variant("fzht.pdf"));
        assert!(!is_language_variant("f1vie.pdf"));
        assert!(is_language_variant("f12vie.pdf"));
    }

    #[test]
    fn test_extension_is_optional() {
        assert!(is_language_variant("f1040sp"));
        assert!(!is_language_variant("f1040"));
    }
}
