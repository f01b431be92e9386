//! URL slugs for IPO detail pages.
//!
//! Rules implemented:
//! - lower-case input
//! - only `[a-z0-9]`, separator spaces and `-` survive; other characters
//!   (including non-ASCII letters) are dropped, not transliterated
//! - separator spaces are the ECMAScript `\s` set, so U+FEFF separates words
//!   while U+0085 is dropped
//! - separator and hyphen runs collapse into a single `-`
//! - no leading or trailing `-`
//!
//! `slugify` is not injective. Callers that route on slugs and cannot
//! guarantee unique names use [`unique_slugs`].

use std::collections::HashSet;

use crate::models::IpoRecord;

const EMPTY_SLUG_BASE: &str = "ipo";

pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.chars() {
        if is_separator_space(ch) || ch == '-' {
            pending_hyphen = true;
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        }
    }

    out
}

fn is_separator_space(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Slugs for `names` in input order. Repeats get `-2`, `-3`, ... appended,
/// skipping any suffixed slug that is already taken.
pub fn unique_slugs<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let mut base = slugify(name.as_ref());
        if base.is_empty() {
            base = EMPTY_SLUG_BASE.to_string();
        }

        let slug = if taken.contains(&base) {
            (2u32..)
                .map(|n| format!("{base}-{n}"))
                .find(|candidate| !taken.contains(candidate))
                .unwrap_or_else(|| base.clone())
        } else {
            base
        };

        taken.insert(slug.clone());
        out.push(slug);
    }

    out
}

pub fn find_by_slug<'a>(records: &'a [IpoRecord], slug: &str) -> Option<&'a IpoRecord> {
    records.iter().find(|record| slugify(&record.name) == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn formats_company_names() {
        let cases = [
            ("ABC Ltd.", "abc-ltd"),
            ("  Multi   Space  Co  ", "multi-space-co"),
            ("Tata Technologies Limited", "tata-technologies-limited"),
            ("Bajaj Housing Finance (BHFL)", "bajaj-housing-finance-bhfl"),
            ("Jio-Financial -- Services", "jio-financial-services"),
            ("ONE 97 Communications", "one-97-communications"),
        ];

        for (name, expected) in cases {
            assert_eq!(slugify(name), expected);
        }
    }

    #[test]
    fn empty_and_punctuation_only_inputs_are_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("&.,!"), "");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(slugify("Café Coffee Day"), "caf-coffee-day");
        assert_eq!(slugify("Ünited Spirits"), "nited-spirits");
    }

    #[test]
    fn hyphen_left_by_dropped_punctuation_collapses() {
        assert_eq!(slugify("A & B Industries"), "a-b-industries");
        assert_eq!(slugify("-Leading and trailing-"), "leading-and-trailing");
    }

    #[test]
    fn separators_follow_ecmascript_space_set() {
        assert_eq!(slugify("a\u{0085}b"), "ab");
        assert_eq!(slugify("a\u{feff}b"), "a-b");
        assert_eq!(slugify("a\u{00a0}b\u{3000}c"), "a-b-c");
        assert_eq!(slugify("\u{feff}Acme Ltd\u{0085}"), "acme-ltd");
    }

    #[test]
    fn unique_slugs_disambiguates_in_input_order() {
        let names = ["ABC Ltd.", "ABC Ltd", "abc-ltd-2", "ABC, Ltd", ""];
        let slugs = unique_slugs(&names);

        assert_eq!(
            slugs,
            vec!["abc-ltd", "abc-ltd-2", "abc-ltd-2-2", "abc-ltd-3", "ipo"]
        );
    }

    #[test]
    fn find_by_slug_returns_first_match() {
        let records = vec![IpoRecord::named("Alpha Foods"), IpoRecord::named("Beta Power")];

        let found = find_by_slug(&records, "beta-power").unwrap();
        assert_eq!(found.name, "Beta Power");
        assert!(find_by_slug(&records, "gamma").is_none());
    }

    #[test]
    fn deterministic_sweep_and_pattern_checks() {
        let re = Regex::new(r"^([a-z0-9]+(-[a-z0-9]+)*)?$").unwrap();
        let fragments = ["Ltd.", " ", "--", "IPO", "é", "2024", "\t", "(SME)", "&"];

        for a in fragments {
            for b in fragments {
                for c in fragments {
                    let name = format!("{a}{b}{c}");
                    let first = slugify(&name);
                    assert_eq!(first, slugify(&name));
                    assert!(re.is_match(&first), "bad slug {first:?} for {name:?}");
                    assert_eq!(slugify(&first), first);
                }
            }
        }
    }
}
