//! Natural (human) ordering for filenames.
//!
//! Filenames split into alternating maximal digit / non-digit runs. Digit
//! runs compare by numeric value, non-digit runs compare case-insensitively,
//! so `2.png` sorts before `10.png`. At the same position a digit run
//! orders before a non-digit run.

use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn runs(s: &str) -> Vec<Run<'_>> {
    let mut out = Vec::new();
    let bytes = s.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        let is_digit = bytes[start].is_ascii_digit();
        let mut end = start + 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() == is_digit {
            end += 1;
        }
        let run = &s[start..end];
        out.push(if is_digit {
            Run::Digits(run)
        } else {
            Run::Text(run)
        });
        start = end;
    }

    out
}

/// Numeric comparison without parsing: strip leading zeros, then a longer
/// digit string is the larger number, equal lengths compare lexicographically.
/// Never overflows regardless of run length.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let runs_a = runs(a);
    let runs_b = runs(b);

    for (ra, rb) in runs_a.iter().zip(runs_b.iter()) {
        let ord = match (ra, rb) {
            (Run::Digits(da), Run::Digits(db)) => cmp_digits(da, db),
            (Run::Text(ta), Run::Text(tb)) => cmp_text(ta, tb),
            (Run::Digits(_), Run::Text(_)) => Ordering::Less,
            (Run::Text(_), Run::Digits(_)) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    runs_a.len().cmp(&runs_b.len())
}

/// Sort filenames into natural order.
pub fn natural_sort<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = names.iter().map(|s| s.as_ref().to_string()).collect();
    sorted.sort_by(|a, b| natural_cmp(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_runs_compare_as_integers() {
        assert_eq!(
            natural_sort(&["10.png", "2.png", "1.png"]),
            vec!["1.png", "2.png", "10.png"]
        );
    }

    #[test]
    fn text_runs_compare_case_insensitively() {
        assert_eq!(
            natural_sort(&["beta.png", "Alpha.png", "alpha2.png"]),
            vec!["Alpha.png", "alpha2.png", "beta.png"]
        );
    }

    #[test]
    fn leading_zeros_do_not_matter_for_value() {
        assert_eq!(natural_cmp("007.png", "7.png"), Ordering::Equal);
        assert_eq!(natural_cmp("008.png", "7.png"), Ordering::Greater);
    }

    #[test]
    fn mixed_version_suffixes() {
        // Capture-tool output with version suffixes pairs up correctly
        assert_eq!(
            natural_sort(&[
                "GE PZL B1_ART_V0.23.png",
                "GE PZL B1_ART_V0.2.png",
                "GE PZL B1_ART_V0.24.png",
                "GE PZL B1_ART_V0.22.png",
            ]),
            vec![
                "GE PZL B1_ART_V0.2.png",
                "GE PZL B1_ART_V0.22.png",
                "GE PZL B1_ART_V0.23.png",
                "GE PZL B1_ART_V0.24.png",
            ]
        );
    }

    #[test]
    fn digit_start_sorts_before_text_start() {
        assert_eq!(
            natural_sort(&["abc.png", "1.png"]),
            vec!["1.png", "abc.png"]
        );
    }

    #[test]
    fn exhausted_prefix_orders_first() {
        assert_eq!(natural_cmp("a", "a1"), Ordering::Less);
        assert_eq!(natural_cmp("a1", "a1b"), Ordering::Less);
    }

    #[test]
    fn huge_numbers_do_not_overflow() {
        assert_eq!(
            natural_cmp(
                "99999999999999999999999999999999999998",
                "99999999999999999999999999999999999999"
            ),
            Ordering::Less
        );
    }
}
