//! Front/back pair matching for the validation path.

use std::collections::HashMap;

use tracing::warn;

use crate::side::{self, Classified, Side};

/// Result of cross-referencing Side A and Side B filenames.
///
/// `unmatched_a` holds Side A filenames with no Side B counterpart sharing
/// their token identity (in candidate-list order), `unmatched_b` the
/// symmetric list. `all_unmatched` is their union sorted lexicographically.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub unmatched_a: Vec<String>,
    pub unmatched_b: Vec<String>,
    pub all_unmatched: Vec<String>,
    pub duplicate_identities: Vec<DuplicateIdentity>,
}

/// Two or more same-side filenames sharing one token identity.
///
/// The reference behavior silently dropped all but the last such file from
/// matching; here they are surfaced as a finding instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdentity {
    pub side: Side,
    pub identity: String,
    pub filenames: Vec<String>,
}

impl MatchReport {
    /// A directory passes validation when every sided file has a partner
    /// and no token identity is claimed twice on the same side.
    pub fn is_valid(&self) -> bool {
        self.all_unmatched.is_empty() && self.duplicate_identities.is_empty()
    }
}

/// Cross-reference Side A and Side B filenames by token identity.
///
/// Hidden files and files containing neither marker are excluded from
/// matching entirely; an empty input yields an empty (passing) report.
pub fn match_filenames<I, S>(filenames: I) -> MatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut side_a: Vec<Classified> = Vec::new();
    let mut side_b: Vec<Classified> = Vec::new();

    for filename in filenames {
        let filename = filename.as_ref();
        if side::is_hidden(filename) {
            continue;
        }
        if side::is_ambiguous(filename) {
            warn!(
                "'{}' contains both side markers; classifying by first occurrence",
                filename
            );
        }
        match side::classify(filename) {
            Some(c) if c.side == Side::A => side_a.push(c),
            Some(c) => side_b.push(c),
            None => {}
        }
    }

    let identities_a = identity_map(&side_a);
    let identities_b = identity_map(&side_b);

    let unmatched_a: Vec<String> = side_a
        .iter()
        .filter(|c| !identities_b.contains_key(c.identity.as_str()))
        .map(|c| c.filename.clone())
        .collect();
    let unmatched_b: Vec<String> = side_b
        .iter()
        .filter(|c| !identities_a.contains_key(c.identity.as_str()))
        .map(|c| c.filename.clone())
        .collect();

    let mut all_unmatched: Vec<String> = unmatched_a
        .iter()
        .chain(unmatched_b.iter())
        .cloned()
        .collect();
    all_unmatched.sort();

    let mut duplicate_identities = collect_duplicates(&side_a, &identities_a);
    duplicate_identities.extend(collect_duplicates(&side_b, &identities_b));

    MatchReport {
        unmatched_a,
        unmatched_b,
        all_unmatched,
        duplicate_identities,
    }
}

fn identity_map<'a>(candidates: &'a [Classified]) -> HashMap<&'a str, Vec<&'a str>> {
    let mut map: HashMap<&str, Vec<&str>> = HashMap::new();
    for c in candidates {
        map.entry(c.identity.as_str())
            .or_default()
            .push(c.filename.as_str());
    }
    map
}

/// Duplicates in first-appearance order of their identity.
fn collect_duplicates(
    candidates: &[Classified],
    identities: &HashMap<&str, Vec<&str>>,
) -> Vec<DuplicateIdentity> {
    let mut seen: Vec<&str> = Vec::new();
    let mut duplicates = Vec::new();

    for c in candidates {
        if seen.contains(&c.identity.as_str()) {
            continue;
        }
        seen.push(c.identity.as_str());

        if let Some(filenames) = identities.get(c.identity.as_str()) {
            if filenames.len() > 1 {
                duplicates.push(DuplicateIdentity {
                    side: c.side,
                    identity: c.identity.clone(),
                    filenames: filenames.iter().map(|f| f.to_string()).collect(),
                });
            }
        }
    }

    duplicates
}
