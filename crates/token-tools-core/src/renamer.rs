//! Rename planning for the normalization path.
//!
//! Pairing is positional, not marker-based: after natural sort, files are
//! grouped into consecutive pairs and whatever sorts first in each pair
//! becomes the front (Side A). Callers relying on marker-based pairing
//! should run validation instead.

use std::collections::HashSet;

use crate::error::Error;
use crate::natural::natural_sort;
use crate::side::{self, Side};

pub const MINIMUM_PADDING: usize = 3;

/// One token's front/back rename, sharing a zero-padded stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRename {
    pub sequence: usize,
    pub front_from: String,
    pub front_to: String,
    pub back_from: String,
    pub back_to: String,
}

impl TokenRename {
    /// Renames in application order, front before back.
    pub fn steps(&self) -> [(&str, &str); 2] {
        [
            (self.front_from.as_str(), self.front_to.as_str()),
            (self.back_from.as_str(), self.back_to.as_str()),
        ]
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub renames: Vec<TokenRename>,
}

impl RenamePlan {
    /// True when every target equals its source, i.e. the directory is
    /// already normalized and execution would touch nothing.
    pub fn is_noop(&self) -> bool {
        self.renames
            .iter()
            .all(|r| r.front_from == r.front_to && r.back_from == r.back_to)
    }

    pub fn pair_count(&self) -> usize {
        self.renames.len()
    }
}

/// Build a rename plan for one directory's filenames.
///
/// Hidden files are excluded first; an odd remaining count fails with
/// `Error::OddFileCount`. The remaining files are natural-sorted, grouped
/// into (front, back) pairs and assigned 1-based zero-padded sequence
/// stems, `prefix` + sequence. Before returning, the plan is replayed over
/// the current name set; a target that would overwrite an existing file
/// fails with `Error::TargetExists` and nothing is renamed.
pub fn plan_renames<S: AsRef<str>>(filenames: &[S], prefix: &str) -> Result<RenamePlan, Error> {
    let visible: Vec<&str> = filenames
        .iter()
        .map(|f| f.as_ref())
        .filter(|f| !side::is_hidden(f))
        .collect();

    if visible.len() % 2 != 0 {
        return Err(Error::OddFileCount(visible.len()));
    }

    let sorted = natural_sort(&visible);
    let pair_count = sorted.len() / 2;
    let width = MINIMUM_PADDING.max(digit_count(pair_count));

    let mut renames = Vec::with_capacity(pair_count);
    for (index, pair) in sorted.chunks_exact(2).enumerate() {
        let sequence = index + 1;
        let stem = format!("{}{:0width$}", prefix, sequence, width = width);
        let front = &pair[0];
        let back = &pair[1];

        renames.push(TokenRename {
            sequence,
            front_from: front.clone(),
            front_to: format!("{}{}{}", stem, Side::A.marker(), side::file_extension(front)),
            back_from: back.clone(),
            back_to: format!("{}{}{}", stem, Side::B.marker(), side::file_extension(back)),
        });
    }

    let plan = RenamePlan { renames };
    check_collisions(&plan, &sorted)?;
    Ok(plan)
}

/// Replay the plan over the directory's current names. Each non-no-op step
/// must target a name that is free at that point in the sequence; earlier
/// steps free the names they move away from.
fn check_collisions(plan: &RenamePlan, current_names: &[String]) -> Result<(), Error> {
    let mut names: HashSet<String> = current_names.iter().cloned().collect();

    for rename in &plan.renames {
        for (from, to) in rename.steps() {
            if from == to {
                continue;
            }
            if names.contains(to) {
                return Err(Error::TargetExists {
                    source_name: from.to_string(),
                    target: to.to_string(),
                });
            }
            names.remove(from);
            names.insert(to.to_string());
        }
    }

    Ok(())
}

fn digit_count(number: usize) -> usize {
    let mut digits = 1;
    let mut remaining = number / 10;
    while remaining > 0 {
        digits += 1;
        remaining /= 10;
    }
    digits
}
