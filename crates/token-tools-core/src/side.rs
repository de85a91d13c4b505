//! Side markers and filename classification.
//!
//! A token image filename carries its side as a marker substring, e.g.
//! `Recon.A.png` / `Recon.B.png`. The prefix before the first marker
//! occurrence is the token identity used for pairing. Matching is purely
//! name-based; file content and extension are never inspected.

pub const HIDDEN_FILE_PREFIX: char = '.';
pub const SIDE_A_MARKER: &str = ".A";
pub const SIDE_B_MARKER: &str = ".B";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn marker(self) -> &'static str {
        match self {
            Side::A => SIDE_A_MARKER,
            Side::B => SIDE_B_MARKER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::A => "Side A",
            Side::B => "Side B",
        }
    }
}

/// Outcome of classifying one filename against the side markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub filename: String,
    pub side: Side,
    /// Prefix before the first marker occurrence. Case-sensitive, exact.
    pub identity: String,
}

/// Classify a filename by its side marker.
///
/// Returns `None` when neither marker appears (the file takes no part in
/// matching). When both markers appear, the earlier occurrence wins; the
/// ambiguity is resolved here once rather than letting the filename join
/// both candidate lists.
pub fn classify(filename: &str) -> Option<Classified> {
    let pos_a = filename.find(SIDE_A_MARKER);
    let pos_b = filename.find(SIDE_B_MARKER);

    let (side, pos) = match (pos_a, pos_b) {
        (None, None) => return None,
        (Some(a), None) => (Side::A, a),
        (None, Some(b)) => (Side::B, b),
        (Some(a), Some(b)) => {
            if a < b {
                (Side::A, a)
            } else {
                (Side::B, b)
            }
        }
    };

    Some(Classified {
        filename: filename.to_string(),
        side,
        identity: filename[..pos].to_string(),
    })
}

/// True when both side markers appear in the filename.
pub fn is_ambiguous(filename: &str) -> bool {
    filename.contains(SIDE_A_MARKER) && filename.contains(SIDE_B_MARKER)
}

pub fn is_hidden(filename: &str) -> bool {
    filename.starts_with(HIDDEN_FILE_PREFIX)
}

/// Extension from the final `.` inclusive, or empty when there is none.
pub fn file_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => &filename[idx..],
        None => "",
    }
}
