//! Missing-enumeration warning for clue submissions.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Message shown when a submission does not end with an enumeration.
pub const MISSING_ENUMERATION: &str =
    "This clue doesn't seem to end with an enumeration, e.g. (3, 5)";

fn enumeration_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\([^A-Za-z]*[0-9]+[^A-Za-z]*\)\s*$").expect("enumeration pattern is valid")
    })
}

/// Whether `submission` ends with a parenthesized enumeration.
///
/// The group must hold at least one digit and no ASCII letters, so `(3, 5)`
/// and `(4-5)` pass while `(abc)` does not.
pub fn has_enumeration(submission: &str) -> bool {
    let passed = enumeration_suffix().is_match(submission);
    debug!("Enumeration check {} for {:?}", if passed { "passed" } else { "failed" }, submission);
    passed
}

/// Visibility of the submission form's enumeration warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerationWarning {
    Hidden,
    Shown(String),
}

impl EnumerationWarning {
    pub fn for_submission(submission: &str) -> Self {
        if has_enumeration(submission) {
            Self::Hidden
        } else {
            Self::Shown(MISSING_ENUMERATION.to_string())
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }
}
