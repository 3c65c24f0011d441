//! Repeat check for proposed contest words.
//!
//! A new contest should not reuse a word from an earlier one. The proposed
//! word is normalized the same way the encoder does it and looked up through
//! a [`SearchClient`].

use std::fmt;

use tracing::{info, warn};

use crate::client::{ContestMatch, SearchClient, SearchResponse};
use crate::enumeration::strip_enumeration;
use crate::error::CrypticResult;

/// Shown when a failed search carries no form errors.
pub const GENERIC_FAILURE: &str = "Error: Check for repeats failed";

/// Outcome of a repeat check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatsReport {
    NoRepeats,
    PossibleRepeats(Vec<ContestMatch>),
    Failed(String),
}

impl RepeatsReport {
    /// Interpret a search response.
    pub fn from_response(response: SearchResponse) -> Self {
        if !response.success {
            let message = response
                .body
                .errors
                .map(|errors| errors.search)
                .filter(|search| !search.is_empty())
                .map(|search| search.join(", "))
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            return Self::Failed(message);
        }

        if response.body.contests.is_empty() {
            Self::NoRepeats
        } else {
            Self::PossibleRepeats(response.body.contests)
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Markup for the page's repeats target element.
    pub fn to_html(&self) -> String {
        match self {
            Self::NoRepeats => "✅ No repeats found!".to_string(),
            Self::PossibleRepeats(contests) => {
                let links: Vec<String> = contests
                    .iter()
                    .map(|c| format!("<a href=\"{}\">{}</a>", c.url, c.word.replace('<', "&lt;")))
                    .collect();
                format!("⚠️ Possible repeats: {}", links.join(", "))
            }
            Self::Failed(message) => message.clone(),
        }
    }
}

impl fmt::Display for RepeatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRepeats => write!(f, "✅ No repeats found!"),
            Self::PossibleRepeats(contests) => {
                let entries: Vec<String> = contests
                    .iter()
                    .map(|c| format!("{} <{}>", c.word, c.url))
                    .collect();
                write!(f, "⚠️ Possible repeats: {}", entries.join(", "))
            }
            Self::Failed(message) => write!(f, "{}", message),
        }
    }
}

/// Check `word` for earlier contests.
///
/// Returns `Ok(None)` without contacting the server when nothing is left
/// after normalization.
pub async fn check_for_repeats<C>(client: &C, word: &str) -> CrypticResult<Option<RepeatsReport>>
where
    C: SearchClient + ?Sized,
{
    let word = strip_enumeration(word);
    if word.is_empty() {
        return Ok(None);
    }

    let response = client.search(&word).await?;
    let report = RepeatsReport::from_response(response);

    match &report {
        RepeatsReport::Failed(message) => warn!("Repeat check for {:?} failed: {}", word, message),
        RepeatsReport::PossibleRepeats(contests) => {
            info!("Found {} possible repeats of {:?}", contests.len(), word)
        }
        RepeatsReport::NoRepeats => info!("No repeats of {:?}", word),
    }

    Ok(Some(report))
}
