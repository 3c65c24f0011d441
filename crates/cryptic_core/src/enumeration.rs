//! Clue enumeration.
//!
//! A cryptic clue is conventionally followed by the letter counts of its
//! answer: `ICE CREAM (3, 5)`, `SELF-AWARE (4-5)`. This module derives that
//! annotation from the clue text itself.

use std::fmt::Write;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Symbols copied verbatim into the enumeration.
pub const INLINE_SEPARATORS: [char; 4] = ['-', '.', '/', '!'];

/// Classification of a single clue character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Counts towards the current word.
    LetterOrDigit,
    /// Ends the current word and is copied into the enumeration.
    Separator(char),
    /// Ends the current word with a comma.
    Space,
    /// Contributes nothing (apostrophes, quotes, other punctuation).
    Other,
}

/// Classify `c` for the enumeration scan.
///
/// Letters and digits use Unicode classification, so accented and non-Latin
/// letters count like any other.
pub fn classify(c: char) -> CharClass {
    if c.is_alphanumeric() {
        CharClass::LetterOrDigit
    } else if INLINE_SEPARATORS.contains(&c) {
        CharClass::Separator(c)
    } else if c == ' ' {
        CharClass::Space
    } else {
        CharClass::Other
    }
}

fn trailing_group() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\(.*\)\s*$").expect("trailing group pattern is valid"))
}

/// Uppercase `clue` and drop a trailing parenthesized group, if any.
pub fn strip_enumeration(clue: &str) -> String {
    let upper = clue.to_uppercase();
    trailing_group().replace(&upper, "").into_owned()
}

/// Run-length accumulator behind [`enumeration_of`].
#[derive(Debug, Default)]
pub struct Enumeration {
    run: usize,
    output: String,
}

impl Enumeration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one classified character.
    pub fn push(&mut self, class: CharClass) {
        match class {
            CharClass::LetterOrDigit => self.run += 1,
            CharClass::Separator(symbol) => {
                self.flush();
                self.output.push(symbol);
            }
            CharClass::Space => {
                if self.run > 0 {
                    self.flush();
                    self.output.push(',');
                }
                if !self.output.ends_with(' ') {
                    self.output.push(' ');
                }
            }
            CharClass::Other => {}
        }
    }

    /// Flush the last word and drop any dangling separators.
    pub fn finish(mut self) -> String {
        self.flush();
        let end = self
            .output
            .trim_end_matches(|c: char| !c.is_ascii_digit())
            .len();
        self.output.truncate(end);
        self.output
    }

    fn flush(&mut self) {
        if self.run > 0 {
            // Writing to a String cannot fail.
            let _ = write!(self.output, "{}", self.run);
            self.run = 0;
        }
    }
}

/// Enumeration of an already normalized clue, without the parentheses.
pub fn enumeration_of(normalized: &str) -> String {
    normalized
        .chars()
        .map(classify)
        .fold(Enumeration::new(), |mut acc, class| {
            acc.push(class);
            acc
        })
        .finish()
}

/// Normalize `clue` and append a freshly derived enumeration.
///
/// ```
/// use cryptic_core::enumerate;
///
/// assert_eq!(enumerate("self-aware"), "SELF-AWARE (4-5)");
/// assert_eq!(enumerate("ICE CREAM (3,5)"), "ICE CREAM (3, 5)");
/// ```
pub fn enumerate(clue: &str) -> String {
    let normalized = strip_enumeration(clue);
    let enumeration = enumeration_of(&normalized);
    debug!("Enumerated {:?} as ({})", normalized, enumeration);
    format!("{} ({})", normalized, enumeration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify('A'), CharClass::LetterOrDigit);
        assert_eq!(classify('7'), CharClass::LetterOrDigit);
        assert_eq!(classify('Ж'), CharClass::LetterOrDigit);
        assert_eq!(classify('-'), CharClass::Separator('-'));
        assert_eq!(classify('!'), CharClass::Separator('!'));
        assert_eq!(classify(' '), CharClass::Space);
        assert_eq!(classify('\''), CharClass::Other);
        assert_eq!(classify('\t'), CharClass::Other);
        assert_eq!(classify('?'), CharClass::Other);
    }

    #[test]
    fn test_two_words() {
        assert_eq!(enumerate("ICE CREAM"), "ICE CREAM (3, 5)");
    }

    #[test]
    fn test_hyphenated() {
        assert_eq!(enumerate("SELF-AWARE"), "SELF-AWARE (4-5)");
    }

    #[test]
    fn test_apostrophe_is_ignored() {
        assert_eq!(enumerate("DON'T STOP"), "DON'T STOP (4, 4)");
    }

    #[test]
    fn test_empty_clue() {
        assert_eq!(enumerate(""), " ()");
    }

    #[test]
    fn test_existing_enumeration_is_replaced() {
        assert_eq!(enumerate("ICE CREAM (3,5)"), enumerate("ICE CREAM"));
        assert_eq!(enumerate("ice cream (9)  "), "ICE CREAM (3, 5)");
    }

    #[test]
    fn test_lowercase_is_uppercased() {
        assert_eq!(enumerate("self-aware"), "SELF-AWARE (4-5)");
    }

    #[test]
    fn test_consecutive_spaces_collapse() {
        assert_eq!(enumerate("ICE   CREAM"), "ICE   CREAM (3, 5)");
        assert_eq!(enumeration_of("A  B   C"), "1, 1, 1");
    }

    #[test]
    fn test_trailing_separator_is_stripped() {
        assert_eq!(enumeration_of("SELF-"), "4");
        assert_eq!(enumeration_of("ICE CREAM "), "3, 5");
        assert_eq!(enumeration_of("WHAT?!"), "4");
    }

    #[test]
    fn test_leading_separator_is_kept() {
        assert_eq!(enumeration_of("-ISH"), "-3");
    }

    #[test]
    fn test_other_separators() {
        assert_eq!(enumeration_of("W/O"), "1/1");
        assert_eq!(enumeration_of("E.G. THIS"), "1.1. 4");
        assert_eq!(enumeration_of("YAHOO! MAIL"), "5! 4");
    }

    #[test]
    fn test_digits_count() {
        assert_eq!(enumerate("catch 22"), "CATCH 22 (5, 2)");
    }

    #[test]
    fn test_non_english_letters_count() {
        assert_eq!(enumerate("café"), "CAFÉ (4)");
        assert_eq!(enumerate("Ελλάδα"), "ΕΛΛΆΔΑ (6)");
        assert_eq!(enumerate("straße"), "STRASSE (7)");
    }

    #[test]
    fn test_only_punctuation() {
        assert_eq!(enumerate("?!"), "?! ()");
    }

    #[test]
    fn test_strip_enumeration() {
        assert_eq!(strip_enumeration("ice cream (3,5)"), "ICE CREAM");
        assert_eq!(strip_enumeration("ICE CREAM"), "ICE CREAM");
        assert_eq!(strip_enumeration("(3)"), "");
    }

    #[test]
    fn test_strip_takes_widest_trailing_group() {
        assert_eq!(strip_enumeration("A (B) C (3)"), "A");
    }

    #[test]
    fn test_enumerate_is_idempotent() {
        for clue in ["ICE CREAM", "self-aware", "DON'T STOP", "", "W/O", "A  B"] {
            let once = enumerate(clue);
            assert_eq!(enumerate(&once), once, "clue: {:?}", clue);
        }
    }
}
