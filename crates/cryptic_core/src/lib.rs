//! # cryptic_core
//!
//! Helpers behind the cryptic clue contest pages.
//!
//! ## Features
//!
//! - **Enumeration**: derive `(3, 5)`-style letter counts from a clue
//! - **Warning**: detect submissions missing their enumeration
//! - **Repeats**: check a proposed contest word against earlier contests
//! - **Tables**: click-to-sort leaderboard columns
//! - **Reveal**: unhide clicked explanations
//!
//! ## Example
//!
//! ```rust
//! use cryptic_core::{enumerate, has_enumeration};
//!
//! let clue = enumerate("Don't stop");
//! assert_eq!(clue, "DON'T STOP (4, 4)");
//! assert!(has_enumeration(&clue));
//! ```

pub mod adapter;
pub mod client;
pub mod config;
pub mod enumeration;
pub mod error;
pub mod mock;
pub mod repeats;
pub mod reveal;
pub mod table;
pub mod warning;

pub use adapter::{EnumerateAction, Field, TextField, WarningAction};
pub use client::{ContestMatch, HttpSearchClient, SearchClient, SearchResponse};
pub use config::{CrypticConfig, SearchConfig};
pub use enumeration::{classify, enumerate, enumeration_of, strip_enumeration, CharClass};
pub use error::{CrypticError, CrypticResult};
pub use mock::MockSearchClient;
pub use repeats::{check_for_repeats, RepeatsReport};
pub use reveal::{reveal_explanation, ClassList};
pub use table::{compare_values, SortDirection, SortState, Table};
pub use warning::{has_enumeration, EnumerationWarning};
