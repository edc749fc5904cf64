use crate::report::format::{PlainFormatter, render_error};
use serde::Serialize;
use std::fmt;

/// Failure modes surfaced by the content-matching engine.
///
/// Every variant carries the literal expected value(s) and whatever found
/// context is available; the `Display` output is a stable exact-text
/// contract consumed by calling test frameworks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum CheckError {
    /// A `starts_after`/`ends_before` anchor occurred zero or multiple
    /// times in the canonical document.
    #[serde(rename = "E_BOUNDARY_NOT_FOUND")]
    BoundaryNotFound { anchor: String, occurrences: usize },
    /// Fragment absent under both exact and case-insensitive search.
    #[serde(rename = "E_NOT_FOUND")]
    NotFound {
        fragment: String,
        note: Option<String>,
        surrounding: Vec<SurroundingCheck>,
    },
    /// Fragment present only under a case-insensitive search.
    #[serde(rename = "E_CASING_MISMATCH")]
    CasingMismatch { expected: String, found: String },
    /// Fragment present in the document, but only before the current
    /// ordered-search position.
    #[serde(rename = "E_WRONG_ORDER")]
    FoundWrongOrder { fragment: String, position: usize },
    /// Negative-match fragment found when it should be absent.
    #[serde(rename = "E_UNEXPECTED_PRESENT")]
    FoundUnexpected {
        fragment: String,
        note: Option<String>,
    },
    /// Caller usage error (e.g. repeating-element count below one).
    #[serde(rename = "E_USAGE")]
    Usage { message: String },
    /// Repeating-element opening-tag count did not match.
    #[serde(rename = "E_WRONG_OPEN_COUNT")]
    WrongOpenCount {
        tag: String,
        expected: i64,
        found: i64,
    },
    /// Opening count matched but closing-tag count did not; an element was
    /// opened and never properly closed (or closed too often).
    #[serde(rename = "E_WRONG_CLOSE_COUNT")]
    WrongCloseCount {
        tag: String,
        expected: i64,
        found: i64,
    },
}

/// One neighbouring fragment check attached to a `NotFound` diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurroundingCheck {
    pub relation: Relation,
    pub text: String,
}

/// Whether a surrounding fragment was matched before the failing one or
/// was still pending after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Before,
    After,
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_error(self, &PlainFormatter))
    }
}

impl std::error::Error for CheckError {}
