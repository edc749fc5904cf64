use crate::report::error::{CheckError, Relation};

/// One segment of a rendered diagnostic. Formatters decide how each role
/// is presented (a terminal formatter might color them); the matching
/// algorithm never depends on the presentation.
#[derive(Debug, Clone, Copy)]
pub enum Segment<'a> {
    /// The literal text the caller expected (or expected to be absent).
    Expected(&'a str),
    /// Text actually found in the document, already windowed.
    Found(&'a str),
    /// A fragment matched before the failing one.
    Before(&'a str),
    /// A fragment that was still pending after the failing one.
    After(&'a str),
}

/// Pluggable renderer for diagnostic segments.
pub trait DiagnosticFormatter {
    fn render(&self, segment: Segment<'_>) -> String;
}

/// Default formatter: quotes expected/surrounding fragments, passes found
/// context through unchanged.
pub struct PlainFormatter;

impl DiagnosticFormatter for PlainFormatter {
    fn render(&self, segment: Segment<'_>) -> String {
        match segment {
            Segment::Expected(text) | Segment::Before(text) | Segment::After(text) => {
                format!("'{text}'")
            }
            Segment::Found(text) => text.to_owned(),
        }
    }
}

/// Compose the full failure message for an error. `CheckError::Display`
/// uses this with `PlainFormatter`; callers wanting colored output pass
/// their own formatter.
pub fn render_error(error: &CheckError, formatter: &dyn DiagnosticFormatter) -> String {
    match error {
        CheckError::BoundaryNotFound {
            anchor,
            occurrences: 0,
        } => format!(
            "anchor {} not found in document",
            formatter.render(Segment::Expected(anchor))
        ),
        CheckError::BoundaryNotFound {
            anchor,
            occurrences,
        } => format!(
            "anchor {} found {occurrences} times in document, expected exactly one",
            formatter.render(Segment::Expected(anchor))
        ),
        CheckError::NotFound {
            fragment,
            note,
            surrounding,
        } => {
            let mut message = format!(
                "fragment {} not found in document",
                formatter.render(Segment::Expected(fragment))
            );
            if let Some(note) = note {
                message.push_str(&format!(" ({note})"));
            }
            for check in surrounding {
                match check.relation {
                    Relation::Before => message.push_str(&format!(
                        "\n  matched before: {}",
                        formatter.render(Segment::Before(&check.text))
                    )),
                    Relation::After => message.push_str(&format!(
                        "\n  pending after: {}",
                        formatter.render(Segment::After(&check.text))
                    )),
                }
            }
            message
        }
        CheckError::CasingMismatch { expected, found } => format!(
            "fragment {} only matches case-insensitively: {}",
            formatter.render(Segment::Expected(expected)),
            formatter.render(Segment::Found(found))
        ),
        CheckError::FoundWrongOrder { fragment, position } => format!(
            "fragment {} found at offset {position}, before the current search position (out of order)",
            formatter.render(Segment::Expected(fragment))
        ),
        CheckError::FoundUnexpected { fragment, note } => {
            let mut message = format!(
                "fragment {} unexpectedly present in document",
                formatter.render(Segment::Expected(fragment))
            );
            if let Some(note) = note {
                message.push_str(&format!(" ({note})"));
            }
            message
        }
        CheckError::Usage { message } => message.clone(),
        CheckError::WrongOpenCount {
            tag,
            expected,
            found,
        } => format!("expected {expected} <{tag}> element(s), found {found} opening tag(s)"),
        CheckError::WrongCloseCount {
            tag,
            expected,
            found,
        } => format!(
            "expected {expected} </{tag}> closing tag(s) for <{tag}>, found {found}"
        ),
    }
}
