use crate::normalize::{NormalizeOptions, normalize};
use crate::report::CheckError;

/// A response body after canonicalization.
///
/// Built fresh per assertion call; the same raw input and options always
/// yield the same canonical text, and the raw input is never mutated.
#[derive(Debug, Clone)]
pub struct CanonicalDocument {
    text: String,
    options: NormalizeOptions,
}

impl CanonicalDocument {
    pub fn build(raw: &str, options: &NormalizeOptions) -> Self {
        Self {
            text: normalize(raw, options),
            options: *options,
        }
    }

    /// Full canonical text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The sub-region bounded by the given anchors.
    ///
    /// Each anchor is normalized with the document's own options before
    /// searching and must occur exactly once (case-sensitive) in the text
    /// it applies to. `ends_before` is located inside the already
    /// start-trimmed text when both anchors are given. Empty anchors are
    /// treated as not supplied.
    pub fn region(
        &self,
        starts_after: Option<&str>,
        ends_before: Option<&str>,
    ) -> Result<&str, CheckError> {
        let mut region = self.text.as_str();

        if let Some(anchor) = starts_after.filter(|anchor| !anchor.is_empty()) {
            let needle = normalize(anchor, &self.options);
            let (_, end) = locate_anchor(region, &needle)?;
            region = &region[end..];
        }
        if let Some(anchor) = ends_before.filter(|anchor| !anchor.is_empty()) {
            let needle = normalize(anchor, &self.options);
            let (start, _) = locate_anchor(region, &needle)?;
            region = &region[..start];
        }

        Ok(region)
    }
}

/// Locate the single occurrence of `anchor` in `text`, returning its byte
/// range. Zero or multiple occurrences are a `BoundaryNotFound` error.
fn locate_anchor(text: &str, anchor: &str) -> Result<(usize, usize), CheckError> {
    let mut matches = text.match_indices(anchor);
    let first = matches.next();
    let ambiguous = matches.next().is_some();

    match first {
        Some((start, _)) if !ambiguous => Ok((start, start + anchor.len())),
        _ => Err(CheckError::BoundaryNotFound {
            anchor: anchor.to_owned(),
            occurrences: text.match_indices(anchor).count(),
        }),
    }
}
