use crate::normalize::{NormalizeOptions, WhitespaceMode, normalize};
use crate::report::error::{CheckError, Relation, SurroundingCheck};

/// One expected (or forbidden) literal substring, optionally paired with
/// supplemental diagnostic text surfaced when the check fails.
///
/// Constructors normalize the caller's dynamic shapes (bare string, pair
/// with a note) at the entry boundary so the matching algorithm never
/// branches on input shape. Literal `{`/`}` in a fragment are plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Literal(String),
    Annotated { text: String, note: String },
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Literal(text) => text,
            Fragment::Annotated { text, .. } => text,
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            Fragment::Literal(_) => None,
            Fragment::Annotated { note, .. } => Some(note),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Literal(text.to_owned())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Literal(text)
    }
}

impl From<(&str, &str)> for Fragment {
    fn from((text, note): (&str, &str)) -> Self {
        Fragment::Annotated {
            text: text.to_owned(),
            note: note.to_owned(),
        }
    }
}

impl From<(String, String)> for Fragment {
    fn from((text, note): (String, String)) -> Self {
        Fragment::Annotated { text, note }
    }
}

/// Explicit tunables for one assertion call. No ambient module state: how
/// much context a failure message carries is always decided here.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Bound the search region to everything after this anchor.
    pub starts_after: Option<String>,
    /// Bound the search region to everything before this anchor.
    pub ends_before: Option<String>,
    /// Search each fragment independently instead of in sequence.
    pub ignore_ordering: bool,
    /// Characters of surrounding context shown on a casing mismatch.
    pub context_chars: usize,
    /// Neighbouring fragment checks attached to a not-found failure.
    pub context_fragments: usize,
    /// Separator rendering for the canonical document.
    pub whitespace: WhitespaceMode,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            starts_after: None,
            ends_before: None,
            ignore_ordering: false,
            context_chars: 10,
            context_fragments: 2,
            whitespace: WhitespaceMode::Flatten,
        }
    }
}

impl CheckOptions {
    pub(crate) fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            whitespace: self.whitespace,
        }
    }
}

/// Positive assertion: every fragment must be present in `region`, in
/// sequence unless `ignore_ordering` is set. Fails fast on the first
/// fragment that cannot be satisfied.
pub(crate) fn match_fragments(
    region: &str,
    fragments: &[Fragment],
    options: &CheckOptions,
) -> Result<(), CheckError> {
    let normalize_options = options.normalize_options();
    let mut cursor = 0usize;

    for (index, fragment) in fragments.iter().enumerate() {
        let needle = normalize(fragment.text(), &normalize_options);
        // An empty fragment is "no check requested", not a trivial match
        // at the current position; the cursor must not move.
        if needle.is_empty() {
            continue;
        }

        if options.ignore_ordering {
            if region.find(&needle).is_none() {
                return Err(missing_fragment_error(
                    region, fragments, index, fragment, &needle, options,
                ));
            }
            continue;
        }

        match region[cursor..].find(&needle) {
            Some(relative) => {
                cursor += relative + needle.len();
            }
            None => {
                // The remainder missed, so any exact occurrence starts
                // before the cursor (it may straddle it). Only when the
                // whole region misses is the casing fallback in play.
                if let Some(position) = region.find(&needle) {
                    return Err(CheckError::FoundWrongOrder {
                        fragment: fragment.text().to_owned(),
                        position,
                    });
                }
                return Err(missing_fragment_error(
                    region, fragments, index, fragment, &needle, options,
                ));
            }
        }
    }

    Ok(())
}

/// Distinguish "wrong casing" from "truly absent" for a fragment that has
/// no exact-case occurrence anywhere in the region.
fn missing_fragment_error(
    region: &str,
    fragments: &[Fragment],
    index: usize,
    fragment: &Fragment,
    needle: &str,
    options: &CheckOptions,
) -> CheckError {
    // ASCII-only folding keeps byte offsets aligned with the original
    // region, so the found window can be sliced straight out of it.
    let folded_region = region.to_ascii_lowercase();
    let folded_needle = needle.to_ascii_lowercase();

    if let Some(position) = folded_region.find(&folded_needle) {
        return CheckError::CasingMismatch {
            expected: fragment.text().to_owned(),
            found: context_window(region, position, needle.len(), options.context_chars),
        };
    }

    let surrounding = if fragments.len() > 1 {
        collect_surrounding(fragments, index, options.context_fragments)
    } else {
        Vec::new()
    };

    CheckError::NotFound {
        fragment: fragment.text().to_owned(),
        note: fragment.note().map(ToOwned::to_owned),
        surrounding,
    }
}

/// Slice the found text plus up to `context_chars` characters each side,
/// marked with ellipses.
fn context_window(region: &str, start: usize, len: usize, context_chars: usize) -> String {
    let end = (start + len).min(region.len());

    let mut window_start = start;
    for _ in 0..context_chars {
        match region[..window_start].chars().next_back() {
            Some(character) => window_start -= character.len_utf8(),
            None => break,
        }
    }
    let mut window_end = end;
    for _ in 0..context_chars {
        match region[window_end..].chars().next() {
            Some(character) => window_end += character.len_utf8(),
            None => break,
        }
    }

    format!("... {} ...", &region[window_start..window_end])
}

/// Up to `count` previously checked fragments and up to `count` pending
/// ones around the failing index, for "you are here" diagnostics.
fn collect_surrounding(
    fragments: &[Fragment],
    index: usize,
    count: usize,
) -> Vec<SurroundingCheck> {
    let mut surrounding = Vec::new();

    let before_start = index.saturating_sub(count);
    for fragment in &fragments[before_start..index] {
        if fragment.text().is_empty() {
            continue;
        }
        surrounding.push(SurroundingCheck {
            relation: Relation::Before,
            text: fragment.text().to_owned(),
        });
    }

    let after_end = fragments.len().min(index + 1 + count);
    for fragment in &fragments[index + 1..after_end] {
        if fragment.text().is_empty() {
            continue;
        }
        surrounding.push(SurroundingCheck {
            relation: Relation::After,
            text: fragment.text().to_owned(),
        });
    }

    surrounding
}
