pub mod absent;
pub mod element;
pub mod fragment;

pub use fragment::{CheckOptions, Fragment};

use crate::document::CanonicalDocument;
use crate::report::CheckError;

/// Assert that every fragment is present in `body`, in sequence unless
/// `options.ignore_ordering` is set. Accepts anything convertible to
/// [`Fragment`]: bare strings or `(text, note)` pairs.
pub fn check_contains<I>(body: &str, fragments: I, options: &CheckOptions) -> Result<(), CheckError>
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let fragments: Vec<Fragment> = fragments.into_iter().map(Into::into).collect();
    let document = CanonicalDocument::build(body, &options.normalize_options());
    let region = document.region(options.starts_after.as_deref(), options.ends_before.as_deref())?;
    fragment::match_fragments(region, &fragments, options)
}

/// Assert that none of the fragments appears in `body`. Anchors in
/// `options` still scope the search; ordering is irrelevant here.
pub fn check_absent<I>(body: &str, fragments: I, options: &CheckOptions) -> Result<(), CheckError>
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let fragments: Vec<Fragment> = fragments.into_iter().map(Into::into).collect();
    let document = CanonicalDocument::build(body, &options.normalize_options());
    let region = document.region(options.starts_after.as_deref(), options.ends_before.as_deref())?;
    absent::match_absent(region, &fragments, options)
}

/// Assert that `tag` (bare, opening or closing form) occurs exactly
/// `expected_count` times in `body` as a properly paired element.
pub fn check_element_count(body: &str, tag: &str, expected_count: i64) -> Result<(), CheckError> {
    let options = CheckOptions::default();
    let document = CanonicalDocument::build(body, &options.normalize_options());
    element::count_element(document.text(), tag, expected_count)
}
