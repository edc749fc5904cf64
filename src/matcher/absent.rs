use crate::matcher::fragment::{CheckOptions, Fragment};
use crate::normalize::normalize;
use crate::report::CheckError;

/// Negative assertion: no fragment may appear anywhere in `region`.
///
/// Exact-case search only; a match under any casing of the document is
/// already the exact text the caller forbade, so no casing fallback is
/// needed. Empty fragments are skipped (absence of nothing is not
/// provable). Fails fast on the first fragment found.
pub(crate) fn match_absent(
    region: &str,
    fragments: &[Fragment],
    options: &CheckOptions,
) -> Result<(), CheckError> {
    let normalize_options = options.normalize_options();

    for fragment in fragments {
        let needle = normalize(fragment.text(), &normalize_options);
        if needle.is_empty() {
            continue;
        }

        if region.contains(&needle) {
            return Err(CheckError::FoundUnexpected {
                fragment: fragment.text().to_owned(),
                note: fragment.note().map(ToOwned::to_owned),
            });
        }
    }

    Ok(())
}
