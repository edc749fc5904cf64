use crate::report::CheckError;
use regex::Regex;

/// Elements with no closing tag; only opening occurrences are counted.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Repeating-element assertion: the tag must open (and, for non-void
/// elements, close) exactly `expected_count` times in `region`.
///
/// Open-count mismatches are reported before close-count mismatches, so
/// "wrong number of elements" reads differently from "element opened but
/// never properly closed".
pub(crate) fn count_element(region: &str, tag: &str, expected_count: i64) -> Result<(), CheckError> {
    if expected_count < 1 {
        return Err(CheckError::Usage {
            message: format!("expected_count must be >= 1, got {expected_count}"),
        });
    }
    let name = element_name(tag)?;

    let open_pattern = Regex::new(&format!(
        r"(?i)<\s*{}(\s[^>]*)?\s*/?\s*>",
        regex::escape(&name)
    ))
    .map_err(|error| CheckError::Usage {
        message: format!("invalid tag '{tag}': {error}"),
    })?;
    let found_open = open_pattern.find_iter(region).count() as i64;

    if VOID_ELEMENTS.contains(&name.as_str()) {
        if found_open != expected_count {
            return Err(CheckError::WrongOpenCount {
                tag: name,
                expected: expected_count,
                found: found_open,
            });
        }
        return Ok(());
    }

    if found_open != expected_count {
        return Err(CheckError::WrongOpenCount {
            tag: name,
            expected: expected_count,
            found: found_open,
        });
    }

    let close_pattern = Regex::new(&format!(r"(?i)<\s*/\s*{}\s*>", regex::escape(&name)))
        .map_err(|error| CheckError::Usage {
            message: format!("invalid tag '{tag}': {error}"),
        })?;
    let found_close = close_pattern.find_iter(region).count() as i64;

    if found_close != expected_count {
        return Err(CheckError::WrongCloseCount {
            tag: name,
            expected: expected_count,
            found: found_close,
        });
    }

    Ok(())
}

/// Reduce a tag reference (`li`, `<li>`, `</li>`) to its element name.
fn element_name(tag: &str) -> Result<String, CheckError> {
    let mut name = tag.trim();
    if let Some(inner) = name.strip_prefix('<') {
        name = inner.strip_suffix('>').unwrap_or(inner);
    }
    name = name.strip_prefix('/').unwrap_or(name);
    name = name.strip_suffix('/').unwrap_or(name).trim();

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CheckError::Usage {
            message: format!("'{tag}' is not a tag name"),
        });
    }

    Ok(name.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{count_element, element_name};
    use crate::report::CheckError;

    #[test]
    fn tag_reference_forms_normalize_to_one_name() {
        for form in ["li", "<li>", "</li>", "LI", "<LI>", " <li/> "] {
            assert_eq!(element_name(form).expect("parse tag"), "li", "form {form}");
        }
        assert!(element_name("").is_err());
        assert!(element_name("<not a tag>").is_err());
    }

    #[test]
    fn counts_exact_open_close_pairs() {
        count_element("<li>a</li><li>b</li>", "li", 2).expect("two list items");
        count_element("<li>a</li><li>b</li>", "<li>", 2).expect("opening-tag form");
        count_element("<li>a</li><li>b</li>", "</li>", 2).expect("closing-tag form");
    }

    #[test]
    fn tolerates_attributes_and_internal_whitespace() {
        count_element(r#"<li class="x">a</li><li id="y" >b</ li >"#, "li", 2)
            .expect("attributes and spacing are irrelevant");
    }

    #[test]
    fn does_not_count_tags_with_a_longer_name() {
        let error = count_element("<lint></lint><li>a</li>", "li", 2)
            .expect_err("only one real <li>");
        assert_eq!(
            error,
            CheckError::WrongOpenCount {
                tag: "li".to_owned(),
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn void_elements_skip_close_counting() {
        count_element("<hr><hr><hr>", "<hr>", 3).expect("three rules");
        count_element("<hr/><hr />", "hr", 2).expect("self-closing forms");

        let error = count_element("<hr><hr><hr>", "<hr>", 2).expect_err("three, not two");
        assert_eq!(
            error,
            CheckError::WrongOpenCount {
                tag: "hr".to_owned(),
                expected: 2,
                found: 3,
            }
        );
    }

    #[test]
    fn distinguishes_wrong_total_from_unbalanced() {
        let document = "<li></li> <li>";

        let error = count_element(document, "<li>", 1).expect_err("two openings");
        assert_eq!(
            error,
            CheckError::WrongOpenCount {
                tag: "li".to_owned(),
                expected: 1,
                found: 2,
            }
        );

        let error = count_element(document, "<li>", 2).expect_err("one closing");
        assert_eq!(
            error,
            CheckError::WrongCloseCount {
                tag: "li".to_owned(),
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn counting_is_case_insensitive_on_tag_names() {
        count_element("<LI>a</LI><li>b</li>", "li", 2).expect("mixed-case markup");
    }

    #[test]
    fn rejects_counts_below_one_as_usage_errors() {
        for bad in [0, -3] {
            let error = count_element("<li></li>", "li", bad).expect_err("invalid count");
            assert!(matches!(error, CheckError::Usage { .. }), "count {bad}");
        }
    }
}
