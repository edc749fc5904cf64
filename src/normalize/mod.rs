pub mod entities;
pub mod whitespace;

pub use entities::decode_entities;
pub use whitespace::{WhitespaceMode, standardize_separators};

/// Options controlling canonicalization of raw markup text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    pub whitespace: WhitespaceMode,
}

/// Canonicalize raw markup text: decode the supported character-reference
/// alphabet, then standardize separator runs.
pub fn normalize(text: &str, options: &NormalizeOptions) -> String {
    standardize_separators(&decode_entities(text), options.whitespace)
}

#[cfg(test)]
mod tests {
    use super::{NormalizeOptions, WhitespaceMode, normalize};

    #[test]
    fn decodes_then_collapses() {
        let options = NormalizeOptions::default();
        assert_eq!(
            normalize("a&nbsp;&nbsp;b<br>\nc", &options),
            "a b c"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let options = NormalizeOptions {
            whitespace: WhitespaceMode::Newlines,
        };
        let inputs = [
            "<h1>Title</h1>\r\n<p>Body&nbsp;text &amp; more</p>",
            "  leading <br /> and trailing  ",
            "plain",
            "",
        ];

        for input in inputs {
            let once = normalize(input, &options);
            let twice = normalize(&once, &options);
            assert_eq!(once, twice, "input {input:?}");
        }
    }

    #[test]
    fn entity_forms_are_interchangeable() {
        let options = NormalizeOptions::default();
        assert_eq!(
            normalize("&lt;p&gt;", &options),
            normalize("&#60;p&#62;", &options)
        );
        assert_eq!(
            normalize("&#60;p&#62;", &options),
            normalize("&#x3C;p&#x3e;", &options)
        );
    }
}
