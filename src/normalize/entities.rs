/// Decode the supported alphabet of HTML character references.
///
/// Every printable ASCII character (space through `~`) decodes from its
/// decimal (`&#38;`), hexadecimal (`&#x26;`, hex digits in either case) and,
/// where one exists, named (`&amp;`) form. The non-breaking-space group
/// (`&nbsp;`, `&#160;`, `&#xA0;`) decodes to an ordinary space. Anything
/// outside the alphabet is left in the text untouched.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(offset) = rest.find('&') {
        out.push_str(&rest[..offset]);
        let candidate = &rest[offset..];
        if let Some((decoded, consumed)) = decode_reference(candidate) {
            out.push(decoded);
            rest = &candidate[consumed..];
        } else {
            out.push('&');
            rest = &candidate[1..];
        }
    }

    out.push_str(rest);
    out
}

// Longest supported name is `&verbar;`; anything longer cannot be ours.
const MAX_REFERENCE_LEN: usize = 10;

/// Try to decode one reference at the start of `text` (which begins with
/// `&`). Returns the literal character and the number of bytes consumed.
fn decode_reference(text: &str) -> Option<(char, usize)> {
    let semicolon = text[1..]
        .find(';')
        .map(|position| position + 1)
        .filter(|position| *position <= MAX_REFERENCE_LEN)?;
    let body = &text[1..semicolon];

    let decoded = if let Some(numeric) = body.strip_prefix('#') {
        decode_numeric(numeric)?
    } else {
        named_entity(body)?
    };

    Some((decoded, semicolon + 1))
}

fn decode_numeric(body: &str) -> Option<char> {
    let codepoint = if let Some(hex) = body.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };

    match codepoint {
        0xA0 => Some(' '),
        0x20..=0x7E => char::from_u32(codepoint),
        _ => None,
    }
}

/// Named references for the printable-ASCII alphabet, including the common
/// aliases browsers accept for the same character.
fn named_entity(name: &str) -> Option<char> {
    let decoded = match name {
        "nbsp" => ' ',
        "excl" => '!',
        "quot" => '"',
        "num" => '#',
        "dollar" => '$',
        "percnt" => '%',
        "amp" => '&',
        "apos" => '\'',
        "lpar" => '(',
        "rpar" => ')',
        "ast" | "midast" => '*',
        "plus" => '+',
        "comma" => ',',
        "period" => '.',
        "sol" => '/',
        "colon" => ':',
        "semi" => ';',
        "lt" => '<',
        "equals" => '=',
        "gt" => '>',
        "quest" => '?',
        "commat" => '@',
        "lsqb" | "lbrack" => '[',
        "bsol" => '\\',
        "rsqb" | "rbrack" => ']',
        "Hat" => '^',
        "lowbar" => '_',
        "grave" => '`',
        "lbrace" | "lcub" => '{',
        "verbar" | "vert" => '|',
        "rbrace" | "rcub" => '}',
        _ => return None,
    };
    Some(decoded)
}

#[cfg(test)]
mod tests {
    use super::decode_entities;

    #[test]
    fn decodes_named_decimal_and_hex_forms_identically() {
        assert_eq!(decode_entities("&amp;"), "&");
        assert_eq!(decode_entities("&#38;"), "&");
        assert_eq!(decode_entities("&#x26;"), "&");
        assert_eq!(decode_entities("&#X26;"), "&");
    }

    #[test]
    fn decodes_whole_printable_alphabet() {
        for codepoint in 0x20u32..=0x7E {
            let expected = char::from_u32(codepoint).expect("printable ascii");
            let decimal = format!("&#{codepoint};");
            let hex_lower = format!("&#x{codepoint:x};");
            let hex_upper = format!("&#x{codepoint:X};");

            assert_eq!(decode_entities(&decimal), expected.to_string());
            assert_eq!(decode_entities(&hex_lower), expected.to_string());
            assert_eq!(decode_entities(&hex_upper), expected.to_string());
        }
    }

    #[test]
    fn decodes_mixed_forms_in_one_string() {
        assert_eq!(
            decode_entities("&lbrace;&#37;&#x7D; &lt;b&gt;"),
            "{%} <b>"
        );
    }

    #[test]
    fn decodes_nbsp_group_to_plain_space() {
        assert_eq!(decode_entities("a&nbsp;b"), "a b");
        assert_eq!(decode_entities("a&#160;b"), "a b");
        assert_eq!(decode_entities("a&#xA0;b"), "a b");
    }

    #[test]
    fn leaves_unknown_references_untouched() {
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("&#999999;"), "&#999999;");
        assert_eq!(decode_entities("&#x110000;"), "&#x110000;");
        assert_eq!(decode_entities("tom & jerry"), "tom & jerry");
        assert_eq!(decode_entities("a & b &; &#;"), "a & b &; &#;");
    }

    #[test]
    fn leaves_out_of_alphabet_codepoints_untouched() {
        // Control characters and non-ASCII are outside the closed alphabet.
        assert_eq!(decode_entities("&#9;"), "&#9;");
        assert_eq!(decode_entities("&#8212;"), "&#8212;");
    }

    #[test]
    fn decodes_adjacent_references_without_merging() {
        assert_eq!(decode_entities("&lt;&lt;&gt;"), "<<>");
    }
}
