/// How separator runs are rendered in the canonical document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitespaceMode {
    /// Every separator run becomes a single space.
    #[default]
    Flatten,
    /// Runs containing a line break (or `<br>`) become a single newline;
    /// runs of blanks only become a single space.
    Newlines,
}

#[derive(Clone, Copy, PartialEq)]
enum Separator {
    Blank,
    Break,
}

impl Separator {
    fn upgrade(self, other: Separator) -> Separator {
        if self == Separator::Break || other == Separator::Break {
            Separator::Break
        } else {
            Separator::Blank
        }
    }

    fn render(self, mode: WhitespaceMode) -> char {
        match (mode, self) {
            (WhitespaceMode::Flatten, _) => ' ',
            (WhitespaceMode::Newlines, Separator::Break) => '\n',
            (WhitespaceMode::Newlines, Separator::Blank) => ' ',
        }
    }
}

/// Collapse `<br>` variants, newline sequences, and adjacent blank runs
/// into single canonical separators.
///
/// A maximal run of blanks (space, tab, NBSP), newlines (`\n`, `\r\n`,
/// `\n\r`) and `<br>`-style tags collapses to exactly one separator.
/// Leading and trailing runs are dropped entirely rather than becoming a
/// stray separator.
pub fn standardize_separators(text: &str, mode: WhitespaceMode) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending: Option<Separator> = None;
    let mut position = 0;

    while position < text.len() {
        if let Some(tag_len) = line_break_tag_len(&text[position..]) {
            pending = Some(pending.map_or(Separator::Break, |p| p.upgrade(Separator::Break)));
            position += tag_len;
            continue;
        }

        let character = text[position..].chars().next().unwrap_or(' ');
        match character {
            '\n' | '\r' => {
                pending = Some(pending.map_or(Separator::Break, |p| p.upgrade(Separator::Break)));
            }
            ' ' | '\t' | '\u{A0}' => {
                pending = Some(pending.map_or(Separator::Blank, |p| p.upgrade(Separator::Blank)));
            }
            _ => {
                // A leading run has nothing before it to separate; drop it.
                if let Some(separator) = pending.take()
                    && !out.is_empty()
                {
                    out.push(separator.render(mode));
                }
                out.push(character);
            }
        }
        position += character.len_utf8();
    }

    out
}

/// Length of a `<br>`-style tag at the start of `text`, if present.
/// Accepts `<br>`, `</br>`, `<br/>` and `<br />` with any casing and
/// internal spaces.
fn line_break_tag_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.first() != Some(&b'<') {
        return None;
    }

    let mut index = 1;
    if bytes.get(index) == Some(&b'/') {
        index += 1;
    }
    let is_br = bytes.get(index).is_some_and(|b| b.eq_ignore_ascii_case(&b'b'))
        && bytes.get(index + 1).is_some_and(|b| b.eq_ignore_ascii_case(&b'r'));
    if !is_br {
        return None;
    }
    index += 2;

    while bytes.get(index) == Some(&b' ') {
        index += 1;
    }
    if bytes.get(index) == Some(&b'/') {
        index += 1;
    }
    while bytes.get(index) == Some(&b' ') {
        index += 1;
    }

    (bytes.get(index) == Some(&b'>')).then_some(index + 1)
}
