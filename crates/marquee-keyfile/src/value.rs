//! Value decoding: escape sequences and `;`-separated lists.

const LIST_SEPARATOR: char = ';';

/// Decodes the escape sequences a key file value may contain.
///
/// Supported sequences are `\s`, `\n`, `\t`, `\r` and `\\`. The error string
/// describes the offending sequence.
pub(crate) fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => return Err(format!("unknown escape sequence '\\{}'", other)),
            None => return Err("value ends with a lone backslash".to_string()),
        }
    }

    Ok(out)
}

/// Splits a raw list value on unescaped separators and decodes each item.
///
/// `\;` yields a literal separator inside an item. A trailing separator does
/// not produce an empty last item, so `a;b;` and `a;b` are the same list.
pub(crate) fn split_list(raw: &str) -> Result<Vec<String>, String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(LIST_SEPARATOR) => current.push(LIST_SEPARATOR),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            LIST_SEPARATOR => pieces.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    pieces.push(current);

    if pieces.last().is_some_and(|last| last.is_empty()) {
        pieces.pop();
    }

    pieces.iter().map(|piece| unescape(piece)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_known_sequences() {
        assert_eq!(unescape(r"a\sb\tc\nd\re\\f").unwrap(), "a b\tc\nd\re\\f");
    }

    #[test]
    fn unescape_rejects_unknown_sequence() {
        let err = unescape(r"bad\q").unwrap_err();
        assert!(err.contains("\\q"));
    }

    #[test]
    fn unescape_rejects_trailing_backslash() {
        assert!(unescape("oops\\").is_err());
    }

    #[test]
    fn split_keeps_order() {
        assert_eq!(
            split_list("a.css;b.css;c.css").unwrap(),
            vec!["a.css", "b.css", "c.css"]
        );
    }

    #[test]
    fn split_ignores_trailing_separator() {
        assert_eq!(split_list("a;b;").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn split_empty_value_is_empty_list() {
        assert!(split_list("").unwrap().is_empty());
    }

    #[test]
    fn split_keeps_inner_empty_items() {
        assert_eq!(split_list("a;;b").unwrap(), vec!["a", "", "b"]);
    }

    #[test]
    fn split_escaped_separator() {
        assert_eq!(split_list(r"one\;two;three").unwrap(), vec!["one;two", "three"]);
    }

    #[test]
    fn split_escaped_backslash_before_separator() {
        assert_eq!(split_list(r"dir\\;next").unwrap(), vec!["dir\\", "next"]);
    }
}
