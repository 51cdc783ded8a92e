//! Whitespace splitting without any quoting rules.

use super::{is_ascii_space, Span, Split};
use tracing::trace;

/// Split `text` on Unicode whitespace and find the word under `cursor`.
///
/// Pure ASCII input is scanned byte by byte and `cursor` is a byte offset.
/// Anything else is decoded to codepoints first and `cursor` counts
/// codepoints instead. Both units agree on ASCII text.
pub fn split(text: &str, cursor: isize) -> Split {
    if text.is_ascii() {
        split_ascii(text, cursor)
    } else {
        split_unicode(text, cursor)
    }
}

fn split_ascii(text: &str, cursor: isize) -> Split {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut selected = None;
    let mut i = 0;

    while i < bytes.len() {
        while i < bytes.len() && is_ascii_space(bytes[i]) {
            i += 1;
        }
        if i == bytes.len() {
            break;
        }

        let start = i;
        while i < bytes.len() && !is_ascii_space(bytes[i]) {
            i += 1;
        }

        if selected.is_none() && (Span { start, end: i }).contains(cursor) {
            selected = Some(tokens.len());
        }
        tokens.push(text[start..i].to_string());
    }

    trace!(path = "ascii", tokens = tokens.len(), selected = ?selected, "plain split");
    Split::new(tokens, selected)
}

fn split_unicode(text: &str, cursor: isize) -> Split {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut selected = None;
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if i == chars.len() {
            break;
        }

        let start = i;
        while i < chars.len() && !chars[i].is_whitespace() {
            i += 1;
        }

        if selected.is_none() && (Span { start, end: i }).contains(cursor) {
            selected = Some(tokens.len());
        }
        tokens.push(chars[start..i].iter().collect());
    }

    trace!(path = "unicode", tokens = tokens.len(), selected = ?selected, "plain split");
    Split::new(tokens, selected)
}
