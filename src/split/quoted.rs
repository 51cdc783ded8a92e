//! Shell-word splitting with single quotes, double quotes and backslash
//! escapes. No expansion of any kind happens here.

use super::{is_ascii_space, Split};
use tracing::trace;

/// Split `text` into shell-style words and find the word under `cursor`.
///
/// `cursor` is a byte offset into `text`. An offset pointing inside a
/// multi-byte character selects whatever that character belongs to.
/// Unterminated quotes and a trailing backslash never drop content: the
/// pending word is still emitted.
pub fn split(text: &str, cursor: isize) -> Split {
    let cursor = usize::try_from(cursor).ok();
    let mut tokens = Vec::with_capacity(estimate_words(text));
    let mut current = String::new();
    let mut pending = false;
    let mut escaped = false;
    let mut in_double = false;
    let mut in_single = false;
    let mut selected = None;

    for (pos, ch) in text.char_indices() {
        if selected.is_none() && cursor.is_some_and(|c| pos <= c && c < pos + ch.len_utf8()) {
            selected = Some(tokens.len());
        }

        if escaped {
            escaped = false;
            pending = true;
            current.push(match ch {
                'n' if in_double => '\n',
                't' if in_double => '\t',
                _ => ch,
            });
            continue;
        }

        match ch {
            '\\' if !in_single => escaped = true,
            '"' if !in_single => {
                pending |= in_double;
                in_double = !in_double;
            }
            '\'' if !in_double => {
                pending |= in_single;
                in_single = !in_single;
            }
            c if c.is_ascii() && is_ascii_space(c as u8) && !in_double && !in_single => {
                if pending {
                    tokens.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }

    if selected.is_none() && cursor == Some(text.len()) {
        selected = Some(tokens.len());
    }

    if escaped {
        current.push('\\');
    }
    if pending || escaped || in_double || in_single {
        tokens.push(current);
    }

    trace!(tokens = tokens.len(), selected = ?selected, "quoted split");
    Split::new(tokens, selected)
}

/// Rough word count used to size the output. Quotes are ignored, so quoted
/// whitespace makes this overshoot.
fn estimate_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for &byte in text.as_bytes() {
        let space = is_ascii_space(byte);
        if !space && !in_word {
            count += 1;
        }
        in_word = !space;
    }
    count
}
