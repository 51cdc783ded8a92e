//! Cursor-aware word splitting.
//!
//! Two tokenizers share one result type: [`quoted::split`] understands shell
//! quoting and escapes, [`plain::split`] splits on any Unicode whitespace.
//! Both report which token a caret position falls inside, which is what an
//! autocomplete driver needs to know which word is being completed.

pub mod plain;
pub mod quoted;

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which tokenizer to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    #[default]
    Quoted,
    Plain,
}

impl SplitMode {
    /// Cursor offset that sits just past the last character of `text`,
    /// measured in the unit this mode compares cursors against.
    pub fn end_offset(self, text: &str) -> isize {
        let end = match self {
            SplitMode::Quoted => text.len(),
            SplitMode::Plain if text.is_ascii() => text.len(),
            SplitMode::Plain => text.chars().count(),
        };
        isize::try_from(end).unwrap_or(isize::MAX)
    }
}

impl FromStr for SplitMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quoted" => Ok(SplitMode::Quoted),
            "plain" => Ok(SplitMode::Plain),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitMode::Quoted => write!(f, "quoted"),
            SplitMode::Plain => write!(f, "plain"),
        }
    }
}

/// ASCII delimiters: space, `\t`, `\n`, `\v`, `\f`, `\r`.
const ASCII_SPACE: [bool; 256] = {
    let mut table = [false; 256];
    table[b' ' as usize] = true;
    table[b'\t' as usize] = true;
    table[b'\n' as usize] = true;
    table[0x0b] = true;
    table[0x0c] = true;
    table[b'\r' as usize] = true;
    table
};

#[inline]
pub(crate) fn is_ascii_space(byte: u8) -> bool {
    ASCII_SPACE[byte as usize]
}

/// Positions a token occupies in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Both ends are inclusive, so a caret sitting right after the last
    /// character of a token still belongs to it.
    pub fn contains(&self, offset: isize) -> bool {
        usize::try_from(offset).is_ok_and(|offset| self.start <= offset && offset <= self.end)
    }
}

/// Tokens plus the index of the token under the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Split {
    pub tokens: Vec<String>,
    /// `None` only when `tokens` is empty.
    pub selected: Option<usize>,
}

impl Split {
    /// Falls back to the last token when nothing was selected and clamps
    /// anything past the end onto it.
    pub(crate) fn new(tokens: Vec<String>, selected: Option<usize>) -> Self {
        let selected = tokens
            .len()
            .checked_sub(1)
            .map(|last| selected.map_or(last, |index| index.min(last)));
        Self { tokens, selected }
    }

    pub fn selected_token(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.tokens.get(index))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Run the tokenizer selected by `mode`.
pub fn split(mode: SplitMode, text: &str, cursor: isize) -> Split {
    match mode {
        SplitMode::Quoted => quoted::split(text, cursor),
        SplitMode::Plain => plain::split(text, cursor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ascii_space_table() {
        for byte in [b' ', b'\t', b'\n', 0x0b, 0x0c, b'\r'] {
            assert!(is_ascii_space(byte), "{byte:#04x} should be a delimiter");
        }
        assert!(!is_ascii_space(b'a'));
        assert!(!is_ascii_space(0x85));
        assert!(!is_ascii_space(0xa0));
    }

    #[test]
    fn test_span_contains_is_inclusive() {
        let span = Span { start: 2, end: 5 };
        assert!(span.contains(2));
        assert!(span.contains(5));
        assert!(!span.contains(1));
        assert!(!span.contains(6));
        assert!(!span.contains(-1));
    }

    #[test]
    fn test_split_new_defaults_and_clamps() {
        let words = || vec!["a".to_string(), "b".to_string()];
        assert_eq!(Split::new(words(), None).selected, Some(1));
        assert_eq!(Split::new(words(), Some(7)).selected, Some(1));
        assert_eq!(Split::new(words(), Some(0)).selected, Some(0));
        assert_eq!(Split::new(Vec::new(), Some(0)).selected, None);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("quoted".parse::<SplitMode>(), Ok(SplitMode::Quoted));
        assert_eq!("PLAIN".parse::<SplitMode>(), Ok(SplitMode::Plain));
        assert_eq!(
            "shell".parse::<SplitMode>(),
            Err(Error::UnknownMode("shell".to_string()))
        );
        assert_eq!(SplitMode::Plain.to_string(), "plain");
    }

    #[test]
    fn test_end_offset_units() {
        let text = "に　ほ";
        assert_eq!(SplitMode::Quoted.end_offset(text), 9);
        assert_eq!(SplitMode::Plain.end_offset(text), 3);
        assert_eq!(SplitMode::Plain.end_offset("abc"), 3);
    }

    #[test]
    fn test_dispatch() {
        let text = "say 'hello there'";
        assert_eq!(
            split(SplitMode::Quoted, text, 0).tokens,
            vec!["say", "hello there"]
        );
        assert_eq!(
            split(SplitMode::Plain, text, 0).tokens,
            vec!["say", "'hello", "there'"]
        );
    }

    fn mode() -> impl Strategy<Value = SplitMode> {
        prop_oneof![Just(SplitMode::Quoted), Just(SplitMode::Plain)]
    }

    proptest! {
        #[test]
        fn prop_selected_index_in_range(
            mode in mode(),
            text in "\\PC{0,40}",
            cursor in -8isize..64,
        ) {
            let result = split(mode, &text, cursor);
            match result.selected {
                Some(index) => prop_assert!(index < result.tokens.len()),
                None => prop_assert!(result.tokens.is_empty()),
            }
        }

        #[test]
        fn prop_single_spaced_words_agree(
            words in prop::collection::vec("[a-z]{1,6}", 0..6),
            cursor in -4isize..48,
        ) {
            let text = words.join(" ");
            prop_assert_eq!(
                split(SplitMode::Quoted, &text, cursor),
                split(SplitMode::Plain, &text, cursor)
            );
        }

        #[test]
        fn prop_extreme_offsets_select_last(mode in mode(), text in "\\PC{0,20}") {
            for cursor in [isize::MIN, -1, isize::MAX] {
                let result = split(mode, &text, cursor);
                prop_assert_eq!(result.selected, result.tokens.len().checked_sub(1));
            }
        }
    }
}
