//! Word and character counts for a text buffer.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub chars: usize,
}

/// Words are whitespace-delimited tokens; characters are every Unicode scalar
/// value in the buffer, whitespace included.
pub fn count(text: &str) -> TextStats {
    TextStats {
        words: text.split_whitespace().count(),
        chars: text.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_padded_text() {
        assert_eq!(
            count("  hello   world  "),
            TextStats {
                words: 2,
                chars: 17
            }
        );
    }

    #[test]
    fn empty_and_blank_buffers() {
        assert_eq!(count(""), TextStats::default());
        assert_eq!(count(" \n\t "), TextStats { words: 0, chars: 4 });
    }

    #[test]
    fn newlines_and_tabs_split_words() {
        assert_eq!(count("one\ntwo\tthree").words, 3);
    }

    #[test]
    fn multibyte_characters_count_once() {
        let stats = count("café naïve");
        assert_eq!(stats.words, 2);
        assert_eq!(stats.chars, 10);
    }
}
