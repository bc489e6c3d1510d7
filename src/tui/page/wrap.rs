// Word wrapping by terminal display width

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap. Words longer than `width` are split at character
/// boundaries. Whitespace runs collapse to a single space.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut chunks = split_by_width(word, width);
            // Last chunk stays open so following words can join it
            let tail = chunks.pop().unwrap_or_default();
            lines.extend(chunks);
            current_width = tail.width();
            current = tail;
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed > width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_by_width(word: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0;

    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if chunk_width + w > width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(c);
        chunk_width += w;
    }

    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

/// Display width of a string
pub fn display_width(text: &str) -> usize {
    text.width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 15);
        assert_eq!(lines, vec!["the quick brown", "fox jumps over", "the lazy dog"]);
    }

    #[test]
    fn never_exceeds_width() {
        let text = "Empowering women through skill development and entrepreneurship in \
                    fashion design, culinary arts, and sustainable agriculture.";
        for width in [1, 5, 12, 20, 33, 80] {
            for line in wrap(text, width) {
                assert!(line.width() <= width, "{line:?} wider than {width}");
            }
        }
    }

    #[test]
    fn splits_long_words() {
        let lines = wrap("abcdefghij xy", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn long_word_tail_joins_next_word() {
        let lines = wrap("abcdefg hi", 5);
        assert_eq!(lines, vec!["abcde", "fg hi"]);
    }

    #[test]
    fn counts_wide_characters() {
        // Each ideograph occupies two columns
        let lines = wrap("日本語 テキスト", 6);
        assert_eq!(lines, vec!["日本語", "テキス", "ト"]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   \n\t ", 10).is_empty());
    }
}
