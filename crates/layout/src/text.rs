//! Greedy line breaking over the standard font metrics.

use crate::fonts::text_width;
use orcamento_style::font::FontWeight;

/// Breaks `text` into lines no wider than `max_width` points.
///
/// `\n` always starts a new line. Runs of spaces collapse to one, and a word
/// wider than the line is split between characters. A non-positive
/// `max_width` disables wrapping. Empty text yields no lines.
pub fn wrap_text(text: &str, weight: FontWeight, size: f32, max_width: f32) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for hard_line in text.split('\n') {
        let hard_line = hard_line.strip_suffix('\r').unwrap_or(hard_line);
        if max_width <= 0.0 {
            lines.push(hard_line.split_whitespace().collect::<Vec<_>>().join(" "));
            continue;
        }
        wrap_hard_line(hard_line, weight, size, max_width, &mut lines);
    }
    lines
}

fn wrap_hard_line(
    line: &str,
    weight: FontWeight,
    size: f32,
    max_width: f32,
    out: &mut Vec<String>,
) {
    let mut current = String::new();
    for word in line.split_whitespace() {
        let candidate_width = if current.is_empty() {
            text_width(word, weight, size)
        } else {
            text_width(&current, weight, size) + text_width(" ", weight, size) + text_width(word, weight, size)
        };

        if candidate_width <= max_width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }

        if text_width(word, weight, size) <= max_width {
            current.push_str(word);
        } else {
            let mut pieces = break_word(word, weight, size, max_width);
            current = pieces.pop().unwrap_or_default();
            out.extend(pieces);
        }
    }
    out.push(current);
}

/// Splits a single word into chunks that each fit `max_width`. Every chunk
/// holds at least one character.
fn break_word(word: &str, weight: FontWeight, size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;
    for ch in word.chars() {
        let mut buf = [0u8; 4];
        let w = text_width(ch.encode_utf8(&mut buf), weight, size);
        if current_width + w > max_width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            current_width = 0.0;
        }
        current.push(ch);
        current_width += w;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("Quote: 42", FontWeight::Bold, 11.0, 200.0);
        assert_eq!(lines, vec!["Quote: 42"]);
    }

    #[test]
    fn newlines_force_breaks_and_keep_blank_lines() {
        let lines = wrap_text("Line1\n\nLine2", FontWeight::Regular, 10.0, 500.0);
        assert_eq!(lines, vec!["Line1", "", "Line2"]);
    }

    #[test]
    fn wraps_between_words() {
        // "aaaa" at 10pt regular is 22.24pt wide, a space 2.78pt.
        let lines = wrap_text("aaaa aaaa aaaa", FontWeight::Regular, 10.0, 50.0);
        assert_eq!(lines, vec!["aaaa aaaa", "aaaa"]);
        for line in &lines {
            assert!(text_width(line, FontWeight::Regular, 10.0) <= 50.0);
        }
    }

    #[test]
    fn long_word_is_split_by_characters() {
        let lines = wrap_text("0123456789", FontWeight::Regular, 10.0, 20.0);
        // Each digit is 5.56pt, so three fit per line.
        assert_eq!(lines, vec!["012", "345", "678", "9"]);
    }

    #[test]
    fn collapses_spaces_and_handles_empty() {
        assert_eq!(wrap_text("a   b", FontWeight::Regular, 10.0, 100.0), vec!["a b"]);
        assert!(wrap_text("", FontWeight::Regular, 10.0, 100.0).is_empty());
    }

    #[test]
    fn non_positive_width_disables_wrapping() {
        let lines = wrap_text("one two three", FontWeight::Regular, 10.0, 0.0);
        assert_eq!(lines, vec!["one two three"]);
    }
}
