//! Greedy word wrapping by character count

use std::str::SplitWhitespace;

/// Iterator over the lines of a wrapped text, see [`wrap`]
#[derive(Debug, Clone)]
pub struct Wrap<'a> {
    words: SplitWhitespace<'a>,
    pending: Option<&'a str>,
    width: usize,
}

/// Break `text` into lines of at most `width` chars.
///
/// Words are separated by any whitespace and re-joined with a single space.
/// A word that is longer than `width` is put on a line of its own instead of
/// being split. Text without any words produces no lines at all.
///
/// The iterator is lazy; clone it (or call `wrap` again) to start over.
pub fn wrap(text: &str, width: usize) -> Wrap<'_> {
    Wrap {
        words: text.split_whitespace(),
        pending: None,
        width,
    }
}

impl Iterator for Wrap<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.pending.take().or_else(|| self.words.next())?;
        let mut line = String::from(first);
        let mut len = first.chars().count();

        for word in &mut self.words {
            let word_len = word.chars().count();
            if len + 1 + word_len > self.width {
                self.pending = Some(word);
                break;
            }
            line.push(' ');
            line.push_str(word);
            len += 1 + word_len;
        }
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::wrap;

    const LOREM: &str = "The planner builds blocked intervals from existing calendar \
        events, locked planned blocks, travel buffers after locked blocks, and \
        sleep windows (including cross-midnight handling).";

    #[test]
    fn greedy_lines() {
        let lines: Vec<_> = wrap("aaa bb cc d eeee", 6).collect();
        assert_eq!(lines, ["aaa bb", "cc d", "eeee"]);
    }

    #[test]
    fn respects_width() {
        for width in 1..60 {
            for line in wrap(LOREM, width) {
                let len = line.chars().count();
                if len > width {
                    assert!(!line.contains(' '), "{:?} at width {}", line, width);
                }
            }
        }
    }

    proptest::proptest! {
        #[test]
        fn lines_fit_or_hold_one_word(text in "[a-z]{1,12}( {1,3}[a-z]{1,12}){0,30}", width in 1usize..60) {
            for line in wrap(&text, width) {
                proptest::prop_assert!(!line.is_empty());
                proptest::prop_assert_eq!(line.trim(), line.as_str());
                if line.chars().count() > width {
                    proptest::prop_assert!(!line.contains(' '));
                }
            }
            let joined = wrap(&text, width).collect::<Vec<_>>().join(" ");
            let expected = text.split_whitespace().collect::<Vec<_>>().join(" ");
            proptest::prop_assert_eq!(joined, expected);
        }
    }

    #[test]
    fn keeps_all_words() {
        let joined = wrap(LOREM, 30).collect::<Vec<_>>().join(" ");
        let expected = LOREM.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(joined, expected);
    }

    #[test]
    fn long_word_stays_whole() {
        let lines: Vec<_> = wrap("see src/components/CalendarGrid.tsx now", 10).collect();
        assert_eq!(lines, ["see", "src/components/CalendarGrid.tsx", "now"]);
        assert_eq!(lines[1].chars().count(), 31);
    }

    #[test]
    fn empty_input() {
        assert_eq!(wrap("", 80).count(), 0);
        assert_eq!(wrap(" \t\n  ", 80).count(), 0);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let lines: Vec<_> = wrap("Größe über Maß", 10).collect();
        assert_eq!(lines, ["Größe über", "Maß"]);
    }

    #[test]
    fn restartable() {
        let lines = wrap(LOREM, 40);
        let again = lines.clone();
        assert_eq!(lines.collect::<Vec<_>>(), again.collect::<Vec<_>>());
    }
}
