/// Greedy word wrap. Words longer than `width` are split across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        let len = chars.len();
        if current_len > 0 && current_len + 1 + len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars);
        current_len += len;
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Shortens `s` to at most `max_chars` characters, ending with `…` when cut.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    match max_chars {
        0 => String::new(),
        n => s.chars().take(n - 1).chain(std::iter::once('…')).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_joins_words_up_to_width() {
        assert_eq!(wrap("missing ENDMDL near line", 14), vec!["missing ENDMDL", "near line"]);
    }

    #[test]
    fn wrap_splits_long_paths() {
        assert_eq!(wrap("ab /very/long/path", 6), vec!["ab", "/very/", "long/p", "ath"]);
    }

    #[test]
    fn wrap_empty_text_yields_one_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_leaves_short_text() {
        assert_eq!(truncate("A:12:OG", 7), "A:12:OG");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("A:1234:HE21", 6), "A:123…");
        assert_eq!(truncate("hb", 0), "");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("ÅÅÅÅ", 3), "ÅÅ…");
    }
}
