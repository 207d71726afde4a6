/// Word-wrap `text` to at most `width` display columns per line. Words longer
/// than the width are hard-split so pathological input cannot overflow a
/// panel.
pub(crate) fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        // Hard-split oversized words.
        while char_count(word) > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split_at = word
                .char_indices()
                .nth(width)
                .map(|(idx, _)| idx)
                .unwrap_or(word.len());
            lines.push(word[..split_at].to_string());
            word = &word[split_at..];
        }

        if current.is_empty() {
            current.push_str(word);
        } else if char_count(&current) + 1 + char_count(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `text` and clamp it to `max_lines`, marking truncation with a
/// trailing ellipsis. This is the "display lines" rule the view-model line
/// limits refer to.
pub(crate) fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_to_width(text, width);
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        while char_count(last) + 1 > width && !last.is_empty() {
            last.pop();
        }
        last.push('…');
    }
    lines
}

/// Column count of a line. The preview treats every char as one column;
/// wide glyphs merely wrap a little early.
fn char_count(text: &str) -> usize {
    text.chars().count()
}
