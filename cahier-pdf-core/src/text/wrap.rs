//! Greedy line breaking against a width budget

/// Break `text` into lines no wider than `max_width` according to
/// `measure`.
///
/// Words are added to the current line while the line still fits; the
/// first word that does not fit starts a new line. A word that is wider
/// than `max_width` on its own is split between characters. Explicit
/// newlines start a new line. A single character wider than the budget is
/// the only case where a line can exceed it, since it cannot be split
/// further.
pub fn wrap_text<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();

    for (index, paragraph) in text.split('\n').enumerate() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = place_word(word, max_width, &measure, &mut lines);
                continue;
            }

            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current = place_word(word, max_width, &measure, &mut lines);
            }
        }

        if !current.is_empty() {
            lines.push(current);
        } else if index > 0 && paragraph.trim().is_empty() {
            // Keep blank lines between paragraphs
            lines.push(String::new());
        }
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Start a line with `word`, hard-splitting it when it is too wide.
/// Completed chunks go to `lines`; the remainder is returned.
fn place_word<F>(word: &str, max_width: f64, measure: &F, lines: &mut Vec<String>) -> String
where
    F: Fn(&str) -> f64,
{
    if measure(word) <= max_width {
        return word.to_string();
    }

    let mut chunk = String::new();
    for ch in word.chars() {
        chunk.push(ch);
        if measure(&chunk) > max_width && chunk.chars().count() > 1 {
            chunk.pop();
            lines.push(std::mem::take(&mut chunk));
            chunk.push(ch);
        }
    }
    chunk
}
