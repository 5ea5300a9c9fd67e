/// Column width used for responses shown in the chat panel.
pub const SCREEN_WIDTH: usize = 90;
/// Column width used when laying text out on a PDF page.
pub const PAGE_WIDTH: usize = 95;

/// Re-wrap `text` so no line is wider than `width` characters.
///
/// Blank (or whitespace-only) lines come out empty, lines that already fit are
/// left untouched, and longer lines are packed greedily word by word. A single
/// word wider than `width` is kept whole on its own line.
pub fn reflow(text: &str, width: usize) -> String {
    let mut out: Vec<String> = Vec::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            out.push(String::new());
        } else if line.chars().count() <= width {
            out.push(line.to_string());
        } else {
            out.extend(wrap_line(line, width));
        }
    }
    out.join("\n")
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
