/// Excerpt length in characters for list views
pub const EXCERPT_LENGTH: usize = 180;

/// Remove anything that looks like an HTML tag
#[must_use]
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Truncate to at most `max` characters, trimming trailing whitespace and
/// appending an ellipsis when cut.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
    }
}

/// Plain-text excerpt of rich text: tags and markdown markers stripped,
/// whitespace collapsed, then truncated.
#[must_use]
pub fn excerpt(html: &str) -> String {
    let plain: String = strip_tags(html)
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '_' | '>' | '`' | '~' | '[' | ']' | '(' | ')'))
        .collect();
    let collapsed = plain.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&collapsed, EXCERPT_LENGTH)
}

/// Escape `LIKE`/`ILIKE` metacharacters so user input matches literally
#[must_use]
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
