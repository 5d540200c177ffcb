// src/core/sanitize.rs

/// Decode the two entities that survive text capture of result pages.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace('\u{a0}', " ").replace("&amp;", "&")
}

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Canonical form of a captured cell.
pub fn clean_cell(s: &str) -> String {
    normalize_ws(&normalize_entities(s))
}

#[inline]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// A header with no text of its own: `""` or a dedup suffix of it (`"_1"`, `"_2"`, ...).
pub fn is_placeholder_header(h: &str) -> bool {
    let h = h.trim();
    if h.is_empty() { return true; }
    match h.strip_prefix('_') {
        Some(n) => !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}
