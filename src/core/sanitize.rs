// src/core/sanitize.rs

/// Characters not allowed in file names on common filesystems.
const DISALLOWED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

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

/// Replace each disallowed character with `_`. Everything else is kept,
/// including spaces and non-ASCII letters.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if DISALLOWED.contains(&c) { '_' } else { c })
        .collect()
}
