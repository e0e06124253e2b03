//! Identifier helpers and the `snake_case` → `camelCase` rule.

/// Returns `true` if `s` is a bare SQL identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns `true` if `s` is wrapped in double quotes on both sides.
pub fn is_quoted(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('"') && s.ends_with('"')
}

/// Strip one pair of surrounding double quotes, if present on both sides.
pub fn unquote(s: &str) -> &str {
    if is_quoted(s) {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Render a name for use in SQL: bare if it is a plain identifier, otherwise
/// double-quoted with embedded quotes doubled.
pub fn quote_if_needed(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('"', "\"\""))
    }
}

/// Convert a `snake_case` identifier to `camelCase`.
///
/// The first segment is kept as-is. Every following segment gets its first
/// character upper-cased; the rest of the segment is left untouched, so
/// `room_type_ID` becomes `roomTypeID`. Empty segments (from `__` or a
/// leading/trailing `_`) vanish.
pub fn snake_to_camel(s: &str) -> String {
    let mut segments = s.split('_');
    let mut out = String::with_capacity(s.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Resolve the name a table will carry once the rename phase has run.
pub fn renamed_table(name: &str) -> String {
    if name.contains('_') {
        snake_to_camel(name)
    } else {
        name.to_string()
    }
}
