//! UTF-8-safe truncation for event payload previews.

/// Default preview length for `ModelEnd`/`ToolEnd` payloads.
pub const PREVIEW_BYTES: usize = 200;

/// Longest prefix of `s` that is at most `max_bytes` bytes and does not
/// split a multi-byte character.
#[inline]
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Bounded preview of `s`, with `...` appended when truncated.
pub fn preview(s: &str) -> String {
    if s.len() <= PREVIEW_BYTES {
        return s.to_owned();
    }
    format!("{}...", truncate_str(s, PREVIEW_BYTES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(preview("hello"), "hello");
    }

    #[test]
    fn ascii_truncated() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn multibyte_boundary_snaps_back() {
        // 'é' is 2 bytes; cutting inside it must snap to the previous boundary
        let s = "café au lait";
        assert_eq!(truncate_str(s, 4), "caf");
        assert_eq!(truncate_str(s, 5), "café");
    }

    #[test]
    fn emoji_never_split() {
        let s = "hi🦀bye";
        assert_eq!(truncate_str(s, 3), "hi");
        assert_eq!(truncate_str(s, 6), "hi🦀");
    }

    #[test]
    fn preview_appends_ellipsis() {
        let long = "x".repeat(300);
        let p = preview(&long);
        assert!(p.ends_with("..."));
        assert_eq!(p.len(), PREVIEW_BYTES + 3);
    }
}
