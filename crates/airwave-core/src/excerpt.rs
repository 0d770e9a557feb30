/// Leading `limit` characters of an upstream body
///
/// Counts characters, not bytes, so a multi-byte sequence is never split.
pub fn excerpt(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
