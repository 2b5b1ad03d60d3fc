//! Small string helpers shared across layers.

/// Clip a string to at most `max_bytes` bytes without cutting through a
/// UTF-8 sequence.
///
/// The cut point backs up to the nearest character boundary, so the result
/// can be slightly shorter than `max_bytes`. Strings already within the
/// limit come back untouched.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        s
    } else {
        let end = (0..=max_bytes)
            .rev()
            .find(|&i| s.is_char_boundary(i))
            .unwrap_or(0);
        &s[..end]
    }
}
