// src/util.rs — Shared utility functions

/// Truncate a string for display in listings, never splitting a UTF-8
/// character.
pub fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_untouched() {
        assert_eq!(truncate_str("eggs", 10), "eggs");
        assert_eq!(truncate_str("eggs", 4), "eggs");
    }

    #[test]
    fn test_long_strings_cut() {
        assert_eq!(truncate_str("tomato, cheese", 6), "tomato");
    }

    #[test]
    fn test_multibyte_boundary_respected() {
        // "crème" has a two-byte character at index 2
        let t = truncate_str("crème", 3);
        assert_eq!(t, "cr");
    }

    #[test]
    fn test_empty() {
        assert_eq!(truncate_str("", 5), "");
    }
}
