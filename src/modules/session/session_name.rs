/// Cuts `raw` to at most `max_len` characters, then strips trailing whitespace.
///
/// The order matters: a name like `"abc   x"` cut to 5 becomes `"abc"`, not `"abc  "`.
pub fn bounded_name(raw: &str, max_len: usize) -> String {
    let truncated: String = raw.chars().take(max_len).collect();
    truncated.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_space_is_stripped() {
        assert_eq!(bounded_name("Test ", 20), "Test");
    }

    #[test]
    fn test_long_name_is_truncated_to_max() {
        let name = bounded_name("abcdefghijklmnopqrstuvwxyz", 20);
        assert_eq!(name, "abcdefghijklmnopqrst");
        assert_eq!(name.chars().count(), 20);
    }

    #[test]
    fn test_truncation_happens_before_trim() {
        assert_eq!(bounded_name("abc   x", 5), "abc");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(bounded_name("Übungsstunde", 4), "Übun");
    }

    #[test]
    fn test_leading_whitespace_is_kept() {
        assert_eq!(bounded_name("  Welt  ", 20), "  Welt");
    }
}
