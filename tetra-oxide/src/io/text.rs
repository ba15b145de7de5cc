//! Line-level helpers shared by the `.node` and `.ele` readers.

use std::str::FromStr;

/// Strips surrounding whitespace and drops lines that carry no data: a line
/// that is empty after trimming, or whose first character is `#`, is a
/// comment and yields `None`.
pub(crate) fn clean(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(line)
}

/// Parses whitespace-separated numbers left to right, stopping at the first
/// token that does not parse. A malformed token therefore surfaces as a
/// token-count mismatch at the call site, the same way stream extraction
/// behaves.
pub(crate) fn number_prefix<T: FromStr>(line: &str) -> Vec<T> {
    line.split_whitespace()
        .map_while(|token| token.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_skips_comments_and_blanks() {
        assert_eq!(clean("  # header comment"), None);
        assert_eq!(clean(""), None);
        assert_eq!(clean("   \t "), None);
        assert_eq!(clean("  4 3 0 0  "), Some("4 3 0 0"));
    }

    #[test]
    fn number_prefix_parses_full_lines() {
        assert_eq!(number_prefix::<i64>("4 3 0 0"), vec![4, 3, 0, 0]);
        assert_eq!(number_prefix::<f32>("0 1.5 -2"), vec![0.0, 1.5, -2.0]);
    }

    #[test]
    fn number_prefix_stops_at_first_bad_token() {
        assert_eq!(number_prefix::<i64>("4 3 x 0"), vec![4, 3]);
        assert_eq!(number_prefix::<i64>("4.5 3 0 0"), Vec::<i64>::new());
    }
}
