//! Text metrics.

/// Count words in a text.
///
/// A word is a maximal run of non-whitespace characters. Empty or
/// whitespace-only input yields 0.
///
/// # Examples
///
/// ```
/// use scenescribe_core::word_count;
///
/// assert_eq!(word_count(""), 0);
/// assert_eq!(word_count("   "), 0);
/// assert_eq!(word_count("a b  c"), 3);
/// ```
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
