//! Frequency analysis: the first stage of the pipeline.

use std::collections::HashMap;

/// Mapping from symbol to occurrence count, one entry per distinct symbol
/// present in the source.
///
/// ```rust
/// let freq = huffcode::count_frequencies("aabbbcc");
/// assert_eq!(freq[&'b'], 3);
/// ```
pub type FrequencyTable = HashMap<char, u64>;

/// Counts every occurrence of every symbol in `text`, including repeated
/// whitespace, punctuation and control characters. Symbols are distinguished
/// by exact identity; no normalization or case folding. Empty input yields
/// an empty table.
///
/// ```rust
/// let freq = huffcode::count_frequencies("to be or not to be");
/// assert_eq!(freq[&'o'], 4);
/// assert_eq!(freq[&' '], 5);
/// ```
pub fn count_frequencies(text: &str) -> FrequencyTable {
    let mut freq = FrequencyTable::new();
    for symbol in text.chars() {
        *freq.entry(symbol).or_insert(0) += 1;
    }
    freq
}
