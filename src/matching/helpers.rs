//! Shared similarity scoring helpers.

use strsim::levenshtein;

/// Compute a fuzzywuzzy-style partial ratio (0.0-100.0): the best
/// Levenshtein similarity between the shorter string and every
/// equal-length character window of the longer string. Tolerant of one
/// string being a prefix/suffix/substring of the other.
///
/// Either side empty scores 0.0; missing data earns no credit.
pub(crate) fn partial_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };
    let width = short.len();
    let needle: String = short.iter().collect();

    let mut best = 0.0f64;
    for start in 0..=(long.len() - width) {
        let window: String = long[start..start + width].iter().collect();
        let dist = levenshtein(&needle, &window);
        let sim = (1.0 - dist as f64 / width as f64) * 100.0;
        if sim > best {
            best = sim;
        }
        if best >= 100.0 {
            break;
        }
    }
    best
}
