//! String similarity for fuzzy ingredient matching.
//!
//! Ratcliff/Obershelp: find the longest common substring, then recurse on the
//! pieces to its left and right, and score `2 * matches / (len(a) + len(b))`.

/// Similarity between two strings, in [0, 1].
///
/// Identical strings score 1.0, strings with no characters in common score
/// 0.0, and the score grows as longer common substrings appear. Operates on
/// chars, not bytes, so multi-byte input is safe.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let matches = matching_total(&a, &b);
    (2.0 * matches as f64) / ((a.len() + b.len()) as f64)
}

/// Total matched characters across the recursive common-substring partition.
fn matching_total(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_run(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_total(&a[..a_start], &b[..b_start])
        + matching_total(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common substring of `a` and `b`.
///
/// Returns (start in a, start in b, length); the earliest occurrence wins on
/// equal lengths so the partition is deterministic.
fn longest_common_run(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];

    for i in 0..a.len() {
        let mut cur = vec![0usize; b.len() + 1];
        for j in 0..b.len() {
            if a[i] == b[j] {
                let run = prev[j] + 1;
                cur[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            }
        }
        prev = cur;
    }

    best
}
