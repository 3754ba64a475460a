//! Levenshtein edit distance.

/// Returns the minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`.
///
/// Works on `char`s, keeps a single rolling column sized after the shorter
/// input and runs in `O(len(a) * len(b))` time. The result does not depend on
/// argument order.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Column follows the shorter string
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return long.len();
    }

    let mut column: Vec<usize> = (0..=short.len()).collect();

    for (x, lc) in long.iter().enumerate() {
        let mut last_diag = column[0];
        column[0] = x + 1;
        for (y, sc) in short.iter().enumerate() {
            let old_diag = column[y + 1];
            let cost = if sc == lc { 0 } else { 1 };
            column[y + 1] = (column[y + 1] + 1)
                .min(column[y] + 1)
                .min(last_diag + cost);
            last_diag = old_diag;
        }
    }

    column[short.len()]
}
