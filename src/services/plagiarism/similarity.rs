//! Ratcliff/Obershelp ("gestalt pattern matching") similarity.
//!
//! The ratio is `2 * M / T`, where `M` counts the characters matched by
//! repeatedly taking the longest common substring of the still-unmatched
//! regions on either side of previous matches, and `T` is the combined
//! length of both strings.

/// Case-insensitive similarity of two texts in `[0.0, 1.0]`.
///
/// Blank input on either side scores `0.0`. The pair is scored in canonical
/// order so that `similarity(a, b) == similarity(b, a)`; the underlying
/// gestalt procedure is otherwise sensitive to argument order.
pub(crate) fn similarity(text_a: &str, text_b: &str) -> f64 {
    if text_a.trim().is_empty() || text_b.trim().is_empty() {
        return 0.0;
    }

    let lower_a = text_a.to_lowercase();
    let lower_b = text_b.to_lowercase();
    let (first, second) =
        if lower_a <= lower_b { (&lower_a, &lower_b) } else { (&lower_b, &lower_a) };

    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();

    ratio(matched_chars(&a, &b), a.len() + b.len())
}

fn ratio(matches: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    2.0 * matches as f64 / total as f64
}

/// Total length of the matching blocks between `a` and `b`.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let Some(block) = longest_match(a, b, a_lo, a_hi, b_lo, b_hi) else {
            continue;
        };

        matched += block.len;
        if a_lo < block.a && b_lo < block.b {
            pending.push((a_lo, block.a, b_lo, block.b));
        }
        let (a_end, b_end) = (block.a + block.len, block.b + block.len);
        if a_end < a_hi && b_end < b_hi {
            pending.push((a_end, a_hi, b_end, b_hi));
        }
    }

    matched
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchBlock {
    a: usize,
    b: usize,
    len: usize,
}

/// Longest common substring of `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
///
/// Among equally long candidates the one ending earliest in `a` wins, then
/// the one ending earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> Option<MatchBlock> {
    let width = b_hi - b_lo;
    // current[j + 1] is the length of the common run ending at a[i] and b[b_lo + j].
    let mut previous = vec![0usize; width + 1];
    let mut current = vec![0usize; width + 1];
    let mut best = MatchBlock { a: a_lo, b: b_lo, len: 0 };

    for i in a_lo..a_hi {
        for j in 0..width {
            current[j + 1] = if a[i] == b[b_lo + j] { previous[j] + 1 } else { 0 };
            let len = current[j + 1];
            if len > best.len {
                best = MatchBlock { a: i + 1 - len, b: b_lo + j + 1 - len, len };
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    (best.len > 0).then_some(best)
}
