use std::ops::Range;

use crate::util::dna;

/// 所有可能的起始位置 `0..=len(text)-len(pattern)`；模式更长时为空区间。
#[inline]
fn start_positions(text_len: usize, pat_len: usize) -> Range<usize> {
    if pat_len > text_len {
        0..0
    } else {
        0..text_len - pat_len + 1
    }
}

/// 精确出现次数（允许重叠）。
///
/// 空模式在 `0..=len(text)` 的每个位置都算一次出现。
pub fn pattern_count(text: &[u8], pattern: &[u8]) -> usize {
    let m = pattern.len();
    start_positions(text.len(), m)
        .filter(|&i| &text[i..i + m] == pattern)
        .count()
}

/// 与 `pattern` 的 Hamming 距离不超过 `d` 的窗口个数。
pub fn approximate_pattern_count(text: &[u8], pattern: &[u8], d: usize) -> usize {
    let m = pattern.len();
    start_positions(text.len(), m)
        .filter(|&i| dna::within_distance(&text[i..i + m], pattern, d))
        .count()
}

/// 精确出现的起始位置，升序。
pub fn pattern_matching(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    start_positions(text.len(), m)
        .filter(|&i| &text[i..i + m] == pattern)
        .collect()
}

/// 近似出现的起始位置，升序。
pub fn approximate_pattern_matching(text: &[u8], pattern: &[u8], d: usize) -> Vec<usize> {
    let m = pattern.len();
    start_positions(text.len(), m)
        .filter(|&i| dna::within_distance(&text[i..i + m], pattern, d))
        .collect()
}
