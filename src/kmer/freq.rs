use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{DnaError, Result};
use crate::kmer::opt::{check_k, KmerOpt};
use crate::util::dna;

/// k-mer -> 出现次数。键恰好是文本中所有不同的长度为 k 的子串。
pub type FrequencyMap = HashMap<Vec<u8>, usize>;

/// 精确 k-mer 频率表，单次前向扫描。
///
/// `k == 0` 返回 `InvalidParameter`；`k > len(text)` 返回空表。
pub fn frequency_map(text: &[u8], k: usize) -> Result<FrequencyMap> {
    check_k(k)?;
    let mut freq = FrequencyMap::new();
    if k > text.len() {
        return Ok(freq);
    }
    for w in text.windows(k) {
        *freq.entry(w.to_vec()).or_insert(0) += 1;
    }
    debug!(
        "frequency map: k={}, {} distinct k-mers over {} windows",
        k,
        freq.len(),
        text.len() - k + 1
    );
    Ok(freq)
}

/// 近似 k-mer 频率表。
///
/// 对文本中出现过的每个 k-mer `p`，统计满足
/// `hd(window, p) <= d`（或 `complementary` 时 `hd(window, revcomp(p)) <= d`）的窗口数。
/// 每个窗口对每个键最多计一次；`p` 与其反向互补是两个独立的键。
///
/// 先按精确频率表把相同窗口合并，再对每个键扫描不同的窗口并按次数累加，
/// 结果与逐位置扫描完全一致。
pub fn approximate_frequency_map(
    text: &[u8],
    k: usize,
    d: usize,
    complementary: bool,
) -> Result<FrequencyMap> {
    check_k(k)?;
    trace!("approximate frequency map: k={}, d={}, complementary={}", k, d, complementary);
    let exact = frequency_map(text, k)?;
    if exact.is_empty() {
        // k > len(text)：没有任何 k-mer 需要取反向互补
        return Ok(exact);
    }
    if complementary {
        // 反向互补需要合法碱基，提前校验以报告文本中的位置
        if let Some(i) = text.iter().position(|b| dna::complement(*b).is_err()) {
            return Err(DnaError::unknown(text[i], i));
        }
    }

    let windows: Vec<(&[u8], usize)> = exact.iter().map(|(w, &c)| (w.as_slice(), c)).collect();

    let mut freq = FrequencyMap::with_capacity(exact.len());
    for pattern in exact.keys() {
        let rc = if complementary { Some(dna::revcomp(pattern)?) } else { None };
        let count = windows
            .iter()
            .filter(|(w, _)| {
                dna::within_distance(w, pattern, d)
                    || rc.as_deref().map_or(false, |rc| dna::within_distance(w, rc, d))
            })
            .map(|&(_, c)| c)
            .sum();
        freq.insert(pattern.clone(), count);
    }
    debug!("approximate frequency map: k={}, d={}, {} keys", k, d, freq.len());
    Ok(freq)
}

pub fn approximate_frequency_map_with_opt(text: &[u8], opt: &KmerOpt) -> Result<FrequencyMap> {
    opt.validate()?;
    approximate_frequency_map(text, opt.k, opt.d, opt.complementary)
}

/// 出现次数最多的 k-mer（并列全部返回，按字典序排列）。
///
/// 文本中没有任何 k-mer（`k > len(text)`）时返回 `InvalidParameter`。
pub fn frequent_words(text: &[u8], k: usize) -> Result<Vec<Vec<u8>>> {
    let freq = frequency_map(text, k)?;
    most_frequent(&freq, k, text.len())
}

/// 近似频率表上的最高频 k-mer。
pub fn approximate_frequent_words(
    text: &[u8],
    k: usize,
    d: usize,
    complementary: bool,
) -> Result<Vec<Vec<u8>>> {
    let freq = approximate_frequency_map(text, k, d, complementary)?;
    most_frequent(&freq, k, text.len())
}

pub fn approximate_frequent_words_with_opt(text: &[u8], opt: &KmerOpt) -> Result<Vec<Vec<u8>>> {
    let freq = approximate_frequency_map_with_opt(text, opt)?;
    most_frequent(&freq, opt.k, text.len())
}

fn most_frequent(freq: &FrequencyMap, k: usize, text_len: usize) -> Result<Vec<Vec<u8>>> {
    let max = match freq.values().max() {
        Some(&m) => m,
        None => {
            return Err(DnaError::InvalidParameter(format!(
                "k = {} exceeds text length {}: no k-mers to rank",
                k, text_len
            )))
        }
    };
    let mut words: Vec<Vec<u8>> = freq
        .iter()
        .filter(|(_, c)| **c == max)
        .map(|(w, _)| w.clone())
        .collect();
    words.sort_unstable();
    debug!("frequent words: k={}, max count {}, {} tied", k, max, words.len());
    Ok(words)
}
