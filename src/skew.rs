//! 碱基组成分析：累计 GC 偏斜与环状半基因组窗口计数。
//!
//! 复制起点（ori）附近 G−C 累计偏斜通常取到全局最小值，
//! 因此 [`minimum_skew`] 给出 ori 的候选位置。

use log::debug;

use crate::error::{DnaError, Result};

/// 累计偏斜数组，长度为 `len(genome) + 1`，`skew[0] == 0`。
///
/// `skew[i]` 为前 `i` 个碱基中 G 的个数减去 C 的个数。
/// 分类前先转大写；{A,C,G,T} 以外的字符返回 `UnknownNucleotide`。
pub fn skew_array(genome: &[u8]) -> Result<Vec<i64>> {
    let mut skew = Vec::with_capacity(genome.len() + 1);
    let mut acc = 0i64;
    skew.push(acc);
    for (i, &b) in genome.iter().enumerate() {
        match b.to_ascii_uppercase() {
            b'A' | b'T' => {}
            b'G' => acc += 1,
            b'C' => acc -= 1,
            _ => return Err(DnaError::unknown(b, i)),
        }
        skew.push(acc);
    }
    Ok(skew)
}

/// 偏斜数组取到全局最小值的所有下标（升序）。
///
/// 下标指向偏斜数组，取值范围 `0..=len(genome)`；空基因组返回 `[0]`。
pub fn minimum_skew(genome: &[u8]) -> Result<Vec<usize>> {
    let skew = skew_array(genome)?;
    let min = skew.iter().copied().min().unwrap_or(0);
    let positions: Vec<usize> = skew
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s == min)
        .map(|(i, _)| i)
        .collect();
    debug!("minimum skew {} at {} position(s)", min, positions.len());
    Ok(positions)
}

/// 环状窗口计数：`array[i]` 为 `genome[i .. i + n/2]`（越过末尾则回绕到开头）中
/// `symbol` 的个数，`i` 取 `0..n`。
///
/// 先直接统计 `array[0]`，之后每步移出窗口首字符、移入新的尾字符，整体 O(n)。
/// 按字面比较，不做字母表校验。
pub fn symbol_array(genome: &[u8], symbol: u8) -> Vec<usize> {
    let n = genome.len();
    if n == 0 {
        return Vec::new();
    }
    let half = n / 2;
    let mut array = Vec::with_capacity(n);
    let mut count = genome[..half].iter().filter(|&&b| b == symbol).count();
    array.push(count);

    for i in 1..n {
        // 先加后减：half == 0 时进出的是同一字符
        if genome[(i + half - 1) % n] == symbol {
            count += 1;
        }
        if genome[i - 1] == symbol {
            count -= 1;
        }
        array.push(count);
    }
    array
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::lcg_seq;

    /// 每个位置重新扫描整个窗口，O(n²)
    fn naive_symbol_array(genome: &[u8], symbol: u8) -> Vec<usize> {
        let n = genome.len();
        let half = n / 2;
        (0..n)
            .map(|i| (0..half).filter(|&j| genome[(i + j) % n] == symbol).count())
            .collect()
    }

    #[test]
    fn skew_basic() {
        let skew = skew_array(b"CATGGGCATCGGCCATACGCC").unwrap();
        assert_eq!(
            skew,
            vec![0, -1, -1, -1, 0, 1, 2, 1, 1, 1, 0, 1, 2, 1, 0, 0, 0, 0, -1, 0, -1, -2]
        );
    }

    #[test]
    fn skew_is_case_insensitive() {
        assert_eq!(skew_array(b"gGcC").unwrap(), vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn skew_rejects_unknown_nucleotide() {
        assert_eq!(
            skew_array(b"GCNA"),
            Err(DnaError::UnknownNucleotide { symbol: b'N', position: 2 })
        );
        assert!(minimum_skew(b"ACU").is_err());
    }

    #[test]
    fn skew_shape_on_random_genomes() {
        for len in 0..=60 {
            let g = lcg_seq(len, 900 + len as u32, b"ACGT");
            let skew = skew_array(&g).unwrap();
            assert_eq!(skew.len(), len + 1);
            assert_eq!(skew[0], 0);
            for w in skew.windows(2) {
                assert!((w[1] - w[0]).abs() <= 1);
            }
        }
    }

    #[test]
    fn minimum_skew_single() {
        assert_eq!(minimum_skew(b"CATTCCAGTACTTCGATGATGGCGTGAAGA").unwrap(), vec![14]);
    }

    #[test]
    fn minimum_skew_tied() {
        let g = b"TAAAGACTGCCGAGAGGCCAACACGAGTGCTAGAACGAGGGGCGTAAACGCGGGTCCGAT";
        assert_eq!(minimum_skew(g).unwrap(), vec![11, 24]);
    }

    #[test]
    fn minimum_skew_empty_and_flat() {
        assert_eq!(minimum_skew(b"").unwrap(), vec![0]);
        assert_eq!(minimum_skew(b"ATA").unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn symbol_array_basic() {
        assert_eq!(symbol_array(b"AAAAGGGG", b'A'), vec![4, 3, 2, 1, 0, 1, 2, 3]);
    }

    #[test]
    fn symbol_array_short_genomes() {
        assert!(symbol_array(b"", b'A').is_empty());
        assert_eq!(symbol_array(b"A", b'A'), vec![0]);
        assert_eq!(symbol_array(b"AC", b'A'), vec![1, 0]);
        assert_eq!(symbol_array(b"ACA", b'A'), vec![1, 0, 1]);
    }

    #[test]
    fn symbol_array_is_literal() {
        assert_eq!(symbol_array(b"aaAA", b'A'), vec![0, 1, 2, 1]);
        assert_eq!(symbol_array(b"N-N-", b'-'), vec![1, 1, 1, 1]);
    }

    #[test]
    fn symbol_array_matches_naive_on_random_genomes() {
        for len in 0..=50 {
            let g = lcg_seq(len, 1_234_567 + len as u32, b"ACGT");
            for &s in b"ACGT" {
                assert_eq!(symbol_array(&g, s), naive_symbol_array(&g, s), "len={} symbol={}", len, s as char);
            }
        }
    }
}
