use crate::error::{DnaError, Result};

/// 碱基互补（保留大小写）：A<->T, C<->G, a<->t, c<->g。
/// 其他字符返回 `UnknownNucleotide`，位置记为 0。
#[inline]
pub fn complement(base: u8) -> Result<u8> {
    complement_at(base, 0)
}

#[inline]
fn complement_at(base: u8, position: usize) -> Result<u8> {
    match base {
        b'A' => Ok(b'T'),
        b'T' => Ok(b'A'),
        b'C' => Ok(b'G'),
        b'G' => Ok(b'C'),
        b'a' => Ok(b't'),
        b't' => Ok(b'a'),
        b'c' => Ok(b'g'),
        b'g' => Ok(b'c'),
        _ => Err(DnaError::unknown(base, position)),
    }
}

/// 逐位互补，不反转。
pub fn complement_seq(seq: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(seq.len());
    for (i, &b) in seq.iter().enumerate() {
        out.push(complement_at(b, i)?);
    }
    Ok(out)
}

/// 纯反转，不做字母表校验。
pub fn reverse(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().copied().collect()
}

/// 反向互补。错误中的位置是原序列中的下标。
pub fn revcomp(seq: &[u8]) -> Result<Vec<u8>> {
    let n = seq.len();
    let mut out = Vec::with_capacity(n);
    for (j, &b) in seq.iter().rev().enumerate() {
        out.push(complement_at(b, n - 1 - j)?);
    }
    Ok(out)
}

/// Hamming 距离。
///
/// 比较两者重叠前缀上逐位不同的个数，再加上长度差 `|len(p) - len(q)|`。
/// 结果对参数顺序对称；等长输入即为标准 Hamming 距离。
/// 大小写敏感，不做字母表校验。
pub fn hamming_distance(p: &[u8], q: &[u8]) -> usize {
    let len_diff = p.len().abs_diff(q.len());
    let mismatches = p.iter().zip(q).filter(|(a, b)| a != b).count();
    len_diff + mismatches
}

/// 距离不超过 `d` 时提前退出的版本，供近似匹配的内层循环使用。
#[inline]
pub(crate) fn within_distance(p: &[u8], q: &[u8], d: usize) -> bool {
    let mut dist = p.len().abs_diff(q.len());
    if dist > d {
        return false;
    }
    for (a, b) in p.iter().zip(q) {
        if a != b {
            dist += 1;
            if dist > d {
                return false;
            }
        }
    }
    true
}
