pub mod dna;

/// 测试用的确定性伪随机序列（LCG），每个位置从 `bases` 中取一个字符。
#[cfg(test)]
pub(crate) fn lcg_seq(len: usize, seed: u32, bases: &[u8]) -> Vec<u8> {
    let mut x = seed;
    let mut v = Vec::with_capacity(len);
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        v.push(bases[(x >> 16) as usize % bases.len()]);
    }
    v
}
