//! 演示如何在 library 模式下用 ori-finder 定位复制起点候选区域。
//!
//! 运行方式：
//! ```bash
//! RUST_LOG=debug cargo run --example ori_scan
//! ```

use anyhow::Result;
use ori_finder::{kmer, search, skew, util::dna, KmerOpt};

fn main() -> Result<()> {
    env_logger::init();

    // 1. 基因组（调用方负责读取 FASTA 等格式，这里直接内嵌）
    let genome = b"ATCAATGATCAACGTAAGCTTCTAAGCATGATCAAGGTGCTCACACAGTTTATCCACAACCTGAGTGGATGACATCAAGATAGGTCGTTGTATCTCCTTCCTCTCGTACTCTCATGACCACGGAAAGATGATCAAGAGAGGATGATTTCTTGGCCATATCGCAATGAATACTTGTGACTTGTGCTTCCAATTGACATCTTCAGCGCCATATTGCGCTGGCCAAGGTGACGGAGCGGGATTACGAAAGCATGATCATGGCTGTTGTTCTGTTTATCTTGTTTTGACTGAGACTTGTTAGGATAGACGGTTTTTCATCACTGACTAGCCAAAGCCTTACTCTGCCTGACATCGACCGTAAATTGATAATGAATTTACATGCTTCCGCGACGATTTACCTCTTGATCATCGATCCGATTGAAGATCTTCAATTGTTAATTCTCTTGCCTCGACTCATAGCCATGATGAGCTCTTGATCATGTTTCCTTAACCCTCTATTTTTTACGGAAGAATGATCAAGCTGCTGCTCTTGATCATCGTTTC";
    println!("基因组长度: {} bp", genome.len());

    // 2. 偏斜最小值位置
    let minima = skew::minimum_skew(genome)?;
    println!("最小偏斜位置: {:?}", minima);

    // 3. 以第一个最小值为中心取窗口
    let center = minima[0];
    let start = center.saturating_sub(250);
    let end = (center + 250).min(genome.len());
    let window = &genome[start..end];
    println!("候选窗口: [{}, {})", start, end);

    // 4. 允许错配并合并反向互补的高频 9-mer（DnaA box 候选）
    let opt = KmerOpt::default();
    let boxes = kmer::approximate_frequent_words_with_opt(window, &opt)?;
    for b in &boxes {
        let rc = dna::revcomp(b)?;
        let hits = search::approximate_pattern_matching(window, b, opt.d);
        println!(
            "{} / {}: {} 处近似出现 {:?}",
            String::from_utf8_lossy(b),
            String::from_utf8_lossy(&rc),
            hits.len(),
            hits
        );
    }

    // 5. 半基因组窗口中 C 的分布
    let c_array = skew::symbol_array(genome, b'C');
    let (min_pos, min_c) = c_array
        .iter()
        .enumerate()
        .min_by_key(|&(_, &c)| c)
        .map(|(i, &c)| (i, c))
        .ok_or_else(|| anyhow::anyhow!("empty genome"))?;
    println!("C 最少的半基因组窗口起点: {} ({} 个 C)", min_pos, min_c);

    Ok(())
}
