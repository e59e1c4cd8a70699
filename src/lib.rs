//! # ori-finder
//!
//! 面向核酸序列（字母表 {A,C,G,T}）的精确 / 近似字符串分析原语，
//! 用于在细菌基因组中寻找复制起点（ori）。
//!
//! 本 crate 提供：
//!
//! - **碱基与距离**：互补、反向互补、Hamming 距离
//! - **模式查找**：精确 / 允许 d 个错配的计数与定位（允许重叠）
//! - **k-mer 频率**：精确 / 近似频率表，可合并反向互补，提取最高频 k-mer
//! - **组成分析**：累计 GC 偏斜、最小偏斜位置、环状半基因组窗口计数
//!
//! 所有函数都是纯函数：不做 I/O，不保存状态，输入为调用方已加载到内存中的序列。
//!
//! ## 快速示例
//!
//! ```rust
//! use ori_finder::{kmer, skew, util::dna};
//!
//! let genome = b"TAAAGACTGCCGAGAGGCCAACACGAGTGCTAGAACGAGGGGCGTAAACGCGGGTCCGAT";
//!
//! // 偏斜最小处是 ori 候选
//! assert_eq!(skew::minimum_skew(genome)?, vec![11, 24]);
//!
//! // 候选区域内允许 1 个错配、合并反向互补的高频 4-mer
//! let words = kmer::approximate_frequent_words(&genome[..30], 4, 1, true)?;
//! assert!(!words.is_empty());
//!
//! assert_eq!(dna::revcomp(b"AAAACCCGGT")?, b"ACCGGGTTTT");
//! # Ok::<(), ori_finder::DnaError>(())
//! ```
//!
//! ## 模块说明
//!
//! - [`util`] — 碱基互补、反向互补、Hamming 距离
//! - [`search`] — 模式计数与定位
//! - [`kmer`] — k-mer 频率表与最高频 k-mer
//! - [`skew`] — GC 偏斜与环状窗口计数
//! - [`error`] — 错误类型

pub mod error;
pub mod kmer;
pub mod search;
pub mod skew;
pub mod util;

pub use error::{DnaError, Result};
pub use kmer::{FrequencyMap, KmerOpt};
