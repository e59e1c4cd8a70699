//! k-mer 频率分析：精确 / 近似频率表与最高频 k-mer 提取。

pub mod freq;
pub mod opt;

pub use freq::{
    approximate_frequency_map, approximate_frequency_map_with_opt, approximate_frequent_words,
    approximate_frequent_words_with_opt, frequency_map, frequent_words, FrequencyMap,
};
pub use opt::KmerOpt;
