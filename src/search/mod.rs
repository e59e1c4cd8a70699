//! 模式查找：精确与近似（Hamming 距离 ≤ d）计数和定位，允许重叠。

pub mod pattern;

pub use pattern::{
    approximate_pattern_count, approximate_pattern_matching, pattern_count, pattern_matching,
};
