/// 本 crate 所有可失败操作的统一结果类型。
pub type Result<T, E = DnaError> = core::result::Result<T, E>;

/// 错误类型。
///
/// 计数 / 匹配类函数不会失败（模式长于文本时返回 0 或空列表）；
/// 只有涉及字母表校验或 k-mer 排名的操作才会返回错误。
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DnaError {
    /// 遇到 {A,C,G,T}（互补时含小写）之外的字节；非 ASCII 字节按 `\xNN` 转义显示
    #[error("DNA error: unknown nucleotide '{}' at position {position}", .symbol.escape_ascii())]
    UnknownNucleotide { symbol: u8, position: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DnaError {
    pub(crate) fn unknown(byte: u8, position: usize) -> Self {
        DnaError::UnknownNucleotide { symbol: byte, position }
    }
}
