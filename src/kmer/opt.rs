use serde::{Deserialize, Serialize};

use crate::error::{DnaError, Result};

/// k-mer 分析参数，可由调用方从自己的配置文件反序列化；缺失字段取默认值。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KmerOpt {
    /// k-mer 长度
    pub k: usize,
    /// 允许的最大错配数
    pub d: usize,
    /// 是否把反向互补的近似出现也计入
    pub complementary: bool,
}

impl Default for KmerOpt {
    /// DnaA box 搜索的常用参数：9-mer，1 个错配，合并反向互补
    fn default() -> Self {
        Self { k: 9, d: 1, complementary: true }
    }
}

impl KmerOpt {
    pub fn validate(&self) -> Result<()> {
        check_k(self.k)
    }
}

pub(crate) fn check_k(k: usize) -> Result<()> {
    if k == 0 {
        return Err(DnaError::InvalidParameter("k must be at least 1".to_string()));
    }
    Ok(())
}
