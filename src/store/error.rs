//! 存储层错误类型

use std::path::PathBuf;

use thiserror::Error;

/// 存储操作错误
///
/// 每个错误只终止当前操作，不影响后续调用。
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("无法获取用户主目录")]
    NoHomeDir,

    #[error("创建数据目录失败 ({path}): {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("读取数据文件失败 ({path}): {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 数据文件内容损坏属于致命错误，不做局部恢复
    #[error("解析数据文件失败 ({path}): {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("序列化学习数据失败: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("写入文件失败 ({path}): {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 记录未通过校验，未被追加
    #[error("记录校验失败: {0}")]
    InvalidSession(String),
}
