//! 错误类型（对外暴露）
use std::path::PathBuf;
use thiserror::Error;

/// 扫描过程中的致命错误；单个文件的解析失败不会走到这里
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("'{0}' is not a directory or does not exist")]
    NotADirectory(PathBuf),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
