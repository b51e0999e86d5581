//! 单个文件的检查结果（对外暴露）
use std::path::PathBuf;

/// 加密状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encryption {
    /// 未加密，或已用空密码解开
    Clear,
    /// 已加密且空密码无效
    Locked,
    /// 无法作为 PDF 打开/解析，附带错误描述（终端只显示 Error，描述留给库调用方与 debug 日志）
    Unreadable(String),
}

/// 单个 PDF 的报告记录：构造、打印、丢弃，不做保留
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfReport {
    pub path: PathBuf,
    pub author: Option<String>,
    pub page_count: Option<usize>,
    pub encryption: Encryption,
}

impl PdfReport {
    pub(crate) fn unreadable(path: PathBuf, reason: String) -> Self {
        Self { path, author: None, page_count: None, encryption: Encryption::Unreadable(reason) }
    }

    pub(crate) fn locked(path: PathBuf) -> Self {
        Self { path, author: None, page_count: None, encryption: Encryption::Locked }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.encryption, Encryption::Locked)
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self.encryption, Encryption::Unreadable(_))
    }
}
