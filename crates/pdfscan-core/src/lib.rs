//! PDF 目录报告核心库
//!
//! 流程（严格串行）：
//! - walk：递归收集 .pdf 文件（扩展名大小写不敏感），按路径排序
//! - inspect：借助 lopdf 打开文件，判断加密并尝试一次空密码，读取页数与作者
//! - render：把检查结果渲染为固定格式的彩色文本块
//! - 单个文件的任何失败只降级为该文件的 "N/A / Unknown / Error" 标记，不会中断扫描

mod config;
mod error;
mod inspect;
mod options;
mod render;
mod report;
mod scan;
mod walk;

#[cfg(test)]
mod testutil;

pub use config::{load_config, FileConfig, OutputSection, ScanSection};
pub use error::ScanError;
pub use inspect::inspect;
pub use options::{ColorChoice, ScanOptions, ScanStats};
pub use render::{write_no_pdfs, write_not_a_directory, write_report, SEPARATOR_WIDTH};
pub use report::{Encryption, PdfReport};
pub use scan::{scan_and_write, scan_with_style};
pub use walk::find_pdfs;
