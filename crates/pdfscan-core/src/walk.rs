//! 目录遍历：收集 .pdf 文件并按路径排序
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::options::ScanOptions;

/// 文件名（转小写后）是否以 ".pdf" 结尾；名为 ".pdf" 的文件同样计入
pub(crate) fn is_pdf_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

/// 递归收集 `root` 下所有 PDF 文件
/// - 无法读取的目录项记录 warn 日志后跳过，不中断遍历
/// - 结果按路径排序，与文件系统的枚举顺序无关
pub fn find_pdfs(root: &Path, opts: &ScanOptions) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root).min_depth(1).follow_links(opts.follow_links);
    if let Some(depth) = opts.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut files: Vec<PathBuf> = vec![];
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if is_pdf_name(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    files
}
