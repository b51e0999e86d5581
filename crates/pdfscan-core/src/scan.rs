//! 扫描主流程：遍历 → 逐个检查 → 逐个渲染（严格串行）
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::error::ScanError;
use crate::inspect::inspect;
use crate::options::{ScanOptions, ScanStats};
use crate::report::Encryption;
use crate::render::{write_no_pdfs, write_report};
use crate::walk::find_pdfs;

/// 扫描目录并将每个 PDF 的报告写入 `out`
/// - `root` 不是目录：返回 `ScanError::NotADirectory`，不写任何内容
/// - 没有 PDF：只写一行提示
/// - 单个文件的失败只体现在该文件的报告块里，不会中断扫描
pub fn scan_and_write(root: &Path, out: &mut dyn Write, opts: &ScanOptions) -> Result<ScanStats, ScanError> {
    scan_with_style(root, out, opts, opts.colored())
}

/// 与 `scan_and_write` 相同，但着色由调用方直接决定
pub fn scan_with_style(
    root: &Path,
    out: &mut dyn Write,
    opts: &ScanOptions,
    colored: bool,
) -> Result<ScanStats, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    info!(root = %root.display(), "starting scan");

    let mut stats = ScanStats::default();
    let files = find_pdfs(root, opts);
    stats.pdfs_found = files.len();

    if files.is_empty() {
        write_no_pdfs(out, root, colored)?;
        info!("no pdf files found");
        return Ok(stats);
    }

    for path in files {
        let report = inspect(&path);
        if report.is_locked() {
            stats.locked += 1;
        }
        if let Encryption::Unreadable(reason) = &report.encryption {
            debug!(path = %path.display(), %reason, "reporting unreadable pdf");
            stats.unreadable += 1;
        }
        write_report(out, &report, colored)?;
        stats.reports_written += 1;
    }
    out.flush()?;

    info!(
        pdfs_found = stats.pdfs_found,
        locked = stats.locked,
        unreadable = stats.unreadable,
        "scan finished"
    );
    Ok(stats)
}
