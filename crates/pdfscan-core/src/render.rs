//! 终端渲染：每个文件输出固定格式的一块彩色文本
use console::Style;
use std::io::{self, Write};
use std::path::Path;

use crate::report::{Encryption, PdfReport};

/// 分隔线宽度
pub const SEPARATOR_WIDTH: usize = 40;

/// 配色表；`colored = false` 时所有样式都不输出转义序列
struct Palette {
    file: Style,
    label: Style,
    value: Style,
    alert: Style,
    separator: Style,
}

impl Palette {
    fn new(colored: bool) -> Self {
        let base = || Style::new().force_styling(colored);
        Self {
            file: base().cyan(),
            label: base().green(),
            value: base().yellow(),
            alert: base().red(),
            separator: base().magenta(),
        }
    }
}

/// 输出单个文件的报告块
pub fn write_report(out: &mut dyn Write, report: &PdfReport, colored: bool) -> io::Result<()> {
    let p = Palette::new(colored);

    let name = report
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.path.display().to_string());
    writeln!(out, "{}", p.file.apply_to(name))?;

    let label = p.label.apply_to("Author:");
    match report.author.as_deref().map(str::trim) {
        Some(author) if !author.is_empty() => {
            writeln!(out, "  {} {}", label, p.value.apply_to(author))?
        }
        _ => writeln!(out, "  {} {}", label, p.alert.apply_to("N/A"))?,
    }

    let label = p.label.apply_to("Pages:");
    match (report.page_count, &report.encryption) {
        (Some(n), _) => writeln!(out, "  {} {}", label, p.value.apply_to(n))?,
        (None, Encryption::Locked) => {
            writeln!(out, "  {} {}", label, p.alert.apply_to("Encrypted / unavailable"))?
        }
        (None, _) => writeln!(out, "  {} {}", label, p.alert.apply_to("Unknown"))?,
    }

    let label = p.label.apply_to("Encrypted:");
    match report.encryption {
        Encryption::Clear => writeln!(out, "  {} {}", label, p.value.apply_to("No"))?,
        Encryption::Locked => writeln!(out, "  {} {}", label, p.alert.apply_to("Yes"))?,
        Encryption::Unreadable(_) => writeln!(out, "  {} {}", label, p.alert.apply_to("Error"))?,
    }

    writeln!(out, "{}", p.separator.apply_to("-".repeat(SEPARATOR_WIDTH)))
}

/// 目录下没有任何 PDF 时的提示
pub fn write_no_pdfs(out: &mut dyn Write, root: &Path, colored: bool) -> io::Result<()> {
    let p = Palette::new(colored);
    let msg = format!("No PDF files found under '{}'.", root.display());
    writeln!(out, "{}", p.value.apply_to(msg))
}

/// 目标路径不是目录时的错误提示
pub fn write_not_a_directory(out: &mut dyn Write, path: &Path, colored: bool) -> io::Result<()> {
    let p = Palette::new(colored);
    let msg = format!("Error: '{}' is not a directory or does not exist.", path.display());
    writeln!(out, "{}", p.alert.apply_to(msg))
}
