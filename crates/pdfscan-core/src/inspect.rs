//! 单文件检查：打开 → 判断加密 → 空密码尝试 → 读取页数/作者
//!
//! 真正的 PDF 解析（交叉引用表、对象流、加解密）全部交给 lopdf。
//! 这里只负责把各类失败收敛为报告中的 None / 错误标记，任何失败都不会中断整体扫描。
use anyhow::Result;
use lopdf::{Document, Object};
use std::path::Path;
use tracing::debug;

use crate::report::{Encryption, PdfReport};

/// 检查单个 PDF 文件并生成报告
pub fn inspect(path: &Path) -> PdfReport {
    let mut doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(err) => return report_load_failure(path, err),
    };

    if doc.is_encrypted() && !unlock_with_empty_password(&mut doc) {
        debug!(path = %path.display(), "empty password rejected");
        return PdfReport::locked(path.to_path_buf());
    }

    let page_count = read_page_count(&doc)
        .inspect_err(|err| debug!(path = %path.display(), error = %err, "page count unavailable"))
        .ok();
    let author = read_author(&doc)
        .inspect_err(|err| debug!(path = %path.display(), error = %err, "author metadata unavailable"))
        .ok()
        .flatten();

    PdfReport { path: path.to_path_buf(), author, page_count, encryption: Encryption::Clear }
}

/// 打开失败时的报告：解密阶段失败说明容器本身可读，只是被加密锁住
fn report_load_failure(path: &Path, err: lopdf::Error) -> PdfReport {
    match err {
        lopdf::Error::Decryption(err) => {
            debug!(path = %path.display(), error = %err, "encrypted pdf rejected on load");
            PdfReport::locked(path.to_path_buf())
        }
        err => {
            debug!(path = %path.display(), error = %err, "failed to open pdf");
            PdfReport::unreadable(path.to_path_buf(), err.to_string())
        }
    }
}

/// 仅尝试一次空密码；加载阶段若已用空密码解开则直接视为成功
fn unlock_with_empty_password(doc: &mut Document) -> bool {
    if doc.encryption_state.is_some() {
        return true;
    }
    match doc.decrypt("") {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "decrypt with empty password failed");
            false
        }
    }
}

/// 页树中的页数；文档目录无法解析时视为失败
fn read_page_count(doc: &Document) -> Result<usize> {
    doc.catalog()?;
    Ok(doc.get_pages().len())
}

/// 读取 trailer /Info 中的 /Author
/// - Info 或 Author 缺失：Ok(None)
/// - 值不是字符串或无法解码：Err
/// - 去除首尾空白后为空：Ok(None)
///
/// 文本串解码（UTF-16BE / UTF-8 BOM / PDFDocEncoding）交给 lopdf
fn read_author(doc: &Document) -> Result<Option<String>> {
    let info = match doc.trailer.get(b"Info") {
        Ok(obj) => resolve(doc, obj)?,
        Err(_) => return Ok(None),
    };
    let dict = info.as_dict()?;
    let value = match dict.get(b"Author") {
        Ok(obj) => resolve(doc, obj)?,
        Err(_) => return Ok(None),
    };
    let text = lopdf::decode_text_string(value)?;
    let text = text.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}

/// 跟随间接引用
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Result<&'a Object> {
    match obj {
        Object::Reference(id) => Ok(doc.get_object(*id)?),
        other => Ok(other),
    }
}
