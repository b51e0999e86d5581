#![allow(dead_code)]

use assert_cmd::Command;
use lopdf::{
    dictionary, Document, EncryptionState, EncryptionVersion, Object, Permissions, StringFormat,
};
use std::path::{Path, PathBuf};

pub fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("pdfscan").unwrap();
    cmd.env_remove("CLICOLOR_FORCE").env_remove("RUST_LOG");
    cmd
}

// build_pdf / encrypt / save 与 pdfscan-core/src/testutil.rs 逐行一致，修改时两边同步

/// 生成含 `pages` 页、可选作者的最小 PDF
pub fn build_pdf(pages: usize, author: Option<&str>) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::with_capacity(pages);
    for _ in 0..pages {
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(author) = author {
        let info_id = doc.add_object(dictionary! {
            "Author" => Object::string_literal(author),
        });
        doc.trailer.set("Info", info_id);
    }
    doc
}

/// 以 RC4-128 加密；`user_password` 为空时任何人都能用空密码打开
pub fn encrypt(doc: &mut Document, user_password: &str) {
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(vec![1u8; 16], StringFormat::Literal),
            Object::String(vec![2u8; 16], StringFormat::Literal),
        ]),
    );
    let version = EncryptionVersion::V2 {
        document: &*doc,
        owner_password: "owner-secret",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).unwrap();
    doc.encrypt(&state).unwrap();
}

/// 写入 `dir/name` 并返回路径
pub fn save(dir: &Path, name: &str, mut doc: Document) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    doc.save(&path).unwrap();
    path
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}
