//! 配置文件加载（TOML）
use serde::Deserialize;
use std::path::Path;

use crate::error::ScanError;
use crate::options::{ColorChoice, ScanOptions};

/// [scan] 段
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanSection {
    #[serde(default)]
    pub follow_links: Option<bool>,
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// [output] 段
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    #[serde(default)]
    pub color: Option<ColorChoice>,
}

/// 顶层配置文件结构；所有键均可省略
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub scan: ScanSection,
    #[serde(default)]
    pub output: OutputSection,
}

impl FileConfig {
    /// 将配置文件中出现的键覆盖到 `opts` 上（命令行参数随后再覆盖）
    pub fn apply_to(&self, opts: &mut ScanOptions) {
        if let Some(v) = self.scan.follow_links {
            opts.follow_links = v;
        }
        if let Some(v) = self.scan.max_depth {
            opts.max_depth = Some(v);
        }
        if let Some(v) = self.output.color {
            opts.color = v;
        }
    }
}

/// 从 TOML 文件加载配置
pub fn load_config(path: &Path) -> Result<FileConfig, ScanError> {
    let txt = std::fs::read_to_string(path).map_err(|source| ScanError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&txt).map_err(|source| ScanError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_config(txt: &str) -> Result<FileConfig, toml::de::Error> {
    toml::from_str(txt)
}
