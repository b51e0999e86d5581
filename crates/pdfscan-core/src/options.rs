//! 扫描选项与统计信息（模块）

/// 终端着色策略
/// - Auto：仅当标准输出是终端时着色
/// - Always：强制着色
/// - Never：完全不输出 ANSI 转义序列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// 根据标准输出是否为终端决定是否着色
    pub fn should_color(self, stdout_is_term: bool) -> bool {
        match self {
            ColorChoice::Auto => stdout_is_term,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// 扫描选项
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// 是否跟随符号链接（交给 walkdir 处理环路）
    pub follow_links: bool,
    /// 最大递归深度；None 表示不限
    pub max_depth: Option<usize>,
    /// 着色策略
    pub color: ColorChoice,
}

impl ScanOptions {
    /// 结合当前终端状态给出最终是否着色（console 会同时参考 CLICOLOR 等环境变量）
    pub fn colored(&self) -> bool {
        self.color.should_color(console::colors_enabled())
    }
}

/// 扫描统计信息（便于 CLI 打印日志）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub pdfs_found: usize,
    pub reports_written: usize,
    pub locked: usize,
    pub unreadable: usize,
}
