use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pdfscan_core::{load_config, scan_with_style, write_not_a_directory, ColorChoice, ScanOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "pdfscan", version, about = "列出目录中每个 PDF 的作者、页数与加密状态")]
struct Cli {
    /// 目标目录（默认为当前工作目录）
    dir: Option<PathBuf>,

    /// 着色策略（默认取配置文件，否则 auto）
    #[arg(long, value_enum)]
    color: Option<ColorArg>,

    /// 配置文件路径（TOML）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 最大递归深度
    #[arg(long)]
    max_depth: Option<usize>,

    /// 跟随符号链接
    #[arg(long)]
    follow_links: bool,
}

/// --color 的取值
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<ExitCode> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    let opts = build_options(&cli)?;
    let root = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("resolve current directory")?,
    };
    let colored = opts.colored();

    if !root.is_dir() {
        let mut err = io::stderr().lock();
        let stderr_colored = opts.color.should_color(console::colors_enabled_stderr());
        write_not_a_directory(&mut err, &root, stderr_colored)?;
        return Ok(ExitCode::from(1));
    }

    debug!(?root, ?opts, colored, "options resolved");
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    scan_with_style(&root, &mut out, &opts, colored).context("scan failed")?;
    out.flush().context("flush stdout")?;
    Ok(ExitCode::SUCCESS)
}

/// 合并默认值、配置文件与命令行参数（命令行优先）
fn build_options(cli: &Cli) -> Result<ScanOptions> {
    let mut opts = ScanOptions::default();
    if let Some(path) = &cli.config {
        let cfg = load_config(path).context("load config")?;
        debug!(?cfg, "config loaded");
        cfg.apply_to(&mut opts);
    }
    if let Some(color) = cli.color {
        opts.color = color.into();
    }
    if let Some(depth) = cli.max_depth {
        opts.max_depth = Some(depth);
    }
    if cli.follow_links {
        opts.follow_links = true;
    }
    Ok(opts)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，避免与 stdout 上的报告交错；默认只输出 warn 及以上
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
