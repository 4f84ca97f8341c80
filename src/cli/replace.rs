//! # 替换参数 CLI 定义
//!
//! 三个位置参数（目录、原字符串、新字符串）加可选开关。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/replace.rs`

use clap::Args;
use std::path::PathBuf;

/// 替换参数
#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// Root directory to process recursively
    pub directory: PathBuf,

    /// Literal string to search for
    #[arg(allow_hyphen_values = true)]
    pub old: String,

    /// Replacement string
    #[arg(allow_hyphen_values = true)]
    pub new: String,

    /// Report files that would change without writing them
    #[arg(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,

    /// Glob for files or directories to skip (repeatable)
    #[arg(short, long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Print a per-outcome statistics table after the summary
    #[arg(long, default_value_t = false)]
    pub stats: bool,
}
