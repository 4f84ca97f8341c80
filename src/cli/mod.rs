//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数结构
//! `replace-string [OPTIONS] <DIRECTORY> <OLD> <NEW>`
//!
//! 参数解析失败时不使用 clap 默认的退出方式（stderr + 状态码 2），
//! 而是打印用法并以状态码 1 退出。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: replace

pub mod replace;

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

/// replace-string - 递归替换目录中所有文本文件的字符串
#[derive(Parser, Debug)]
#[command(name = "replace-string")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Recursively replace a literal string in every text file under a directory",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub args: replace::ReplaceArgs,
}

/// 解析结果
#[derive(Debug)]
pub enum Parsed {
    /// 参数合法
    Run(Cli),
    /// 参数个数或格式错误
    Usage,
    /// `--help` / `--version`
    Exit(clap::Error),
}

/// 解析命令行参数
pub fn parse_from<I, T>(argv: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(argv) {
        Ok(cli) => Parsed::Run(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Parsed::Exit(e)
        }
        Err(_) => Parsed::Usage,
    }
}
