//! # 美化输出工具
//!
//! 提供统一的终端输出样式。所有消息都写到标准输出，
//! 终端不支持颜色或设置了 `NO_COLOR` 时 `colored` 自动退化为纯文本。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/`, `batch/` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::path::Path;

/// 用法提示
pub const USAGE: &str = "用法: replace-string <目录路径> <原字符串> <新字符串>";

/// 打印用法
pub fn print_usage() {
    println!("{}", USAGE);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    println!("{}", msg.red().bold());
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "警告:".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(label: &str, msg: &str) {
    println!("{} {}", label.blue().bold(), msg);
}

/// 打印已修改文件
pub fn print_modified(path: &Path) {
    println!("{} {}", "已修改:".green().bold(), path.display());
}

/// 打印将被修改的文件（dry run）
pub fn print_would_modify(path: &Path) {
    println!("{} {}", "将修改:".cyan().bold(), path.display());
}

/// 打印跳过的非文本文件
pub fn print_skip_non_text(path: &Path) {
    print_warning(&format!(
        "文件 '{}' 可能不是文本文件，已跳过",
        path.display()
    ));
}

/// 打印单文件处理错误
pub fn print_file_error(path: &Path, reason: &str) {
    println!(
        "{} {}",
        format!("处理文件 '{}' 时出错:", path.display()).red(),
        reason
    );
}

/// 打印替换内容
pub fn print_substitution(old: &str, new: &str) {
    println!(
        "{} '{}' {} '{}'",
        "替换内容:".blue().bold(),
        old,
        "→".cyan(),
        new
    );
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("\n{}", msg.green().bold());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
