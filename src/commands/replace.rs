//! # replace 命令实现
//!
//! 校验目录、打印替换信息、执行递归替换并输出汇总。
//!
//! ## 依赖关系
//! - 使用 `cli/replace.rs` 定义的参数
//! - 使用 `replace/`
//! - 使用 `utils/output.rs`

use crate::batch::BatchResult;
use crate::cli::replace::ReplaceArgs;
use crate::error::{ReplaceError, Result};
use crate::replace::{self, Substitution, WalkOptions};
use crate::utils::output;

use std::io::IsTerminal;
use tabled::{Table, Tabled};

/// 执行 replace 命令，返回修改的文件数
pub fn execute(args: ReplaceArgs) -> Result<usize> {
    // 验证目录
    if !args.directory.exists() {
        return Err(ReplaceError::DirectoryNotFound {
            path: args.directory.display().to_string(),
        });
    }
    if !args.directory.is_dir() {
        return Err(ReplaceError::NotADirectory {
            path: args.directory.display().to_string(),
        });
    }

    output::print_info("正在处理目录:", &args.directory.display().to_string());
    output::print_substitution(&args.old, &args.new);

    if args.old.is_empty() {
        output::print_warning("原字符串为空，将在每个字符之间插入新字符串");
    }

    let substitution = Substitution::new(args.old, args.new);
    let options = WalkOptions {
        dry_run: args.dry_run,
        exclude: args.exclude,
        progress: std::io::stderr().is_terminal(),
    };

    let result = replace::replace_in_directory(&args.directory, &substitution, &options)?;

    if args.dry_run {
        output::print_done(&format!(
            "完成! 共有 {} 个文件将被修改 (未写入)",
            result.changed_count()
        ));
    } else {
        output::print_done(&format!("完成! 共修改了 {} 个文件", result.changed_count()));
    }

    if args.stats {
        print_stats_table(&result);
    }

    Ok(result.changed_count())
}

/// 统计表格的一行
#[derive(Debug, PartialEq, Eq, Tabled)]
struct StatRow {
    #[tabled(rename = "结果")]
    outcome: &'static str,
    #[tabled(rename = "文件数")]
    count: usize,
}

/// 按结果分类汇总
fn stats_rows(result: &BatchResult) -> Vec<StatRow> {
    [
        ("已修改", result.changed_count()),
        ("无变化", result.unchanged),
        ("非文本已跳过", result.skipped),
        ("出错", result.failed()),
        ("合计", result.total()),
    ]
    .into_iter()
    .map(|(outcome, count)| StatRow { outcome, count })
    .collect()
}

/// 打印统计表格
fn print_stats_table(result: &BatchResult) {
    output::print_separator();
    println!("{}", Table::new(stats_rows(result)));

    for failure in &result.failures {
        output::print_file_error(failure.path(), &failure.to_string());
    }
}
