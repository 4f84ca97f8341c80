//! # 单文件替换
//!
//! 读取文件、按 UTF-8 解码、执行字面量替换，内容有变化时原地写回。
//!
//! ## 处理结果
//! - `Changed`: 内容有变化并已写回（dry run 时不写）
//! - `Unchanged`: 替换后内容与原内容一致，不写
//! - `SkippedNonText`: UTF-8 解码失败，视为非文本文件，不写
//! - `Failed`: 读/写时的其他 I/O 错误
//!
//! 写回是整体覆盖，不经过临时文件，写入中途崩溃可能导致文件损坏。
//!
//! ## 依赖关系
//! - 被 `replace/mod.rs` 调用
//! - 使用 `error.rs` 的 `FileError`

use super::Substitution;
use crate::error::{FileError, FileOp};

use std::fs;
use std::path::Path;

/// 单个文件处理结果
#[derive(Debug)]
pub enum FileOutcome {
    /// 内容已修改
    Changed,
    /// 内容无变化
    Unchanged,
    /// 非文本文件，已跳过
    SkippedNonText,
    /// 处理失败
    Failed(FileError),
}

/// 替换单个文件中的字符串
///
/// `dry_run` 为真时只计算结果，不写回文件。
pub fn replace_in_file(path: &Path, substitution: &Substitution, dry_run: bool) -> FileOutcome {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return FileOutcome::Failed(FileError::from_io(path.to_path_buf(), FileOp::Read, e))
        }
    };

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => return FileOutcome::SkippedNonText,
    };

    let new_content = match substitution.apply(&content) {
        Some(new_content) => new_content,
        None => return FileOutcome::Unchanged,
    };

    if dry_run {
        return FileOutcome::Changed;
    }

    match fs::write(path, new_content.as_bytes()) {
        Ok(()) => FileOutcome::Changed,
        Err(e) => FileOutcome::Failed(FileError::from_io(path.to_path_buf(), FileOp::Write, e)),
    }
}
