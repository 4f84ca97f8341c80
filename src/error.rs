//! # 统一错误处理模块
//!
//! 定义 replace-string 的错误类型，使用 `thiserror` 派生。
//!
//! - `ReplaceError`: 终止整个运行的致命错误
//! - `FileError`: 单个文件的处理失败，记录后继续处理下一个文件
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 致命错误类型
#[derive(Error, Debug)]
pub enum ReplaceError {
    // ─────────────────────────────────────────────────────────────
    // 目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("错误: 目录 '{path}' 不存在")]
    DirectoryNotFound { path: String },

    #[error("错误: '{path}' 不是目录")]
    NotADirectory { path: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("错误: 无效参数: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ReplaceError>;

/// 失败发生在哪个阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Read,
    Write,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOp::Read => write!(f, "读取"),
            FileOp::Write => write!(f, "写入"),
        }
    }
}

/// 单文件处理失败
#[derive(Error, Debug)]
pub enum FileError {
    #[error("{op}失败: 权限不足 ({source})")]
    PermissionDenied {
        path: PathBuf,
        op: FileOp,
        #[source]
        source: io::Error,
    },

    #[error("{op}失败: 文件不存在 ({source})")]
    NotFound {
        path: PathBuf,
        op: FileOp,
        #[source]
        source: io::Error,
    },

    #[error("{op}失败: {source}")]
    Io {
        path: PathBuf,
        op: FileOp,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// 按 `io::ErrorKind` 归类 I/O 错误
    pub fn from_io(path: PathBuf, op: FileOp, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied { path, op, source },
            io::ErrorKind::NotFound => FileError::NotFound { path, op, source },
            _ => FileError::Io { path, op, source },
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            FileError::PermissionDenied { path, .. }
            | FileError::NotFound { path, .. }
            | FileError::Io { path, .. } => path,
        }
    }
}
