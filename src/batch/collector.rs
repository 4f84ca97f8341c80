//! # 文件收集器
//!
//! 递归收集目录下的所有文件。
//!
//! ## 功能
//! - 任意深度递归，按文件名排序，输出顺序确定
//! - 不进入目录符号链接；其他符号链接（包括悬空链接）都会被收集
//! - 排除模式（glob），匹配文件名或相对根目录的路径，被排除的目录整体剪枝
//!
//! ## 依赖关系
//! - 被 `replace/mod.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配排除模式

use crate::error::{ReplaceError, Result};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 文件收集器
pub struct FileCollector {
    /// 根目录
    root: PathBuf,
    /// 排除模式列表
    excludes: Vec<Pattern>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            excludes: Vec::new(),
        }
    }

    /// 设置排除模式
    pub fn with_excludes(mut self, patterns: &[String]) -> Result<Self> {
        self.excludes = patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    ReplaceError::InvalidArgument(format!("无效的排除模式 '{}': {}", p, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 收集所有文件
    pub fn collect(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_excluded(e.path()))
            .filter_map(|e| e.ok())
            .filter(Self::is_file)
            .map(|e| e.into_path())
            .collect()
    }

    /// 除目录及指向目录的符号链接外的所有条目
    ///
    /// 悬空的符号链接也会收集，读取失败由替换阶段报告。
    fn is_file(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        !file_type.is_dir() && !(file_type.is_symlink() && entry.path().is_dir())
    }

    /// 检查路径是否匹配任一排除模式
    fn is_excluded(&self, path: &Path) -> bool {
        if self.excludes.is_empty() {
            return false;
        }

        let name = path.file_name().map(Path::new);
        let relative = path.strip_prefix(&self.root).ok();

        self.excludes.iter().any(|pattern| {
            name.is_some_and(|n| pattern.matches_path(n))
                || relative.is_some_and(|r| pattern.matches_path(r))
        })
    }
}
