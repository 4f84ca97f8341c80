//! # 字符串替换模块
//!
//! 字面量子串替换的核心逻辑。
//!
//! ## 功能
//! - `Substitution`: 原字符串/新字符串对，无转义、无模式语法
//! - `replace_in_file`: 单文件替换
//! - `replace_in_directory`: 递归遍历目录并逐个文件替换
//!
//! ## 依赖关系
//! - 被 `commands/replace.rs` 调用
//! - 使用 `batch/` 收集文件并顺序执行

pub mod file;

pub use file::{replace_in_file, FileOutcome};

use crate::batch::{BatchResult, BatchRunner, FileCollector};
use crate::error::Result;

use std::path::Path;

/// 字面量替换
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub old: String,
    pub new: String,
}

impl Substitution {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// 从左到右替换所有不重叠的出现，替换后的文本不再重新扫描。
    ///
    /// 内容无变化时返回 `None`。
    pub fn apply(&self, content: &str) -> Option<String> {
        // 空串也匹配，每个字符之间和首尾都会插入新字符串
        if !self.old.is_empty() && !content.contains(self.old.as_str()) {
            return None;
        }
        let replaced = content.replace(self.old.as_str(), &self.new);
        if replaced == content {
            None
        } else {
            Some(replaced)
        }
    }
}

/// 目录遍历选项
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// 只报告，不写回
    pub dry_run: bool,
    /// 排除的 glob 模式
    pub exclude: Vec<String>,
    /// 是否显示进度条
    pub progress: bool,
}

/// 递归遍历目录并替换所有文件中的字符串
///
/// 返回本次运行的统计，`changed_count()` 即修改的文件数。
pub fn replace_in_directory(
    root: &Path,
    substitution: &Substitution,
    options: &WalkOptions,
) -> Result<BatchResult> {
    let files = FileCollector::new(root.to_path_buf())
        .with_excludes(&options.exclude)?
        .collect();

    let runner = BatchRunner::new()
        .dry_run(options.dry_run)
        .progress(options.progress);

    Ok(runner.run(&files, |path| {
        replace_in_file(path, substitution, options.dry_run)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FileError, FileOp};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_apply_basic() {
        let sub = Substitution::new("world", "there");
        assert_eq!(sub.apply("hello world").as_deref(), Some("hello there"));
        assert_eq!(sub.apply("nothing matches"), None);
    }

    #[test]
    fn test_apply_non_overlapping_left_to_right() {
        assert_eq!(
            Substitution::new("aa", "b").apply("aaa").as_deref(),
            Some("ba")
        );
        // 替换结果中出现的新匹配不会再次替换
        assert_eq!(
            Substitution::new("ab", "aab").apply("ab").as_deref(),
            Some("aab")
        );
        assert_eq!(
            Substitution::new("x", "").apply("axbxc").as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_apply_empty_old() {
        let sub = Substitution::new("", "-");
        assert_eq!(sub.apply("ab").as_deref(), Some("-a-b-"));
        assert_eq!(sub.apply("").as_deref(), Some("-"));
        assert_eq!(Substitution::new("", "").apply("ab"), None);
    }

    #[test]
    fn test_apply_idempotent_when_new_excludes_old() {
        let sub = Substitution::new("cat", "dog");
        let once = sub.apply("cat catalog cat").unwrap();
        assert_eq!(once, "dog dogalog dog");
        assert_eq!(sub.apply(&once), None);
    }

    fn setup_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "hello world").unwrap();
        fs::write(dir.path().join("b.txt"), "nothing matches").unwrap();
        fs::write(dir.path().join("blob.bin"), [0xffu8, 0x00, 0xfe, 0x80]).unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::write(dir.path().join("sub/c.txt"), "world world").unwrap();
        fs::write(dir.path().join("sub/deeper/d.md"), "# world").unwrap();
        dir
    }

    #[test]
    fn test_replace_in_directory_counts_changed_only() {
        let dir = setup_tree();
        let sub = Substitution::new("world", "there");

        let result = replace_in_directory(dir.path(), &sub, &WalkOptions::default()).unwrap();

        assert_eq!(result.changed_count(), 3);
        assert_eq!(result.unchanged, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed(), 0);
        assert_eq!(result.total(), 5);

        let expected = vec![
            dir.path().join("a.txt"),
            dir.path().join("sub/c.txt"),
            dir.path().join("sub/deeper/d.md"),
        ];
        assert_eq!(result.changed, expected);

        assert_eq!(
            fs::read_to_string(dir.path().join("sub/c.txt")).unwrap(),
            "there there"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("b.txt")).unwrap(),
            "nothing matches"
        );
        assert_eq!(
            fs::read(dir.path().join("blob.bin")).unwrap(),
            vec![0xffu8, 0x00, 0xfe, 0x80]
        );
    }

    #[test]
    fn test_second_run_reports_nothing() {
        let dir = setup_tree();
        let sub = Substitution::new("world", "there");

        replace_in_directory(dir.path(), &sub, &WalkOptions::default()).unwrap();
        let second = replace_in_directory(dir.path(), &sub, &WalkOptions::default()).unwrap();

        assert_eq!(second.changed_count(), 0);
    }

    #[test]
    fn test_dry_run_reports_without_writing() {
        let dir = setup_tree();
        let sub = Substitution::new("world", "there");
        let options = WalkOptions {
            dry_run: true,
            ..Default::default()
        };

        let result = replace_in_directory(dir.path(), &sub, &options).unwrap();

        assert_eq!(result.changed_count(), 3);
        assert_eq!(
            fs::read_to_string(dir.path().join("a.txt")).unwrap(),
            "hello world"
        );
    }

    #[test]
    fn test_exclude_prunes_directory() {
        let dir = setup_tree();
        let sub = Substitution::new("world", "there");
        let options = WalkOptions {
            exclude: vec!["sub".to_string()],
            ..Default::default()
        };

        let result = replace_in_directory(dir.path(), &sub, &options).unwrap();

        assert_eq!(result.changed, vec![dir.path().join("a.txt")]);
        assert_eq!(
            fs::read_to_string(dir.path().join("sub/c.txt")).unwrap(),
            "world world"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_entry_fails_and_walk_continues() {
        let dir = setup_tree();
        std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("a_dangling.txt"))
            .unwrap();
        let sub = Substitution::new("world", "there");

        let result = replace_in_directory(dir.path(), &sub, &WalkOptions::default()).unwrap();

        assert_eq!(result.failed(), 1);
        assert!(matches!(
            &result.failures[0],
            FileError::NotFound {
                op: FileOp::Read,
                ..
            }
        ));
        assert_eq!(result.failures[0].path(), &dir.path().join("a_dangling.txt"));
        assert_eq!(result.changed_count(), 3);
        assert_eq!(
            fs::read_to_string(dir.path().join("a.txt")).unwrap(),
            "hello there"
        );
    }

    #[test]
    fn test_invalid_exclude_is_error() {
        let dir = setup_tree();
        let sub = Substitution::new("world", "there");
        let options = WalkOptions {
            exclude: vec!["[".to_string()],
            ..Default::default()
        };

        assert!(replace_in_directory(dir.path(), &sub, &options).is_err());
        assert_eq!(
            fs::read_to_string(dir.path().join("a.txt")).unwrap(),
            "hello world"
        );
    }
}
