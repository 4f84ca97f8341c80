//! # 批量执行器
//!
//! 顺序执行批量处理任务，一次只处理一个文件。
//!
//! ## 功能
//! - 进度条显示
//! - 每个文件的处理结果即时输出
//! - 结果汇总统计
//!
//! ## 依赖关系
//! - 被 `replace/mod.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 输出结果

use crate::error::FileError;
use crate::replace::FileOutcome;
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 已修改的文件
    pub changed: Vec<PathBuf>,
    /// 无变化数量
    pub unchanged: usize,
    /// 跳过的非文本文件数量
    pub skipped: usize,
    /// 失败详情
    pub failures: Vec<FileError>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, path: &Path, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Changed => self.changed.push(path.to_path_buf()),
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::SkippedNonText => self.skipped += 1,
            FileOutcome::Failed(err) => self.failures.push(err),
        }
    }

    /// 修改的文件数量
    pub fn changed_count(&self) -> usize {
        self.changed.len()
    }

    /// 失败数量
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.changed_count() + self.unchanged + self.skipped + self.failed()
    }
}

/// 批量执行器
#[derive(Debug, Default)]
pub struct BatchRunner {
    /// dry run 时修改的文件标记为“将修改”
    dry_run: bool,
    /// 是否显示进度条
    progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// 依次处理文件列表
    pub fn run<F>(&self, files: &[PathBuf], mut processor: F) -> BatchResult
    where
        F: FnMut(&Path) -> FileOutcome,
    {
        let pb = if self.progress {
            progress::create_progress_bar(files.len() as u64, "Replacing")
        } else {
            ProgressBar::hidden()
        };

        let mut result = BatchResult::default();

        for file in files {
            let outcome = processor(file);
            pb.suspend(|| self.report(file, &outcome));
            result.merge(file, outcome);
            pb.inc(1);
        }

        pb.finish_and_clear();
        result
    }

    /// 输出单个文件的处理结果，无变化的文件不输出
    fn report(&self, path: &Path, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Changed if self.dry_run => output::print_would_modify(path),
            FileOutcome::Changed => output::print_modified(path),
            FileOutcome::Unchanged => {}
            FileOutcome::SkippedNonText => output::print_skip_non_text(path),
            FileOutcome::Failed(err) => output::print_file_error(path, &err.to_string()),
        }
    }
}
