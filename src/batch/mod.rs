//! # 批量处理模块
//!
//! 提供目录下文件的批量处理能力。
//!
//! ## 功能
//! - 递归收集文件列表
//! - 顺序处理
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `replace/` 模块使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner};
