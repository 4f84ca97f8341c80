//! # replace-string - 批量文本替换工具
//!
//! 递归遍历目录，将所有文本文件中的原字符串替换为新字符串，并报告修改了哪些文件。
//!
//! ## 用法
//! `replace-string [OPTIONS] <目录路径> <原字符串> <新字符串>`
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── replace/   (字面量替换)
//!   │           └── batch/  (文件收集与顺序执行)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod replace;
mod utils;

use cli::Parsed;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = match cli::parse_from(std::env::args_os()) {
        Parsed::Run(cli) => cli,
        Parsed::Exit(e) => e.exit(),
        Parsed::Usage => {
            utils::output::print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
