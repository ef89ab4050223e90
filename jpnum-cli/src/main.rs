//! jpnum 命令行入口
//!
//! 成功：结果输出到 stdout（无换行），退出码 0
//! 失败：`<错误类别>: <信息>` 输出到 stderr，退出码 1

use std::io::Write;

use clap::Parser;

mod cli;

fn main() {
    // 初始化日志（stderr，JPNUM_LOG 控制级别）
    jpnum_core::init_logging();

    let args = cli::CliArgs::parse();

    match cli::run(&args) {
        Ok(conversion) => {
            if args.verbose {
                eprintln!("{:?}", conversion.direction);
            }

            let mut stdout = std::io::stdout().lock();
            if write!(stdout, "{}", conversion.output)
                .and_then(|_| stdout.flush())
                .is_err()
            {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "conversion failed");
            eprintln!("{}: {}", e.kind(), e);
            std::process::exit(1);
        }
    }
}
