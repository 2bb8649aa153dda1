use clap::Parser;
use resume_gen::{cli, config, pipeline};
use cli::Cli;
use config::Config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // 引数エラーも終了コード1に揃える（--help/--version は0）
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    let result = Config::load().and_then(|config| {
        tracing::debug!(?config, "設定読み込み完了");
        pipeline::run(&config, &cli.application)
    });

    match result {
        Ok(summary) => {
            println!("\n✅ 完了! 出力先: {}\n", summary.output_dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("エラー: {}", e);
            ExitCode::FAILURE
        }
    }
}
