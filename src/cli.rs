use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resume-gen", version)]
#[command(about = "履歴書DOCX生成・PDF変換・応募トラッカー更新ツール", long_about = None)]
pub struct Cli {
    /// 応募データJSON（相対パスはツールのディレクトリ基準）
    #[arg(required = true, value_name = "APPLICATION_JSON")]
    pub application: PathBuf,
}
