//! 応募データの読み込み
//!
//! 入力パスをベースディレクトリ基準で絶対パスに解決し、JSONを読み込む。

mod types;

pub use types::{is_truthy, value_text, ApplicationRecord, CoverLetter, Metadata};

use crate::error::{ResumeGenError, Result};
use std::path::{Path, PathBuf};

/// 相対パスはベースディレクトリ基準で解決。存在しなければエラー
pub fn resolve_input(base_dir: &Path, arg: &Path) -> Result<PathBuf> {
    let path = if arg.is_absolute() {
        arg.to_path_buf()
    } else {
        base_dir.join(arg)
    };

    if !path.exists() {
        return Err(ResumeGenError::FileNotFound(path.display().to_string()));
    }

    Ok(path)
}

pub fn load_application(path: &Path) -> Result<ApplicationRecord> {
    let content = std::fs::read_to_string(path)?;
    let record: ApplicationRecord = serde_json::from_str(&content)?;
    Ok(record)
}
