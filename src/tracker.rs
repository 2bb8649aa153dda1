//! 応募トラッカー（追記専用CSV）
//!
//! 列順は固定: date, company, role, status, resume_file, cover_letter_file, notes

use crate::application::{value_text, ApplicationRecord};
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;

const DEFAULT_STATUS: &str = "draft";

/// トラッカー1行分。フィールド順がそのままCSVの列順になる
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerRow {
    pub date: String,
    pub company: String,
    pub role: String,
    pub status: String,
    pub resume_file: String,
    pub cover_letter_file: String,
    pub notes: String,
}

impl TrackerRow {
    pub fn from_application(
        record: &ApplicationRecord,
        docx_path: &Path,
        today: NaiveDate,
    ) -> Self {
        let meta = &record.metadata;

        Self {
            date: value_text(meta.date_applied.as_ref())
                .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
            company: value_text(meta.target_company.as_ref()).unwrap_or_default(),
            role: value_text(meta.target_role.as_ref()).unwrap_or_default(),
            status: value_text(meta.status.as_ref()).unwrap_or_else(|| DEFAULT_STATUS.into()),
            resume_file: docx_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            cover_letter_file: (if record.has_cover_letter() { "yes" } else { "no" }).into(),
            notes: value_text(meta.notes.as_ref()).unwrap_or_default(),
        }
    }
}

/// ファイルが存在しないか空ならヘッダ行が必要
pub fn needs_header(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true)
}

/// 1行追記（新規・空ファイルのみヘッダを書く）。既存行は切り詰めない
pub fn append_row(path: &Path, row: &TrackerRow) -> Result<()> {
    let write_header = needs_header(path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    writer.serialize(row)?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), header = write_header, "トラッカー追記");
    Ok(())
}
