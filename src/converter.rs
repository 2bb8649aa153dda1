//! DOCX → PDF 変換（オフィススイートのヘッドレスモード）

use crate::config::Config;
use crate::error::{ResumeGenError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// 変換後のPDFパス（同じディレクトリ・同じベース名で拡張子のみ pdf）
pub fn pdf_path_for(docx_path: &Path) -> PathBuf {
    docx_path.with_extension("pdf")
}

fn output_dir_for(docx_path: &Path) -> &Path {
    match docx_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

pub fn convert_to_pdf(config: &Config, docx_path: &Path) -> Result<PathBuf> {
    let output_dir = output_dir_for(docx_path);
    let command_line = format!(
        "{} --headless --convert-to pdf --outdir {} {}",
        config.office_binary,
        output_dir.display(),
        docx_path.display()
    );
    tracing::debug!(command = %command_line, "PDF変換実行");

    let output = Command::new(&config.office_binary)
        .args(["--headless", "--convert-to", "pdf", "--outdir"])
        .arg(output_dir)
        .arg(docx_path)
        .output()
        .map_err(|source| ResumeGenError::ConverterSpawn {
            command: command_line,
            source,
        })?;

    tracing::debug!(code = ?output.status.code(), "PDF変換終了");

    if !output.status.success() {
        return Err(ResumeGenError::ConversionFailed {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).trim_end().to_string(),
        });
    }

    // 終了コードだけでは成功とみなさない
    let pdf_path = pdf_path_for(docx_path);
    if !pdf_path.exists() {
        return Err(ResumeGenError::PdfNotCreated(pdf_path.display().to_string()));
    }

    Ok(pdf_path)
}
