//! 外部ドキュメントジェネレータ連携
//!
//! `<runtime> <generator-script> <json-path>` を同期実行する。
//! 標準出力はステータス行の後に、最終行として出力先を示すJSONが1行出る前提。

use crate::config::Config;
use crate::error::{ResumeGenError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// ジェネレータが最終行に出力するJSON
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratorDescriptor {
    pub docx: PathBuf,

    #[serde(rename = "outputDir")]
    pub output_dir: PathBuf,
}

/// 標準出力の解析結果
#[derive(Debug, Clone)]
pub struct GeneratorOutput {
    /// `{` で始まらない行（ステータス表示用）
    pub status_lines: Vec<String>,
    pub descriptor: GeneratorDescriptor,
}

pub fn run_generator(config: &Config, json_path: &Path) -> Result<GeneratorDescriptor> {
    let command_line = format!(
        "{} {} {}",
        config.runtime,
        config.generator_script.display(),
        json_path.display()
    );
    tracing::debug!(command = %command_line, "ジェネレータ実行");

    let output = Command::new(&config.runtime)
        .arg(&config.generator_script)
        .arg(json_path)
        .output()
        .map_err(|source| ResumeGenError::GeneratorSpawn {
            command: command_line,
            source,
        })?;

    tracing::debug!(code = ?output.status.code(), "ジェネレータ終了");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ResumeGenError::GeneratorFailed {
            code: output.status.code(),
            stderr: stderr.trim_end().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed = parse_generator_output(&stdout)?;

    for line in &parsed.status_lines {
        println!("{}", line);
    }

    Ok(parsed.descriptor)
}

/// ジェネレータの標準出力を解析
///
/// 最終行がJSONとして解析できなければ、全出力を含むエラーを返す。
pub fn parse_generator_output(stdout: &str) -> Result<GeneratorOutput> {
    let lines: Vec<&str> = stdout
        .trim()
        .split('\n')
        .map(|l| l.trim_end_matches('\r'))
        .collect();

    let status_lines = lines
        .iter()
        .filter(|line| !line.starts_with('{'))
        .map(|line| line.to_string())
        .collect();

    // split は最低1要素を返すので last は常に Some
    let last = lines.last().copied().unwrap_or_default();
    let descriptor: GeneratorDescriptor =
        serde_json::from_str(last).map_err(|e| ResumeGenError::GeneratorOutput {
            reason: e.to_string(),
            stdout: stdout.to_string(),
        })?;

    Ok(GeneratorOutput {
        status_lines,
        descriptor,
    })
}
