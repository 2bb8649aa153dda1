//! 一括処理: 入力解決 → DOCX生成 → PDF変換 → トラッカー更新
//!
//! いずれかのステップで失敗した時点で中断する。ロールバックはしない
//! （DOCXだけ生成されてトラッカーに記録が残らないこともある）。

use crate::application::{load_application, resolve_input};
use crate::config::Config;
use crate::converter::convert_to_pdf;
use crate::error::Result;
use crate::generator::run_generator;
use crate::tracker::{append_row, TrackerRow};
use std::path::{Path, PathBuf};

/// 実行結果のサマリ
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub docx: PathBuf,
    pub pdf: PathBuf,
    pub output_dir: PathBuf,
    pub tracker: PathBuf,
}

pub fn run(config: &Config, input: &Path) -> Result<RunSummary> {
    let json_path = resolve_input(&config.base_dir, input)?;
    println!("\n📄 履歴書を生成中: {}\n", json_path.display());

    let record = load_application(&json_path)?;

    // 1. DOCX生成
    println!("[1/3] DOCXを生成中...");
    let descriptor = run_generator(config, &json_path)?;
    println!("✔ DOCX生成完了: {}\n", descriptor.docx.display());

    // 2. PDF変換
    println!("[2/3] PDFに変換中...");
    let pdf = convert_to_pdf(config, &descriptor.docx)?;
    println!("✔ PDF出力: {}\n", pdf.display());

    // 3. トラッカー更新
    println!("[3/3] トラッカーを更新中...");
    let today = chrono::Local::now().date_naive();
    let row = TrackerRow::from_application(&record, &descriptor.docx, today);
    append_row(&config.tracker_file, &row)?;
    println!("✔ トラッカー更新: {}", config.tracker_file.display());

    Ok(RunSummary {
        docx: descriptor.docx,
        pdf,
        output_dir: descriptor.output_dir,
        tracker: config.tracker_file.clone(),
    })
}
