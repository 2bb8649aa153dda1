//! 実行設定
//!
//! 優先順位: 環境変数 > `~/.config/resume-gen/config.json` > デフォルト値。
//! 相対パスはすべてベースディレクトリ（ツール自身のディレクトリ）基準で解決する。

use crate::error::{ResumeGenError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_HOME: &str = "RESUME_GEN_HOME";
pub const ENV_RUNTIME: &str = "RESUME_GEN_RUNTIME";
pub const ENV_SCRIPT: &str = "RESUME_GEN_SCRIPT";
pub const ENV_OFFICE: &str = "RESUME_GEN_OFFICE";
pub const ENV_TRACKER: &str = "RESUME_GEN_TRACKER";

const DEFAULT_RUNTIME: &str = "node";
const DEFAULT_SCRIPT: &str = "generate_resume.js";
const DEFAULT_OFFICE: &str = "libreoffice";
const DEFAULT_TRACKER: &str = "tracker.csv";

/// 設定ファイルの内容（全項目省略可）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub base_dir: Option<PathBuf>,
    pub runtime: Option<String>,
    pub generator_script: Option<PathBuf>,
    pub office_binary: Option<String>,
    pub tracker_file: Option<PathBuf>,
}

impl ConfigFile {
    /// 設定ファイルもホームディレクトリも無ければデフォルト
    pub fn load() -> Result<Self> {
        match dirs::home_dir() {
            Some(home) => Self::load_from(&Config::config_path_in(&home)),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_json::from_str(&content).map_err(|e| {
                ResumeGenError::Config(format!("{}: {}", config_path.display(), e))
            })
        } else {
            Ok(Self::default())
        }
    }
}

/// 解決済みの設定。各ステップへ明示的に渡す
#[derive(Debug, Clone)]
pub struct Config {
    /// 相対入力パスの基準ディレクトリ
    pub base_dir: PathBuf,
    /// ジェネレータを実行するランタイム（node など）
    pub runtime: String,
    /// ドキュメント生成スクリプト
    pub generator_script: PathBuf,
    /// オフィススイートの実行ファイル
    pub office_binary: String,
    /// トラッカーCSV
    pub tracker_file: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        let file = ConfigFile::load()?;
        let base_dir = Self::executable_dir()?;
        Ok(Self::resolve(file, base_dir, |key| std::env::var(key).ok()))
    }

    /// 全項目デフォルトの設定
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self::resolve(ConfigFile::default(), base_dir.into(), |_| None)
    }

    /// 設定ファイル・環境変数・デフォルトを合成
    pub fn resolve<F>(file: ConfigFile, default_base_dir: PathBuf, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // 空文字の環境変数は未設定扱い
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let base_dir = env(ENV_HOME)
            .map(PathBuf::from)
            .or(file.base_dir)
            .unwrap_or(default_base_dir);

        let runtime = env(ENV_RUNTIME)
            .or(file.runtime)
            .unwrap_or_else(|| DEFAULT_RUNTIME.into());

        let generator_script = env(ENV_SCRIPT)
            .map(PathBuf::from)
            .or(file.generator_script)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT));

        let office_binary = env(ENV_OFFICE)
            .or(file.office_binary)
            .unwrap_or_else(|| DEFAULT_OFFICE.into());

        let tracker_file = env(ENV_TRACKER)
            .map(PathBuf::from)
            .or(file.tracker_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TRACKER));

        Self {
            generator_script: anchor(&base_dir, generator_script),
            tracker_file: anchor(&base_dir, tracker_file),
            base_dir,
            runtime,
            office_binary,
        }
    }

    pub fn config_path_in(home: &Path) -> PathBuf {
        home.join(".config").join("resume-gen").join("config.json")
    }

    fn executable_dir() -> Result<PathBuf> {
        let exe = std::env::current_exe()?;
        exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            ResumeGenError::Config(format!("実行ファイルのディレクトリが不明: {}", exe.display()))
        })
    }
}

fn anchor(base_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base_dir.join(path)
    } else {
        path
    }
}
