use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeGenError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV書き込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("ジェネレータ起動エラー ({command}): {source}")]
    GeneratorSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ジェネレータ失敗 (code {code:?}):\n{stderr}")]
    GeneratorFailed { code: Option<i32>, stderr: String },

    #[error("ジェネレータ出力を解析できません: {reason}\n全出力:\n{stdout}")]
    GeneratorOutput { reason: String, stdout: String },

    #[error("変換コマンド起動エラー ({command}): {source}")]
    ConverterSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF変換エラー (code {code:?}):\n{stderr}\nstdout:\n{stdout}")]
    ConversionFailed {
        code: Option<i32>,
        stderr: String,
        stdout: String,
    },

    #[error("PDFが作成されていません: {0}")]
    PdfNotCreated(String),
}

pub type Result<T> = std::result::Result<T, ResumeGenError>;
