//! テスト用スタブ（ジェネレータ・オフィススイートをシェルスクリプトで代替）

#![allow(dead_code)]

use resume_gen::config::Config;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub const DOCX_NAME: &str = "Jane_Doe_Resume.docx";

/// 正常系ジェネレータ: ステータス行 + 最終行JSON
pub const GENERATOR_OK: &str = r#"
out="$(dirname "$0")/output/acme"
mkdir -p "$out"
: > "$out/Jane_Doe_Resume.docx"
echo "✓ DOCX written: $out/Jane_Doe_Resume.docx"
printf '{"docx": "%s", "outputDir": "%s"}\n' "$out/Jane_Doe_Resume.docx" "$out"
"#;

pub const GENERATOR_FAIL: &str = r#"
echo "Error: Cannot find module 'docx'" >&2
exit 3
"#;

pub const GENERATOR_NO_JSON: &str = r#"
echo "✓ DOCX written somewhere"
echo "no descriptor here"
"#;

/// 正常系コンバータ: 引数を記録して <outdir>/<basename>.pdf を作る
pub const OFFICE_OK: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$(dirname "$0")/office-args.log"
name=$(basename "$6")
: > "$5/${name%.*}.pdf"
"#;

/// 終了コード0だがPDFを作らないコンバータ
pub const OFFICE_NO_PDF: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$(dirname "$0")/office-args.log"
echo "convert /tmp/x.docx -> nowhere"
"#;

pub const OFFICE_FAIL: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$(dirname "$0")/office-args.log"
echo "source file could not be loaded" >&2
exit 1
"#;

pub const APPLICATION_JSON: &str = r#"{
  "metadata": {
    "date_applied": "2026-02-01",
    "target_company": "Acme",
    "target_role": "Platform Engineer",
    "status": "applied",
    "notes": "via referral"
  },
  "header": {"name": "Jane Doe"},
  "cover_letter": {"opening": "Dear Acme team,"}
}"#;

pub struct Workspace {
    pub dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new(generator: &str, office: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("generate_resume.sh"), generator).unwrap();

        let office_path = dir.path().join("office.sh");
        std::fs::write(&office_path, office).unwrap();
        std::fs::set_permissions(&office_path, std::fs::Permissions::from_mode(0o755)).unwrap();

        std::fs::create_dir(dir.path().join("applications")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_application(&self, name: &str, json: &str) -> PathBuf {
        let path = self.path().join("applications").join(name);
        std::fs::write(&path, json).unwrap();
        path
    }

    pub fn config(&self) -> Config {
        let mut config = Config::with_base_dir(self.path());
        config.runtime = "sh".into();
        config.generator_script = self.path().join("generate_resume.sh");
        config.office_binary = self.office_binary();
        config
    }

    pub fn office_binary(&self) -> String {
        self.path().join("office.sh").display().to_string()
    }

    pub fn docx_path(&self) -> PathBuf {
        self.path().join("output").join("acme").join(DOCX_NAME)
    }

    pub fn tracker_path(&self) -> PathBuf {
        self.path().join("tracker.csv")
    }

    /// コンバータに渡された引数（呼ばれていなければ None）
    pub fn office_args(&self) -> Option<Vec<String>> {
        std::fs::read_to_string(self.path().join("office-args.log"))
            .ok()
            .map(|s| s.lines().map(str::to_string).collect())
    }
}
