//! resume-gen
//!
//! 外部ジェネレータで履歴書DOCXを生成し、オフィススイートでPDFへ変換、
//! 応募トラッカーCSVに1行追記する。

pub mod application;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod generator;
pub mod pipeline;
pub mod tracker;

pub use error::{ResumeGenError, Result};
