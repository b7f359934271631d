use std::path::PathBuf;

use thiserror::Error;

/// ファイル単位の処理エラー
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

impl MediaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}

/// バッチ全体を止める致命的エラー
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("source directory not found: {}", path.display())]
    SourceDirNotFound { path: PathBuf },

    #[error("invalid source pattern: {0}")]
    InvalidPattern(String),

    #[error(transparent)]
    Params(#[from] TransformError),
}
