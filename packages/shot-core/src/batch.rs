use crate::config::OptimizerConfig;
use crate::constants::SOURCE_EXTENSION;
use crate::errors::BatchError;
use crate::pipeline::{FileReport, display_name, optimize_file};
use crate::validation::validate_params;
use glob::MatchOptions;
use std::path::{Path, PathBuf};

/// ファイルごとの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted(FileReport),
    Failed { source: PathBuf, reason: String },
}

impl FileOutcome {
    pub fn source(&self) -> &Path {
        match self {
            Self::Converted(report) => &report.source,
            Self::Failed { source, .. } => source,
        }
    }
}

/// バッチ全体の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn converted(&self) -> usize {
        self.reports().count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.converted()
    }

    /// 予算を満たせず最低品質で書き出したファイル数
    pub fn over_budget(&self) -> usize {
        self.reports().filter(|report| !report.met_budget).count()
    }

    pub fn reports(&self) -> impl Iterator<Item = &FileReport> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Converted(report) => Some(report),
            FileOutcome::Failed { .. } => None,
        })
    }
}

/// ディレクトリ直下の `*.png` を列挙する（再帰しない、名前順）
pub fn discover_sources(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::SourceDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    // glob は文字列パターンしか扱えないため UTF-8 でないパスは拒否する
    let dir_str = dir.to_str().ok_or_else(|| {
        BatchError::InvalidPattern(format!("directory path is not valid UTF-8: {}", dir.display()))
    })?;

    // ディレクトリ名に含まれるメタ文字はエスケープする
    let escaped = glob::Pattern::escape(dir_str);
    let pattern = format!("{escaped}/*.{SOURCE_EXTENSION}");

    // ドットファイル（macOS の `._*.png` など）は対象外
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::default()
    };

    let mut sources: Vec<PathBuf> = glob::glob_with(&pattern, options)
        .map_err(|e| BatchError::InvalidPattern(e.to_string()))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    sources.sort();

    Ok(sources)
}

/// ディレクトリ内の PNG をすべて SVG に変換する
///
/// 1ファイルの失敗でバッチは止めない。ディレクトリがない場合と
/// パラメータが不正な場合のみエラーを返す。
pub fn run_batch(config: &OptimizerConfig) -> Result<BatchSummary, BatchError> {
    validate_params(&config.params)?;

    let sources = discover_sources(&config.source_dir)?;
    if sources.is_empty() {
        tracing::warn!(dir = %config.source_dir.display(), "no .png files found");
        return Ok(BatchSummary::default());
    }

    tracing::info!(count = sources.len(), "found png files, processing");

    let outcomes = sources
        .into_iter()
        .map(|source| match optimize_file(&source, &config.params) {
            Ok(report) => FileOutcome::Converted(report),
            Err(e) => {
                tracing::error!(file = %display_name(&source), error = %e, "conversion failed");
                FileOutcome::Failed {
                    source,
                    reason: e.to_string(),
                }
            }
        })
        .collect();

    let summary = BatchSummary { outcomes };
    tracing::info!(
        converted = summary.converted(),
        failed = summary.failed(),
        over_budget = summary.over_budget(),
        "done"
    );

    Ok(summary)
}
