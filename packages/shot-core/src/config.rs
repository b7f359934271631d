use crate::transform::OptimizeParams;
use std::path::PathBuf;

/// バッチ実行の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// PNG を探すディレクトリ（出力先も同じ）
    pub source_dir: PathBuf,
    pub params: OptimizeParams,
}

impl OptimizerConfig {
    pub fn new(source_dir: impl Into<PathBuf>, params: OptimizeParams) -> Self {
        Self {
            source_dir: source_dir.into(),
            params,
        }
    }

    /// デフォルトのパラメータで設定を作成する
    pub fn with_defaults(source_dir: impl Into<PathBuf>) -> Self {
        Self::new(source_dir, OptimizeParams::default())
    }
}
