use crate::constants::{BUDGET_MARGIN, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_TARGET_KB};

/// 最適化パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeParams {
    pub max_width: u32,
    pub max_height: u32,
    pub target_kb: u32,
    /// EXIF Orientation に従って回転させるか（デフォルトは無効）
    pub apply_exif_orientation: bool,
}

impl Default for OptimizeParams {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            target_kb: DEFAULT_TARGET_KB,
            apply_exif_orientation: false,
        }
    }
}

impl OptimizeParams {
    /// 未指定の値はデフォルトで補完する
    pub fn new(max_width: Option<u32>, max_height: Option<u32>, target_kb: Option<u32>) -> Self {
        let defaults = Self::default();
        Self {
            max_width: max_width.unwrap_or(defaults.max_width),
            max_height: max_height.unwrap_or(defaults.max_height),
            target_kb: target_kb.unwrap_or(defaults.target_kb),
            apply_exif_orientation: defaults.apply_exif_orientation,
        }
    }

    pub fn with_exif_orientation(mut self, enabled: bool) -> Self {
        self.apply_exif_orientation = enabled;
        self
    }

    /// 品質探索で目指す JPEG のバイト数
    pub fn byte_budget(&self) -> ByteBudget {
        let bytes = (f64::from(self.target_kb) * 1024.0 * BUDGET_MARGIN).floor() as u64;
        ByteBudget(bytes)
    }
}

/// JPEG バイト数の上限
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteBudget(pub u64);

impl ByteBudget {
    pub fn bytes(self) -> u64 {
        self.0
    }

    pub fn fits(self, size: usize) -> bool {
        size as u64 <= self.0
    }

    /// 予算の `factor` 倍を超えているか
    pub fn exceeded_by(self, size: usize, factor: f64) -> bool {
        size as f64 > self.0 as f64 * factor
    }
}
