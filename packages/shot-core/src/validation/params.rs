use crate::constants::{MAX_DIMENSION, MAX_TARGET_KB};
use crate::errors::TransformError;
use crate::transform::OptimizeParams;

/// 最適化パラメータを検証する
pub fn validate_params(params: &OptimizeParams) -> Result<(), TransformError> {
    // 幅の検証
    if params.max_width == 0 || params.max_width > MAX_DIMENSION {
        return Err(TransformError::InvalidParams(format!(
            "max width must be 1-{MAX_DIMENSION}, got {}",
            params.max_width
        )));
    }

    // 高さの検証
    if params.max_height == 0 || params.max_height > MAX_DIMENSION {
        return Err(TransformError::InvalidParams(format!(
            "max height must be 1-{MAX_DIMENSION}, got {}",
            params.max_height
        )));
    }

    // 目標サイズの検証
    if params.target_kb == 0 || params.target_kb > MAX_TARGET_KB {
        return Err(TransformError::InvalidParams(format!(
            "target size must be 1-{MAX_TARGET_KB} KB, got {}",
            params.target_kb
        )));
    }

    Ok(())
}
