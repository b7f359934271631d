use crate::constants::MAX_PIXELS;
use crate::errors::{MediaError, TransformError};
use crate::transform::orientation::Orientation;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// ファイルを読み込んで画像をデコードする
///
/// `apply_orientation` が true の場合のみ EXIF Orientation で正立させる。
/// false なら保存されたピクセル配置のまま返す。
pub fn decode_image(path: &Path, apply_orientation: bool) -> Result<DynamicImage, MediaError> {
    let data = std::fs::read(path).map_err(|e| MediaError::io(path, e))?;
    let img = decode_bytes(&data)?;

    if !apply_orientation {
        return Ok(img);
    }

    let orientation = Orientation::from_exif(&data);
    if orientation != Orientation::Normal {
        tracing::debug!(orientation = ?orientation, "applying EXIF orientation");
    }

    Ok(orientation.apply(img))
}

/// バイト列から画像をデコードする（フォーマットは内容から推測）
pub fn decode_bytes(data: &[u8]) -> Result<DynamicImage, TransformError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| TransformError::ProcessingFailed(format!("failed to guess format: {e}")))?;

    // ヘッダーだけ読んで寸法を先に検証する
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| TransformError::ProcessingFailed(format!("failed to read header: {e}")))?;
    validate_source_dimensions(width, height)?;

    let img = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| TransformError::ProcessingFailed(format!("failed to guess format: {e}")))?
        .decode()
        .map_err(|e| TransformError::ProcessingFailed(format!("decode failed: {e}")))?;

    Ok(img)
}

/// ソース画像の総ピクセル数を検証し、メモリ枯渇を防ぐ
fn validate_source_dimensions(width: u32, height: u32) -> Result<(), TransformError> {
    let total_pixels = u64::from(width) * u64::from(height);
    if total_pixels > MAX_PIXELS {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }
    Ok(())
}
