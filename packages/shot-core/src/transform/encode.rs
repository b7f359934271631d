use crate::errors::TransformError;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use std::io::Cursor;

/// RGB 画像を指定品質の JPEG にエンコードする
pub fn encode_jpeg(img: &RgbImage, quality: u8) -> Result<Vec<u8>, TransformError> {
    if !(1..=100).contains(&quality) {
        return Err(TransformError::InvalidParams(format!(
            "quality must be 1-100, got {quality}"
        )));
    }

    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    img.write_with_encoder(encoder)
        .map_err(|e| TransformError::ProcessingFailed(format!("JPEG encode failed: {e}")))?;

    Ok(buf.into_inner())
}
