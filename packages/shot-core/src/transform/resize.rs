use crate::errors::TransformError;
use crate::transform::dimensions::fit_dimensions;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;

/// バウンディングボックスに収まるよう縮小する
///
/// 収まっている場合は何もしない（拡大はしない）
pub fn resize_to_fit(img: RgbImage, max_w: u32, max_h: u32) -> Result<RgbImage, TransformError> {
    let (src_w, src_h) = img.dimensions();
    let (dst_w, dst_h) = fit_dimensions(src_w, src_h, max_w, max_h);

    if (dst_w, dst_h) == (src_w, src_h) {
        return Ok(img);
    }

    resize_rgb(img, dst_w, dst_h)
}

/// RGB 画像を指定サイズにリサンプリングする（Lanczos3）
pub fn resize_rgb(img: RgbImage, target_w: u32, target_h: u32) -> Result<RgbImage, TransformError> {
    let (width, height) = img.dimensions();

    let src_image = Image::from_vec_u8(width, height, img.into_raw(), PixelType::U8x3).map_err(
        |e| TransformError::ProcessingFailed(format!("failed to create source image: {e}")),
    )?;

    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x3);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        )
        .map_err(|e| TransformError::ProcessingFailed(format!("resize failed: {e}")))?;

    RgbImage::from_raw(target_w, target_h, dst_image.into_vec()).ok_or_else(|| {
        TransformError::ProcessingFailed("failed to convert resized image".to_string())
    })
}
