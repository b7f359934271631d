use image::{DynamicImage, RgbImage};

/// JPEG 出力用に色表現を RGB8 へ正規化する
///
/// アルファチャンネルは合成せずに破棄する。パレット画像はデコード時に
/// RGB(A) へ展開済みのため、ここでは RGB8 以外をすべて変換すればよい。
pub fn normalize_color(img: DynamicImage) -> RgbImage {
    match img {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => {
            if other.color().has_alpha() {
                tracing::debug!(color = ?other.color(), "dropping alpha channel");
            }
            other.to_rgb8()
        }
    }
}
