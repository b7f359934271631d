use crate::compress::compress_to_budget;
use crate::errors::MediaError;
use crate::transform::{OptimizeParams, decode_image, normalize_color, resize_to_fit};
use crate::wrap::{data_uri, render_svg, svg_path_for};
use std::path::{Path, PathBuf};

/// 1ファイル分の変換結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub source_size: (u32, u32),
    pub final_size: (u32, u32),
    pub quality: u8,
    pub jpeg_bytes: usize,
    pub svg_bytes: usize,
    pub met_budget: bool,
}

/// ログ用のファイル名
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn kib(bytes: usize) -> f64 {
    bytes as f64 / 1024.0
}

/// PNG を1枚読み込み、予算内の JPEG を埋め込んだ SVG を隣に書き出す
///
/// 出力は最後に一度だけ書き込むため、途中で失敗した場合は何も残らない。
pub fn optimize_file(source: &Path, params: &OptimizeParams) -> Result<FileReport, MediaError> {
    let file = display_name(source);
    let output = svg_path_for(source);

    let img = decode_image(source, params.apply_exif_orientation)?;
    let source_size = (img.width(), img.height());

    let rgb = normalize_color(img);
    let resized = resize_to_fit(rgb, params.max_width, params.max_height)?;
    let final_size = resized.dimensions();
    tracing::info!(
        file = %file,
        width = final_size.0,
        height = final_size.1,
        "resized"
    );

    let budget = params.byte_budget();
    let search = compress_to_budget(&resized, budget)?;
    if search.met_budget {
        tracing::info!(
            file = %file,
            quality = search.quality,
            size_kb = format_args!("{:.2}", kib(search.bytes.len())),
            "target size met"
        );
    } else {
        tracing::warn!(
            file = %file,
            quality = search.quality,
            size_kb = format_args!("{:.2}", kib(search.bytes.len())),
            budget = budget.bytes(),
            "could not meet target size, using lowest quality attempt"
        );
    }

    let svg = render_svg(final_size.0, final_size.1, &data_uri(&search.bytes));
    std::fs::write(&output, &svg).map_err(|e| MediaError::io(&output, e))?;
    tracing::info!(
        file = %file,
        output = %output.display(),
        size_kb = format_args!("{:.2}", kib(svg.len())),
        "saved svg"
    );

    Ok(FileReport {
        source: source.to_path_buf(),
        output,
        source_size,
        final_size,
        quality: search.quality,
        jpeg_bytes: search.bytes.len(),
        svg_bytes: svg.len(),
        met_budget: search.met_budget,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{indexed_png, png_with_orientation};
    use base64::{Engine, engine::general_purpose::STANDARD};
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    /// SVG から埋め込み JPEG を取り出す
    fn embedded_jpeg(svg: &str) -> Vec<u8> {
        let prefix = "xlink:href=\"data:image/jpeg;base64,";
        let start = svg.find(prefix).unwrap() + prefix.len();
        let end = start + svg[start..].find('"').unwrap();
        STANDARD.decode(&svg[start..end]).unwrap()
    }

    #[test]
    fn test_large_opaque_png_is_downscaled() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("dashboard.png");
        let img = RgbImage::from_fn(3000, 2000, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        img.save_with_format(&source, ImageFormat::Png).unwrap();

        let report = optimize_file(&source, &OptimizeParams::default()).unwrap();

        assert_eq!(report.source_size, (3000, 2000));
        assert_eq!(report.final_size, (1152, 768));
        assert_eq!(report.output, dir.path().join("dashboard.svg"));
        assert!(report.quality > 5 && report.quality <= 85);

        let svg = std::fs::read_to_string(&report.output).unwrap();
        assert_eq!(svg.len(), report.svg_bytes);
        assert!(svg.contains(r#"width="1152" height="768" viewBox="0 0 1152 768""#));
        assert_eq!(svg.matches("<image").count(), 1);

        let jpeg = embedded_jpeg(&svg);
        assert_eq!(jpeg.len(), report.jpeg_bytes);
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(
            image::guess_format(&jpeg).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_transparent_png_keeps_size_and_drops_alpha() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("modal.png");
        let img = RgbaImage::from_fn(500, 400, |x, _| {
            Rgba([40, 80, 120, if x < 250 { 0 } else { 255 }])
        });
        img.save_with_format(&source, ImageFormat::Png).unwrap();

        let report = optimize_file(&source, &OptimizeParams::default()).unwrap();

        assert_eq!(report.final_size, (500, 400));
        assert!(report.met_budget);

        let svg = std::fs::read_to_string(&report.output).unwrap();
        assert!(svg.contains(r#"width="500" height="400" viewBox="0 0 500 400""#));

        let decoded = image::load_from_memory(&embedded_jpeg(&svg)).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (500, 400));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_corrupt_png_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("broken.png");
        std::fs::write(&source, b"\x89PNG\r\n\x1a\ntruncated").unwrap();

        let result = optimize_file(&source, &OptimizeParams::default());

        assert!(matches!(result, Err(MediaError::Transform(_))));
        assert!(!dir.path().join("broken.svg").exists());
    }

    #[test]
    fn test_unreachable_budget_still_writes_output() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("noise.png");
        let mut state: u32 = 7;
        let img = RgbImage::from_fn(400, 300, |_, _| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let [_, r, g, b] = state.to_be_bytes();
            Rgb([r, g, b])
        });
        DynamicImage::ImageRgb8(img)
            .save_with_format(&source, ImageFormat::Png)
            .unwrap();

        let params = OptimizeParams::new(None, None, Some(1));
        let report = optimize_file(&source, &params).unwrap();

        assert!(!report.met_budget);
        assert!(report.output.exists());
        assert_eq!(report.quality, 10);
    }

    #[test]
    fn test_palette_png_is_embedded_as_rgb() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("palette.png");
        let indices = vec![1u8; 64 * 48];
        std::fs::write(
            &source,
            indexed_png(64, 48, &[[0, 0, 0], [200, 30, 60]], &indices),
        )
        .unwrap();

        let report = optimize_file(&source, &OptimizeParams::default()).unwrap();
        assert_eq!(report.final_size, (64, 48));

        let svg = std::fs::read_to_string(&report.output).unwrap();
        let decoded = image::load_from_memory(&embedded_jpeg(&svg)).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);

        // JPEG は非可逆なので近い値であればよい
        let pixel = decoded.to_rgb8().get_pixel(32, 24).0;
        for (actual, expected) in pixel.iter().zip([200u8, 30, 60]) {
            assert!(actual.abs_diff(expected) <= 8, "{pixel:?}");
        }
    }

    #[test]
    fn test_exif_rotation_only_when_enabled() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("tagged.png");
        std::fs::write(&source, png_with_orientation(300, 200, 6)).unwrap();
        let params = OptimizeParams::new(Some(150), Some(150), None);

        let report = optimize_file(&source, &params).unwrap();
        assert_eq!(report.source_size, (300, 200));
        assert_eq!(report.final_size, (150, 100));

        let report = optimize_file(&source, &params.with_exif_orientation(true)).unwrap();
        assert_eq!(report.source_size, (200, 300));
        assert_eq!(report.final_size, (100, 150));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/a/b/shot.png")), "shot.png");
    }
}
