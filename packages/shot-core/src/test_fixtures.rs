//! テスト用の PNG を組み立てる

/// EXIF Orientation タグだけを持つ eXIf チャンク（ビッグエンディアン TIFF）
fn orientation_exif(orientation: u16) -> Vec<u8> {
    let mut exif = Vec::new();
    exif.extend_from_slice(b"MM\0\x2A");
    exif.extend_from_slice(&8u32.to_be_bytes());
    // IFD0: エントリ1件
    exif.extend_from_slice(&1u16.to_be_bytes());
    exif.extend_from_slice(&0x0112u16.to_be_bytes());
    exif.extend_from_slice(&3u16.to_be_bytes());
    exif.extend_from_slice(&1u32.to_be_bytes());
    exif.extend_from_slice(&orientation.to_be_bytes());
    exif.extend_from_slice(&[0, 0]);
    exif.extend_from_slice(&0u32.to_be_bytes());
    exif
}

/// eXIf チャンクで Orientation を指定した RGB の PNG
pub(crate) fn png_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().unwrap();
        writer
            .write_chunk(png::chunk::ChunkType(*b"eXIf"), &orientation_exif(orientation))
            .unwrap();
        writer
            .write_image_data(&vec![128u8; (width * height * 3) as usize])
            .unwrap();
        writer.finish().unwrap();
    }
    buf
}

/// カラータイプ3（パレット）の PNG
pub(crate) fn indexed_png(width: u32, height: u32, palette: &[[u8; 3]], indices: &[u8]) -> Vec<u8> {
    assert_eq!(indices.len(), (width * height) as usize, "one index per pixel");

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(palette.concat());

        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(indices).unwrap();
        writer.finish().unwrap();
    }
    buf
}

#[test]
fn test_indexed_png_header() {
    let data = indexed_png(2, 1, &[[0, 0, 0], [255, 255, 255]], &[0, 1]);

    // IHDR のカラータイプは 3
    assert_eq!(&data[12..16], b"IHDR");
    assert_eq!(data[25], 3);
}
