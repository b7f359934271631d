use crate::constants::{JPEG_MEDIA_TYPE, OUTPUT_EXTENSION};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::path::{Path, PathBuf};

/// JPEG バイト列を base64 データ URI にする
pub fn data_uri(jpeg: &[u8]) -> String {
    format!("data:{JPEG_MEDIA_TYPE};base64,{}", STANDARD.encode(jpeg))
}

/// 画像1枚だけを埋め込んだ SVG 文書を生成する
pub fn render_svg(width: u32, height: u32, uri: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{width}" height="{height}" viewBox="0 0 {width} {height}" version="1.1">
  <image width="{width}" height="{height}" xlink:href="{uri}" />
</svg>"#
    )
}

/// 入力ファイルと同じ場所・同じ名前で拡張子だけ変えた出力パス
pub fn svg_path_for(source: &Path) -> PathBuf {
    source.with_extension(OUTPUT_EXTENSION)
}
