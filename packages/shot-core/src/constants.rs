/// 出力画像の最大幅（デフォルト）
pub const DEFAULT_MAX_WIDTH: u32 = 1366;

/// 出力画像の最大高さ（デフォルト）
pub const DEFAULT_MAX_HEIGHT: u32 = 768;

/// 出力 SVG の目標サイズ（KB）
pub const DEFAULT_TARGET_KB: u32 = 100;

/// 目標サイズに対する JPEG バイト数の割合
///
/// base64 化（約1.33倍）と SVG ラッパー分の余裕を残す
pub const BUDGET_MARGIN: f64 = 0.70;

/// 品質探索の開始値
pub const INITIAL_QUALITY: u8 = 85;

/// 品質探索の下限（この値以下は試行しない）
pub const QUALITY_FLOOR: u8 = 5;

/// バウンディングボックスの最大寸法
pub const MAX_DIMENSION: u32 = 8192;

/// 目標サイズの上限（KB）
pub const MAX_TARGET_KB: u32 = 10 * 1024;

/// 入力画像の最大ピクセル数（メモリ枯渇防止）
pub const MAX_PIXELS: u64 = 200_000_000;

/// 入力ファイルの拡張子
pub const SOURCE_EXTENSION: &str = "png";

/// 出力ファイルの拡張子
pub const OUTPUT_EXTENSION: &str = "svg";

/// データ URI のメディアタイプ
pub const JPEG_MEDIA_TYPE: &str = "image/jpeg";
