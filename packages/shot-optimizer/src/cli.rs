use clap::Parser;
use shot_core::{
    DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_TARGET_KB, OptimizeParams, OptimizerConfig,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shot-optimizer")]
#[command(about = "Convert PNG screenshots into size-budgeted JPEG images wrapped in SVG")]
pub struct Cli {
    /// Directory containing the PNG files (SVGs are written next to them)
    #[arg(env = "SHOT_SOURCE_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Maximum output width in pixels
    #[arg(long, env = "SHOT_MAX_WIDTH", default_value_t = DEFAULT_MAX_WIDTH)]
    pub max_width: u32,

    /// Maximum output height in pixels
    #[arg(long, env = "SHOT_MAX_HEIGHT", default_value_t = DEFAULT_MAX_HEIGHT)]
    pub max_height: u32,

    /// Target SVG size in kilobytes
    #[arg(long, env = "SHOT_TARGET_KB", default_value_t = DEFAULT_TARGET_KB)]
    pub target_kb: u32,

    /// Rotate images according to their EXIF orientation tag before resizing
    #[arg(long, env = "SHOT_APPLY_EXIF_ORIENTATION")]
    pub apply_exif_orientation: bool,
}

impl Cli {
    pub fn into_config(self) -> OptimizerConfig {
        let params = OptimizeParams::new(
            Some(self.max_width),
            Some(self.max_height),
            Some(self.target_kb),
        )
        .with_exif_orientation(self.apply_exif_orientation);
        OptimizerConfig::new(self.dir, params)
    }
}
