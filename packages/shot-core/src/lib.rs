pub mod batch;
pub mod compress;
pub mod config;
pub mod constants;
pub mod errors;
pub mod pipeline;
pub mod transform;
pub mod validation;
pub mod wrap;

#[cfg(test)]
mod test_fixtures;

// 公開API
pub use batch::{BatchSummary, FileOutcome, discover_sources, run_batch};
pub use compress::{QualityAttempt, QualitySearch, compress_to_budget, next_quality, search_quality};
pub use config::OptimizerConfig;
pub use constants::{
    BUDGET_MARGIN, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_TARGET_KB, INITIAL_QUALITY,
    MAX_DIMENSION, MAX_PIXELS, QUALITY_FLOOR,
};
pub use errors::{BatchError, MediaError, TransformError};
pub use pipeline::{FileReport, optimize_file};
pub use transform::{
    ByteBudget, OptimizeParams, Orientation, decode_image, encode_jpeg, fit_dimensions,
    normalize_color, resize_to_fit,
};
pub use validation::validate_params;
pub use wrap::{data_uri, render_svg, svg_path_for};
