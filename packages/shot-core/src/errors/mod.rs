mod types;

pub use types::{BatchError, MediaError, TransformError};
