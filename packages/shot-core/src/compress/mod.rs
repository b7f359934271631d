pub mod search;

pub use search::{QualityAttempt, QualitySearch, compress_to_budget, next_quality, search_quality};
