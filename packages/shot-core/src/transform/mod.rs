pub mod color;
pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod orientation;
pub mod params;
pub mod resize;

pub use color::normalize_color;
pub use decode::{decode_bytes, decode_image};
pub use dimensions::fit_dimensions;
pub use encode::encode_jpeg;
pub use orientation::Orientation;
pub use params::{ByteBudget, OptimizeParams};
pub use resize::{resize_rgb, resize_to_fit};
