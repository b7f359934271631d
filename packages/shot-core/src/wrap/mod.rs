pub mod svg;

pub use svg::{data_uri, render_svg, svg_path_for};
