//! Column-level normalizers applied before record building

pub mod image;
pub mod text;
pub mod time;

pub use image::extract_png_url;
pub use text::{clean, title_case};
pub use time::process_time;
