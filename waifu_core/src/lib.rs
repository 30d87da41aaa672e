pub mod context;
pub mod error;
pub mod image;
pub mod source;

pub use context::ClientContext;
pub use error::*;
pub use image::{Categories, ImageData};
pub use source::{fetch_image_data, ImageSource};
