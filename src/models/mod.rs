pub mod common;
pub mod gemini;
pub mod image;
pub mod pose;

pub use common::*;
pub use gemini::*;
pub use image::*;
pub use pose::*;
