mod health;
mod image;

pub use health::health_handler;
pub use image::{category_image_handler, random_image_handler};
