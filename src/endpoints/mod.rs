pub mod image_style;
