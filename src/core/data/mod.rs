pub mod colour;
pub mod complex;
pub mod escape_result;
pub mod fractal_config;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
