pub mod algorithm;
pub mod colour_mapping;
pub mod escape_time;
pub mod fractal_mode;
