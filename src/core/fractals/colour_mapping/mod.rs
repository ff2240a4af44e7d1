pub mod hsb;
pub mod smooth_hue;
