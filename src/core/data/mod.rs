pub mod colour;
pub mod complex;
pub mod plane_bounds;
pub mod point;
pub mod raster;
pub mod viewport;
