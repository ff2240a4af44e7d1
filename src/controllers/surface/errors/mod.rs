pub mod render_error;
pub mod surface_error;
