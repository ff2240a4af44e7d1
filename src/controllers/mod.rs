pub mod explorer;
pub mod surface;
