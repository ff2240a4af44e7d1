pub mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod render_state;
pub mod surface_config;
