pub mod render_bands;
