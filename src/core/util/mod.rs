pub mod calculate_render_workers;
pub mod calculate_row_bands;
