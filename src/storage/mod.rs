pub mod raster_store;
pub mod saved_catalog;
