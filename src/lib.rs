mod controllers;
mod core;
mod storage;

pub use controllers::explorer::{Explorer, ExplorerConfig, ExplorerError, format_plane_point};
pub use controllers::surface::controller::FractalSurface;
pub use controllers::surface::data::frame_data::FrameData;
pub use controllers::surface::data::render_request::RenderRequest;
pub use controllers::surface::errors::render_error::RenderError;
pub use controllers::surface::errors::surface_error::SurfaceError;
pub use controllers::surface::events::render_event::RenderEvent;
pub use controllers::surface::ports::channel_presenter::ChannelPresenter;
pub use controllers::surface::ports::presenter_port::SurfacePresenterPort;
pub use controllers::surface::render_state::{AtomicRenderState, RenderState};
pub use controllers::surface::surface_config::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, MAX_ITERATION_BUDGET, SurfaceConfig,
};

pub use crate::core::actions::render_bands::ports::colour_map::{ColourMap, ColourMapFailure};
pub use crate::core::actions::render_bands::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_bands::render_bands::{RenderBandsError, render_bands};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::plane_bounds::{PlaneBounds, PlaneBoundsError};
pub use crate::core::data::point::Point;
pub use crate::core::data::raster::{BYTES_PER_PIXEL, Raster, RasterError};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::algorithm::{EscapeTimeAlgorithm, SampleError};
pub use crate::core::fractals::colour_mapping::hsb::hsb_to_rgb;
pub use crate::core::fractals::colour_mapping::smooth_hue::{SmoothHueColourMap, SmoothHueError};
pub use crate::core::fractals::escape_time::{ESCAPE_MODULUS_SQUARED, Escape, iterate};
pub use crate::core::fractals::fractal_mode::{FractalMode, JULIA_NORMALIZATION, MANDELBROT_NORMALIZATION};
pub use crate::core::util::calculate_render_workers::calculate_render_workers;
pub use crate::core::util::calculate_row_bands::{Band, calculate_row_bands};

pub use storage::raster_store::{DEFAULT_STORE_FOLDER, RasterStore, STORED_EXTENSION, StoreError};
pub use storage::saved_catalog::SavedFractalCatalog;
