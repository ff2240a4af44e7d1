use log::debug;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::controllers::surface::controller::FractalSurface;
use crate::controllers::surface::data::render_request::RenderRequest;
use crate::controllers::surface::errors::surface_error::SurfaceError;
use crate::controllers::surface::ports::presenter_port::SurfacePresenterPort;
use crate::controllers::surface::surface_config::SurfaceConfig;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::storage::raster_store::{DEFAULT_STORE_FOLDER, RasterStore, StoreError};
use crate::storage::saved_catalog::SavedFractalCatalog;

const READOUT_SCALE: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub mandelbrot: SurfaceConfig,
    pub julia: SurfaceConfig,
    pub store_folder: PathBuf,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            mandelbrot: SurfaceConfig::default(),
            julia: SurfaceConfig::default(),
            store_folder: PathBuf::from(DEFAULT_STORE_FOLDER),
        }
    }
}

#[derive(Debug)]
pub enum ExplorerError {
    Surface(SurfaceError),
    Store(StoreError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "{}", err),
            Self::Store(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<SurfaceError> for ExplorerError {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}

impl From<StoreError> for ExplorerError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Formats a plane point as `a + bi` or `a - bi`, both parts rounded to
/// three decimals.
#[must_use]
pub fn format_plane_point(point: Complex) -> String {
    let real = (point.real * READOUT_SCALE).round() / READOUT_SCALE;
    let imag = (point.imag * READOUT_SCALE).round() / READOUT_SCALE;

    if imag < 0.0 {
        format!("{} - {}i", real, -imag)
    } else {
        format!("{} + {}i", real, imag.abs())
    }
}

/// Busy and empty-target rejections become `None`; everything else passes
/// through.
fn accepted(result: Result<u64, SurfaceError>) -> Result<Option<u64>, SurfaceError> {
    match result {
        Ok(generation) => Ok(Some(generation)),
        Err(err) if err.is_dropped_request() => Ok(None),
        Err(err) => Err(err),
    }
}

/// A Mandelbrot surface driving a companion Julia surface. Navigation acts on
/// the Mandelbrot surface; picking a point on it renders the Julia set for
/// that point.
pub struct Explorer {
    mandelbrot: FractalSurface,
    julia: FractalSurface,
    store: RasterStore,
    catalog: SavedFractalCatalog,
    constant_julia: bool,
    selected_point: Option<Complex>,
}

impl Explorer {
    pub fn new(
        config: ExplorerConfig,
        mandelbrot_port: Arc<dyn SurfacePresenterPort>,
        julia_port: Arc<dyn SurfacePresenterPort>,
    ) -> Result<Self, ExplorerError> {
        let mandelbrot = FractalSurface::new("Mandelbrot", config.mandelbrot, mandelbrot_port)?;
        let julia = FractalSurface::new("Julia", config.julia, julia_port)?;
        let store = RasterStore::new(config.store_folder);
        let catalog = store.list_saved()?;

        debug!("explorer store has {} saved fractals", catalog.len());

        Ok(Self {
            mandelbrot,
            julia,
            store,
            catalog,
            constant_julia: false,
            selected_point: None,
        })
    }

    #[must_use]
    pub fn mandelbrot(&self) -> &FractalSurface {
        &self.mandelbrot
    }

    #[must_use]
    pub fn julia(&self) -> &FractalSurface {
        &self.julia
    }

    #[must_use]
    pub fn store(&self) -> &RasterStore {
        &self.store
    }

    #[must_use]
    pub fn catalog(&self) -> &SavedFractalCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn selected_point(&self) -> Option<Complex> {
        self.selected_point
    }

    #[must_use]
    pub fn is_constant_julia(&self) -> bool {
        self.constant_julia
    }

    /// In constant mode the Julia surface follows the pointer and clicks are
    /// ignored.
    pub fn set_constant_julia(&mut self, enabled: bool) {
        self.constant_julia = enabled;
    }

    pub fn render_mandelbrot(&self) -> Result<u64, SurfaceError> {
        self.mandelbrot.render(FractalMode::Mandelbrot)
    }

    fn render_julia_at(&mut self, pixel: Point) -> Result<Option<u64>, SurfaceError> {
        if self.mandelbrot.is_rendering() {
            return Ok(None);
        }

        let constant = self.mandelbrot.pixel_to_complex(pixel);
        // the Julia surface always follows the Mandelbrot budget
        let request = RenderRequest::new(
            self.julia.viewport(),
            self.mandelbrot.max_iterations(),
            FractalMode::Julia(constant),
        );
        let generation = accepted(self.julia.request_render(request))?;

        if generation.is_some() {
            self.selected_point = Some(constant);
        }

        Ok(generation)
    }

    /// Renders the Julia set for the Mandelbrot point under `pixel`.
    /// Ignored in constant mode or while the Mandelbrot surface is rendering.
    pub fn select_point(&mut self, pixel: Point) -> Result<Option<u64>, SurfaceError> {
        if self.constant_julia {
            return Ok(None);
        }

        self.render_julia_at(pixel)
    }

    pub fn pointer_moved(&mut self, pixel: Point) -> Result<Option<u64>, SurfaceError> {
        if !self.constant_julia {
            return Ok(None);
        }

        self.render_julia_at(pixel)
    }

    /// Panel and plane coordinates under the pointer.
    #[must_use]
    pub fn pointer_readout(&self, pixel: Point) -> (String, String) {
        (
            format!("({}, {})", pixel.x, pixel.y),
            format_plane_point(self.mandelbrot.pixel_to_complex(pixel)),
        )
    }

    /// Current Mandelbrot bounds for display.
    #[must_use]
    pub fn bounds_readout(&self) -> [f64; 4] {
        self.mandelbrot.viewport().bounds().rounded_for_display()
    }

    pub fn zoom(&self, corner1: Point, corner2: Point) -> Result<u64, SurfaceError> {
        self.mandelbrot.set_viewport_from_rectangle(corner1, corner2)?;
        self.render_mandelbrot()
    }

    pub fn drag_pan(&self, from: Point, to: Point) -> Result<u64, SurfaceError> {
        self.mandelbrot.drag_pan(from, to)?;
        self.render_mandelbrot()
    }

    pub fn set_bounds(
        &self,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<u64, SurfaceError> {
        self.mandelbrot.set_bounds(x_min, x_max, y_min, y_max)?;
        self.render_mandelbrot()
    }

    pub fn reset(&self) -> Result<u64, SurfaceError> {
        self.mandelbrot.reset_view()?;
        self.render_mandelbrot()
    }

    pub fn set_max_iterations(&self, max_iterations: u32) -> Result<u64, SurfaceError> {
        self.mandelbrot.set_max_iterations(max_iterations)?;
        self.render_mandelbrot()
    }

    pub fn resize(&self, width: u32, height: u32) -> Result<u64, SurfaceError> {
        self.mandelbrot.resize(width, height)?;
        self.render_mandelbrot()
    }

    /// Stores the current Julia raster and lists it in the catalog.
    pub fn save_julia(&mut self, name: &str) -> Result<PathBuf, ExplorerError> {
        let path = self.julia.save_to(&self.store, name)?;
        self.catalog.insert(name);

        Ok(path)
    }

    /// Loads a stored raster. The empty name is the "no selection" entry.
    pub fn open_saved(&self, name: &str) -> Result<Option<Raster>, ExplorerError> {
        if name.is_empty() {
            return Ok(None);
        }

        Ok(Some(self.store.load(name)?))
    }
}
