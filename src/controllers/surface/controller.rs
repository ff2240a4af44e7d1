use crate::controllers::surface::data::frame_data::FrameData;
use crate::controllers::surface::data::render_request::RenderRequest;
use crate::controllers::surface::errors::render_error::RenderError;
use crate::controllers::surface::errors::surface_error::SurfaceError;
use crate::controllers::surface::events::render_event::RenderEvent;
use crate::controllers::surface::ports::presenter_port::SurfacePresenterPort;
use crate::controllers::surface::render_state::{AtomicRenderState, RenderState};
use crate::controllers::surface::surface_config::{SurfaceConfig, check_iteration_budget};
use crate::core::actions::render_bands::render_bands::render_bands;
use crate::core::data::complex::Complex;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::util::calculate_render_workers::calculate_render_workers;
use crate::core::util::calculate_row_bands::calculate_row_bands;
use crate::storage::raster_store::{RasterStore, StoreError};
use log::{debug, error, info, warn};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    label: String,
    state: AtomicRenderState,
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    view: Mutex<SurfaceConfig>,
    raster: RwLock<Option<Arc<Raster>>>,
    pending: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn SurfacePresenterPort>,
}

impl SharedState {
    fn lock_view(&self) -> MutexGuard<'_, SurfaceConfig> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One fractal surface: owns a viewport and iteration budget, runs at most
/// one render at a time on a background worker, and publishes each finished
/// raster wholesale.
pub struct FractalSurface {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl FractalSurface {
    pub fn new(
        label: impl Into<String>,
        config: SurfaceConfig,
        presenter_port: Arc<dyn SurfacePresenterPort>,
    ) -> Result<Self, SurfaceError> {
        config.validate()?;

        let shared = Arc::new(SharedState {
            label: label.into(),
            state: AtomicRenderState::default(),
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            view: Mutex::new(config),
            raster: RwLock::new(None),
            pending: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.shared.label
    }

    #[must_use]
    pub fn render_state(&self) -> RenderState {
        self.shared.state.current()
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.render_state() == RenderState::Rendering
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.shared.lock_view().viewport()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.shared.lock_view().max_iterations
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        self.viewport().pixel_to_complex(pixel)
    }

    /// The last published raster, if any render has completed.
    #[must_use]
    pub fn current_raster(&self) -> Option<Arc<Raster>> {
        self.shared
            .raster
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    /// Stores the last published raster under `name`.
    pub fn save_to(&self, store: &RasterStore, name: &str) -> Result<PathBuf, StoreError> {
        let raster = self.current_raster().ok_or(StoreError::NoCurrentRaster)?;

        store.save(&raster, name)
    }

    /// Applies `change` to the view unless a render is in flight. The view
    /// lock is held across the state check so a render cannot be accepted
    /// halfway through the change.
    fn update_view<T>(
        &self,
        change: impl FnOnce(&mut SurfaceConfig) -> Result<T, SurfaceError>,
    ) -> Result<T, SurfaceError> {
        let mut view = self.shared.lock_view();

        if self.shared.state.current() == RenderState::Rendering {
            return Err(SurfaceError::RenderBusy);
        }

        let mut updated = *view;
        let result = change(&mut updated).inspect_err(|err| {
            if let SurfaceError::InvalidViewport(_) = err {
                warn!("{}: {}", self.shared.label, err);
            }
        })?;
        *view = updated;

        Ok(result)
    }

    pub fn set_bounds(
        &self,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<PlaneBounds, SurfaceError> {
        self.update_view(|view| {
            view.bounds = PlaneBounds::new(x_min, x_max, y_min, y_max)?;
            Ok(view.bounds)
        })
    }

    pub fn set_viewport_from_rectangle(
        &self,
        corner1: Point,
        corner2: Point,
    ) -> Result<PlaneBounds, SurfaceError> {
        self.update_view(|view| {
            view.bounds = view.viewport().bounds_from_rectangle(corner1, corner2)?;
            Ok(view.bounds)
        })
    }

    pub fn pan_by(&self, delta_real: f64, delta_imag: f64) -> Result<PlaneBounds, SurfaceError> {
        self.update_view(|view| {
            view.bounds = view.viewport().panned(delta_real, delta_imag)?;
            Ok(view.bounds)
        })
    }

    /// Pans so the plane point under `from` ends up under `to`.
    pub fn drag_pan(&self, from: Point, to: Point) -> Result<PlaneBounds, SurfaceError> {
        self.update_view(|view| {
            let viewport = view.viewport();
            let delta = viewport.drag_delta(from, to);
            view.bounds = viewport.panned(delta.real, delta.imag)?;
            Ok(view.bounds)
        })
    }

    pub fn set_max_iterations(&self, max_iterations: u32) -> Result<(), SurfaceError> {
        self.update_view(|view| {
            view.max_iterations = check_iteration_budget(max_iterations)?;
            Ok(())
        })
    }

    pub fn resize(&self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.update_view(|view| {
            *view = view.with_size(width, height);
            Ok(())
        })
    }

    pub fn reset_view(&self) -> Result<(), SurfaceError> {
        self.update_view(|view| {
            view.reset_view();
            Ok(())
        })
    }

    /// Renders the current view in `mode`.
    pub fn render(&self, mode: FractalMode) -> Result<u64, SurfaceError> {
        self.submit(|view| RenderRequest::new(view.viewport(), view.max_iterations, mode))
    }

    /// Renders an explicit request. On success the request's viewport and
    /// budget become the surface's own.
    pub fn request_render(&self, request: RenderRequest) -> Result<u64, SurfaceError> {
        check_iteration_budget(request.max_iterations)?;
        self.submit(|_| request)
    }

    fn submit(
        &self,
        build: impl FnOnce(&SurfaceConfig) -> RenderRequest,
    ) -> Result<u64, SurfaceError> {
        let view = self.shared.lock_view();
        let request = build(&*view);

        if request.viewport.is_empty() {
            debug!(
                "{}: dropping render into empty {}x{} target",
                self.shared.label,
                request.viewport.width(),
                request.viewport.height()
            );
            return Err(SurfaceError::EmptyTarget {
                width: request.viewport.width(),
                height: request.viewport.height(),
            });
        }

        if !self.shared.state.try_begin() {
            debug!("{}: dropping render request, already rendering", self.shared.label);
            return Err(SurfaceError::RenderBusy);
        }

        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        drop(view);
        self.shared.wake.notify_one();

        debug!(
            "{}: accepted {} render {} at {}x{}, {} iterations",
            self.shared.label,
            request.mode.display_name(),
            generation,
            request.viewport.width(),
            request.viewport.height(),
            request.max_iterations
        );

        Ok(generation)
    }

    pub fn shutdown(&mut self) {
        {
            let _guard = self
                .shared
                .pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.pending.lock().unwrap_or_else(PoisonError::into_inner);
                loop {
                    if let Some(job) = guard.take() {
                        break job;
                    }

                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let start = Instant::now();
            let result = Self::render_request(&request);
            let render_duration = start.elapsed();

            let event = match result {
                Ok(raster) => {
                    let raster = Arc::new(raster);

                    {
                        // raster and viewport change together under the view lock
                        let mut view = shared.lock_view();
                        let mut published =
                            shared.raster.write().unwrap_or_else(PoisonError::into_inner);
                        *published = Some(Arc::clone(&raster));
                        drop(published);

                        view.bounds = request.viewport.bounds();
                        view.width = request.viewport.width();
                        view.height = request.viewport.height();
                        view.max_iterations = request.max_iterations;
                        shared.state.finish();
                    }

                    info!(
                        "{}: render {} finished in {:?}",
                        shared.label, job_generation, render_duration
                    );

                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        raster,
                        viewport: request.viewport,
                        render_duration,
                    })
                }
                Err(message) => {
                    error!("{}: render {} failed: {}", shared.label, job_generation, message);
                    shared.state.finish();

                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message,
                    })
                }
            };

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
            let presented = panic::catch_unwind(AssertUnwindSafe(|| {
                shared.presenter_port.present(event);
            }));

            if presented.is_err() {
                error!(
                    "{}: presenter panicked handling render {}",
                    shared.label, job_generation
                );
            }
        }
    }

    fn render_request(request: &RenderRequest) -> Result<Raster, String> {
        let viewport = request.viewport;
        let bands = calculate_row_bands(viewport.height(), calculate_render_workers());

        debug!("rendering {} rows in {} bands", viewport.height(), bands.len());

        render_bands(
            viewport.width(),
            viewport.height(),
            &bands,
            &request.algorithm(),
            &request.colour_map(),
        )
        .map_err(|err| err.to_string())
    }
}

impl Drop for FractalSurface {
    fn drop(&mut self) {
        self.shutdown();
    }
}
