use crate::controllers::surface::errors::surface_error::SurfaceError;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::data::viewport::Viewport;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const MAX_ITERATION_BUDGET: u32 = 10_000;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 640;

pub(crate) fn check_iteration_budget(max_iterations: u32) -> Result<u32, SurfaceError> {
    if max_iterations > MAX_ITERATION_BUDGET {
        return Err(SurfaceError::BudgetOutOfRange {
            requested: max_iterations,
            max: MAX_ITERATION_BUDGET,
        });
    }

    Ok(max_iterations)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    pub bounds: PlaneBounds,
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            bounds: PlaneBounds::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl SurfaceConfig {
    #[must_use]
    pub fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.bounds, self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), SurfaceError> {
        check_iteration_budget(self.max_iterations).map(|_| ())
    }

    pub fn reset_view(&mut self) {
        self.bounds = PlaneBounds::default();
        self.max_iterations = DEFAULT_MAX_ITERATIONS;
    }
}
