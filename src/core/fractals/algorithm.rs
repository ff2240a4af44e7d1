use crate::core::actions::render_bands::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::{Escape, iterate};
use crate::core::fractals::fractal_mode::FractalMode;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SampleError {
    NonFiniteSample { pixel: Point },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteSample { pixel } => write!(
                f,
                "pixel (x: {}, y: {}) maps outside the representable plane",
                pixel.x, pixel.y
            ),
        }
    }
}

impl Error for SampleError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: Viewport,
    max_iterations: u32,
    mode: FractalMode,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, max_iterations: u32, mode: FractalMode) -> Self {
        Self {
            viewport,
            max_iterations,
            mode,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn mode(&self) -> FractalMode {
        self.mode
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = Escape;
    type Failure = SampleError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let point = self.viewport.pixel_to_complex(pixel);

        // finite bounds can still overflow when their span exceeds f64::MAX
        if !point.is_finite() {
            return Err(SampleError::NonFiniteSample { pixel });
        }

        let (z0, c) = self.mode.seed(point);

        Ok(iterate(z0, c, self.max_iterations))
    }
}
