use crate::core::data::viewport::Viewport;
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::colour_mapping::smooth_hue::SmoothHueColourMap;
use crate::core::fractals::fractal_mode::FractalMode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub mode: FractalMode,
}

impl RenderRequest {
    #[must_use]
    pub fn new(viewport: Viewport, max_iterations: u32, mode: FractalMode) -> Self {
        Self {
            viewport,
            max_iterations,
            mode,
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> EscapeTimeAlgorithm {
        EscapeTimeAlgorithm::new(self.viewport, self.max_iterations, self.mode)
    }

    #[must_use]
    pub fn colour_map(&self) -> SmoothHueColourMap {
        SmoothHueColourMap::new(self.max_iterations, self.mode.colour_normalization())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::plane_bounds::PlaneBounds;

    #[test]
    fn algorithm_and_colour_map_share_the_request_budget() {
        let viewport = Viewport::new(PlaneBounds::default(), 40, 32);
        let mode = FractalMode::Julia(Complex::new(-0.7, 0.27));
        let request = RenderRequest::new(viewport, 250, mode);

        let algorithm = request.algorithm();
        let colour_map = request.colour_map();

        assert_eq!(algorithm.viewport(), viewport);
        assert_eq!(algorithm.max_iterations(), 250);
        assert_eq!(algorithm.mode(), mode);
        assert_eq!(colour_map.max_iterations(), 250);
        assert_eq!(colour_map.normalization(), 100.0);
    }

    #[test]
    fn mandelbrot_request_uses_mandelbrot_normalization() {
        let viewport = Viewport::new(PlaneBounds::default(), 8, 8);
        let request = RenderRequest::new(viewport, 10, FractalMode::Mandelbrot);

        assert_eq!(request.colour_map().normalization(), 90.0);
    }
}
