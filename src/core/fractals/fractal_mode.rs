use crate::core::data::complex::Complex;

pub const MANDELBROT_NORMALIZATION: f64 = 90.0;
pub const JULIA_NORMALIZATION: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalMode {
    #[default]
    Mandelbrot,
    Julia(Complex),
}

impl FractalMode {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia(_) => "Julia",
        }
    }

    /// Returns `(z0, c)` for a sample point.
    #[must_use]
    pub fn seed(self, point: Complex) -> (Complex, Complex) {
        match self {
            Self::Mandelbrot => (point, point),
            Self::Julia(constant) => (point, constant),
        }
    }

    /// Divisor applied to the smooth iteration count before it becomes a hue.
    #[must_use]
    pub const fn colour_normalization(self) -> f64 {
        match self {
            Self::Mandelbrot => MANDELBROT_NORMALIZATION,
            Self::Julia(_) => JULIA_NORMALIZATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandelbrot_seeds_both_from_point() {
        let point = Complex::new(0.3, -0.2);

        assert_eq!(FractalMode::Mandelbrot.seed(point), (point, point));
    }

    #[test]
    fn test_julia_seeds_constant() {
        let point = Complex::new(0.3, -0.2);
        let constant = Complex::new(-0.7, 0.27);

        assert_eq!(FractalMode::Julia(constant).seed(point), (point, constant));
    }

    #[test]
    fn test_normalization_is_per_mode() {
        assert_eq!(FractalMode::Mandelbrot.colour_normalization(), 90.0);
        assert_eq!(
            FractalMode::Julia(Complex::default()).colour_normalization(),
            100.0
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(FractalMode::Mandelbrot.display_name(), "Mandelbrot");
        assert_eq!(FractalMode::Julia(Complex::default()).display_name(), "Julia");
    }
}
