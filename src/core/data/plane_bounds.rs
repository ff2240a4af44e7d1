use std::error::Error;
use std::fmt;

pub const DEFAULT_X_MIN: f64 = -2.0;
pub const DEFAULT_X_MAX: f64 = 2.0;
pub const DEFAULT_Y_MIN: f64 = -1.6;
pub const DEFAULT_Y_MAX: f64 = 1.6;

const DISPLAY_SCALE: f64 = 100_000.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneBoundsError {
    Inverted {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    NonFinite,
}

impl fmt::Display for PlaneBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "plane bounds must satisfy min < max on both axes: x [{}, {}], y [{}, {}]",
                    x_min, x_max, y_min, y_max
                )
            }
            Self::NonFinite => write!(f, "plane bounds must be finite"),
        }
    }
}

impl Error for PlaneBoundsError {}

/// The visible rectangle of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneBounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Default for PlaneBounds {
    fn default() -> Self {
        Self {
            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            y_min: DEFAULT_Y_MIN,
            y_max: DEFAULT_Y_MAX,
        }
    }
}

impl PlaneBounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, PlaneBoundsError> {
        let values = [x_min, x_max, y_min, y_max];

        if values.iter().any(|v| !v.is_finite()) {
            return Err(PlaneBoundsError::NonFinite);
        }

        if x_min >= x_max || y_min >= y_max {
            return Err(PlaneBoundsError::Inverted {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Shifts both axes by a plane delta. The imaginary delta is subtracted
    /// because pixel rows grow downwards while `y` bounds grow upwards.
    pub fn translated(&self, delta_real: f64, delta_imag: f64) -> Result<Self, PlaneBoundsError> {
        Self::new(
            self.x_min + delta_real,
            self.x_max + delta_real,
            self.y_min - delta_imag,
            self.y_max - delta_imag,
        )
    }

    /// `[x_min, x_max, y_min, y_max]` rounded to five decimal places.
    #[must_use]
    pub fn rounded_for_display(&self) -> [f64; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .map(|v| (v * DISPLAY_SCALE).round() / DISPLAY_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let bounds = PlaneBounds::default();

        assert_eq!(bounds.x_min(), -2.0);
        assert_eq!(bounds.x_max(), 2.0);
        assert_eq!(bounds.y_min(), -1.6);
        assert_eq!(bounds.y_max(), 1.6);
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 3.2);
    }

    #[test]
    fn test_new_valid() {
        let bounds = PlaneBounds::new(-2.5, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(bounds.width(), 3.5);
        assert_eq!(bounds.height(), 2.0);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert_eq!(
            PlaneBounds::new(2.0, -2.0, -1.6, 1.6),
            Err(PlaneBoundsError::Inverted {
                x_min: 2.0,
                x_max: -2.0,
                y_min: -1.6,
                y_max: 1.6
            })
        );
        assert!(PlaneBounds::new(-2.0, 2.0, 1.6, -1.6).is_err());
    }

    #[test]
    fn test_zero_extent_rejected() {
        assert!(PlaneBounds::new(1.0, 1.0, -1.0, 1.0).is_err());
        assert!(PlaneBounds::new(-1.0, 1.0, 0.5, 0.5).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            PlaneBounds::new(f64::NAN, 1.0, -1.0, 1.0),
            Err(PlaneBoundsError::NonFinite)
        );
        assert_eq!(
            PlaneBounds::new(-1.0, f64::INFINITY, -1.0, 1.0),
            Err(PlaneBoundsError::NonFinite)
        );
    }

    #[test]
    fn test_translated_subtracts_imaginary_delta() {
        let bounds = PlaneBounds::default().translated(0.5, 0.25).unwrap();

        assert_eq!(bounds.x_min(), -1.5);
        assert_eq!(bounds.x_max(), 2.5);
        assert_eq!(bounds.y_min(), -1.85);
        assert_eq!(bounds.y_max(), 1.35);
    }

    #[test]
    fn test_rounded_for_display() {
        let bounds = PlaneBounds::new(-0.123456789, 0.987654321, -1.000004, 1.000006).unwrap();

        assert_eq!(
            bounds.rounded_for_display(),
            [-0.12346, 0.98765, -1.0, 1.00001]
        );
    }
}
