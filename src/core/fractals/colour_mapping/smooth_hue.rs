use crate::core::actions::render_bands::ports::colour_map::{ColourMap, ColourMapFailure};
use crate::core::data::colour::Colour;
use crate::core::fractals::colour_mapping::hsb::hsb_to_rgb;
use crate::core::fractals::escape_time::Escape;
use std::error::Error;
use std::f64::consts::LN_2;
use std::fmt;

const HUE_OFFSET: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothHueError {
    IterationsExceedMax { iterations: u32, max_iterations: u32 },
    NonFiniteHue { iterations: u32, final_modulus_squared: f64 },
}

impl fmt::Display for SmoothHueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => write!(
                f,
                "iterations {} exceed max iterations {}",
                iterations, max_iterations
            ),
            Self::NonFiniteHue {
                iterations,
                final_modulus_squared,
            } => write!(
                f,
                "no finite hue for {} iterations escaping at |z|² = {}",
                iterations, final_modulus_squared
            ),
        }
    }
}

impl Error for SmoothHueError {}

/// Continuous escape-time colouring: points that never escape are black,
/// everything else gets a fully saturated hue from the fractional escape
/// count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothHueColourMap {
    max_iterations: u32,
    normalization: f64,
}

impl SmoothHueColourMap {
    #[must_use]
    pub fn new(max_iterations: u32, normalization: f64) -> Self {
        Self {
            max_iterations,
            normalization,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn normalization(&self) -> f64 {
        self.normalization
    }

    #[must_use]
    pub fn smooth_value(&self, escape: Escape) -> f64 {
        let log_modulus = escape.final_modulus_squared.sqrt().ln();

        (escape.iterations as f64 + 1.0 - log_modulus.ln() / LN_2) / self.normalization
    }

    pub fn colour_for(&self, escape: Escape) -> Result<Colour, SmoothHueError> {
        if escape.iterations > self.max_iterations {
            return Err(SmoothHueError::IterationsExceedMax {
                iterations: escape.iterations,
                max_iterations: self.max_iterations,
            });
        }

        if escape.iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let hue = self.smooth_value(escape) - HUE_OFFSET;

        if !hue.is_finite() {
            return Err(SmoothHueError::NonFiniteHue {
                iterations: escape.iterations,
                final_modulus_squared: escape.final_modulus_squared,
            });
        }

        Ok(hsb_to_rgb(hue as f32, 1.0, 1.0))
    }
}

impl ColourMap<Escape> for SmoothHueColourMap {
    fn map(&self, escape: Escape) -> Result<Colour, ColourMapFailure> {
        Ok(self.colour_for(escape)?)
    }

    fn display_name(&self) -> &str {
        "Smooth Hue"
    }
}
