use crate::core::data::plane_bounds::PlaneBoundsError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceError {
    InvalidViewport(PlaneBoundsError),
    RenderBusy,
    EmptyTarget { width: u32, height: u32 },
    BudgetOutOfRange { requested: u32, max: u32 },
}

impl SurfaceError {
    /// Busy and empty-target rejections are ordinary flow control rather
    /// than something to show the user.
    #[must_use]
    pub fn is_dropped_request(&self) -> bool {
        matches!(self, Self::RenderBusy | Self::EmptyTarget { .. })
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport(err) => write!(f, "invalid viewport: {}", err),
            Self::RenderBusy => write!(f, "a render is already in progress"),
            Self::EmptyTarget { width, height } => {
                write!(f, "cannot render into a {}x{} raster", width, height)
            }
            Self::BudgetOutOfRange { requested, max } => {
                write!(f, "iteration budget {} exceeds maximum {}", requested, max)
            }
        }
    }
}

impl Error for SurfaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidViewport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PlaneBoundsError> for SurfaceError {
    fn from(err: PlaneBoundsError) -> Self {
        Self::InvalidViewport(err)
    }
}
