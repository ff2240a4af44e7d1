use crate::core::data::complex::Complex;
use crate::core::data::plane_bounds::{PlaneBounds, PlaneBoundsError};
use crate::core::data::point::Point;

/// Plane bounds paired with the pixel dimensions of the raster they are
/// rendered into. Every pixel/plane conversion goes through here so pans and
/// zooms stay geometrically consistent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    bounds: PlaneBounds,
    width: u32,
    height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(bounds: PlaneBounds, width: u32, height: u32) -> Self {
        Self {
            bounds,
            width,
            height,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> PlaneBounds {
        self.bounds
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn with_bounds(self, bounds: PlaneBounds) -> Self {
        Self { bounds, ..self }
    }

    #[must_use]
    pub fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Maps a pixel onto the plane. Row 0 is the top of the image, so the
    /// imaginary part is negated. A zero-sized axis is treated as one pixel
    /// wide to keep the mapping total.
    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        let width = self.width.max(1) as f64;
        let height = self.height.max(1) as f64;

        let real = self.bounds.x_min() + (pixel.x as f64 / width) * self.bounds.width();
        let imag = -(self.bounds.y_min() + (pixel.y as f64 / height) * self.bounds.height());

        Complex { real, imag }
    }

    /// Bounds spanned by two pixel corners dragged in any direction.
    pub fn bounds_from_rectangle(
        &self,
        corner1: Point,
        corner2: Point,
    ) -> Result<PlaneBounds, PlaneBoundsError> {
        let first = self.pixel_to_complex(corner1);
        let second = self.pixel_to_complex(corner2);

        // y bounds live on the un-flipped axis
        let (y1, y2) = (-first.imag, -second.imag);

        PlaneBounds::new(
            first.real.min(second.real),
            first.real.max(second.real),
            y1.min(y2),
            y1.max(y2),
        )
    }

    /// Plane delta that keeps the point under `from` pinned under the
    /// pointer once it has moved to `to`.
    #[must_use]
    pub fn drag_delta(&self, from: Point, to: Point) -> Complex {
        let start = self.pixel_to_complex(from);
        let current = self.pixel_to_complex(to);

        Complex {
            real: start.real - current.real,
            imag: start.imag - current.imag,
        }
    }

    pub fn panned(&self, delta_real: f64, delta_imag: f64) -> Result<PlaneBounds, PlaneBoundsError> {
        self.bounds.translated(delta_real, delta_imag)
    }
}
