use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn raster_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
    RowsOutsideBounds {
        start_row: u32,
        rows: u32,
        height: u32,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} raster",
                    x, y, width, height
                )
            }
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "raster size {} does not match buffer size {}",
                    expected_size, buffer_size
                )
            }
            Self::RowsOutsideBounds {
                start_row,
                rows,
                height,
            } => {
                write!(
                    f,
                    "{} rows starting at row {} do not fit a raster {} rows tall",
                    rows, start_row, height
                )
            }
        }
    }
}

impl Error for RasterError {}

pub type RasterData = Vec<u8>;

/// Row-major RGB8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: RasterData,
}

impl Raster {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; raster_buffer_size(width, height)],
        }
    }

    pub fn from_data(width: u32, height: u32, pixels: RasterData) -> Result<Self, RasterError> {
        let expected_size = raster_buffer_size(width, height);

        if expected_size != pixels.len() {
            return Err(RasterError::BoundsMismatch {
                expected_size,
                buffer_size: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
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
    pub fn pixels(&self) -> &RasterData {
        &self.pixels
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize, RasterError> {
        if x >= self.width || y >= self.height {
            return Err(RasterError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(y as usize * self.row_stride() + x as usize * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour, RasterError> {
        let index = self.index_of(x, y)?;

        Ok(Colour {
            r: self.pixels[index],
            g: self.pixels[index + 1],
            b: self.pixels[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), RasterError> {
        let index = self.index_of(x, y)?;

        self.pixels[index] = colour.r;
        self.pixels[index + 1] = colour.g;
        self.pixels[index + 2] = colour.b;

        Ok(())
    }

    /// Copies whole rows of RGB data in at `start_row`.
    pub fn write_rows(&mut self, start_row: u32, rows: &[u8]) -> Result<(), RasterError> {
        let stride = self.row_stride();
        let row_count = if stride == 0 { 0 } else { rows.len() / stride };

        if stride == 0 || rows.len() % stride != 0 {
            return Err(RasterError::BoundsMismatch {
                expected_size: row_count * stride,
                buffer_size: rows.len(),
            });
        }

        if start_row as usize + row_count > self.height as usize {
            return Err(RasterError::RowsOutsideBounds {
                start_row,
                rows: row_count as u32,
                height: self.height,
            });
        }

        let offset = start_row as usize * stride;
        self.pixels[offset..offset + rows.len()].copy_from_slice(rows);

        Ok(())
    }
}
