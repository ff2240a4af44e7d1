use rayon::prelude::*;
use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::core::actions::render_bands::ports::colour_map::{ColourMap, ColourMapFailure};
use crate::core::actions::render_bands::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::raster::{BYTES_PER_PIXEL, Raster, RasterError};
use crate::core::util::calculate_row_bands::Band;

#[derive(Debug)]
pub enum RenderBandsError<AlgFailure: Error> {
    Algorithm { band: usize, source: AlgFailure },
    ColourMap { band: usize, source: ColourMapFailure },
    Panicked { band: usize, message: String },
    Raster(RasterError),
}

impl<AlgFailure: Error> fmt::Display for RenderBandsError<AlgFailure> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm { band, source } => {
                write!(f, "fractal algorithm error in band {}: {}", band, source)
            }
            Self::ColourMap { band, source } => {
                write!(f, "colour map error in band {}: {}", band, source)
            }
            Self::Panicked { band, message } => {
                write!(f, "band {} panicked: {}", band, message)
            }
            Self::Raster(err) => write!(f, "raster error: {}", err),
        }
    }
}

impl<AlgFailure: Error + 'static> Error for RenderBandsError<AlgFailure> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm { source, .. } => Some(source),
            Self::ColourMap { source, .. } => Some(source.as_ref()),
            Self::Panicked { .. } => None,
            Self::Raster(err) => Some(err),
        }
    }
}

impl<AlgFailure: Error> From<RasterError> for RenderBandsError<AlgFailure> {
    fn from(err: RasterError) -> Self {
        Self::Raster(err)
    }
}

/// RGB rows for one band, owned by the task that produced them.
#[derive(Debug)]
struct BandBuffer {
    band: Band,
    pixels: Vec<u8>,
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn render_band<Alg, CMap>(
    width: u32,
    band: Band,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<BandBuffer, RenderBandsError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let mut pixels = Vec::with_capacity(width as usize * band.height() as usize * BYTES_PER_PIXEL);

    for y in band.rows() {
        for x in 0..width {
            let value = algorithm
                .compute(Point {
                    x: x as i32,
                    y: y as i32,
                })
                .map_err(|source| RenderBandsError::Algorithm {
                    band: band.index,
                    source,
                })?;

            let colour = colour_map
                .map(value)
                .map_err(|source| RenderBandsError::ColourMap {
                    band: band.index,
                    source,
                })?;

            pixels.extend_from_slice(&[colour.r, colour.g, colour.b]);
        }
    }

    Ok(BandBuffer { band, pixels })
}

/// Renders every band on the rayon pool and assembles the raster once all of
/// them have finished. Each band writes only to its own buffer; the first
/// failing band (by index) fails the whole render and no raster is produced.
pub fn render_bands<Alg, CMap>(
    width: u32,
    height: u32,
    bands: &[Band],
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<Raster, RenderBandsError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Failure: Send,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let band_buffers: Vec<Result<BandBuffer, RenderBandsError<Alg::Failure>>> = bands
        .par_iter()
        .map(|&band| {
            panic::catch_unwind(AssertUnwindSafe(|| {
                render_band(width, band, algorithm, colour_map)
            }))
            .unwrap_or_else(|payload| {
                Err(RenderBandsError::Panicked {
                    band: band.index,
                    message: panic_message(payload),
                })
            })
        })
        .collect();

    let mut raster = Raster::new(width, height);

    for band_buffer in band_buffers {
        let BandBuffer { band, pixels } = band_buffer?;
        raster.write_rows(band.start_row, &pixels)?;
    }

    Ok(raster)
}
