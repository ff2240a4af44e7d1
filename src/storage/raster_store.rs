use image::{ImageError, ImageFormat, RgbImage};
use log::{debug, info};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::data::raster::{Raster, RasterError};
use crate::storage::saved_catalog::SavedFractalCatalog;

pub const DEFAULT_STORE_FOLDER: &str = "Juliaset";
pub const STORED_EXTENSION: &str = "png";

#[derive(Debug)]
pub enum StoreError {
    NoCurrentRaster,
    InvalidName { name: String },
    Io(io::Error),
    Image(ImageError),
    Raster(RasterError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCurrentRaster => write!(f, "there is no rendered fractal to save"),
            Self::InvalidName { name } => write!(f, "invalid fractal name: {:?}", name),
            Self::Io(err) => write!(f, "storage error: {}", err),
            Self::Image(err) => write!(f, "image codec error: {}", err),
            Self::Raster(err) => write!(f, "stored image is not a valid raster: {}", err),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoCurrentRaster | Self::InvalidName { .. } => None,
            Self::Io(err) => Some(err),
            Self::Image(err) => Some(err),
            Self::Raster(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ImageError> for StoreError {
    fn from(err: ImageError) -> Self {
        Self::Image(err)
    }
}

impl From<RasterError> for StoreError {
    fn from(err: RasterError) -> Self {
        Self::Raster(err)
    }
}

fn check_name(name: &str) -> Result<&str, StoreError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\']);

    if invalid {
        return Err(StoreError::InvalidName {
            name: name.to_string(),
        });
    }

    Ok(name)
}

/// A flat folder of `<name>.png` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterStore {
    root: PathBuf,
}

impl Default for RasterStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FOLDER)
    }
}

impl RasterStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        let name = check_name(name)?;

        Ok(self.root.join(format!("{}.{}", name, STORED_EXTENSION)))
    }

    /// Writes `raster` as `<root>/<name>.png`, creating the folder on first
    /// use. An existing file of the same name is overwritten.
    pub fn save(&self, raster: &Raster, name: &str) -> Result<PathBuf, StoreError> {
        let path = self.path_for(name)?;

        fs::create_dir_all(&self.root)?;

        let image = RgbImage::from_raw(raster.width(), raster.height(), raster.pixels().clone())
            .ok_or(RasterError::BoundsMismatch {
                expected_size: raster.row_stride() * raster.height() as usize,
                buffer_size: raster.pixels().len(),
            })?;

        image.save_with_format(&path, ImageFormat::Png)?;

        info!("saved {}x{} raster to {}", raster.width(), raster.height(), path.display());

        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<Raster, StoreError> {
        let path = self.path_for(name)?;
        let image = image::open(&path)?.to_rgb8();
        let (width, height) = image.dimensions();

        debug!("loaded {}x{} raster from {}", width, height, path.display());

        Ok(Raster::from_data(width, height, image.into_raw())?)
    }

    /// Names of every stored raster, sorted. A missing folder is an empty
    /// catalog.
    pub fn list_saved(&self) -> Result<SavedFractalCatalog, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(SavedFractalCatalog::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();

        for entry in entries {
            let path = entry?.path();

            if !path.is_file() {
                continue;
            }

            let is_stored = path
                .extension()
                .is_some_and(|extension| extension == STORED_EXTENSION);

            if let (true, Some(stem)) = (is_stored, path.file_stem().and_then(|s| s.to_str())) {
                names.push(stem.to_string());
            }
        }

        names.sort();

        Ok(names.into_iter().collect())
    }
}
