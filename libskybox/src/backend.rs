use std::path::Path;

use image::{GenericImageView, ImageFormat};

use crate::error::BackendError;
use crate::layout::Region;

/// Decode a source image, cut a region out of it and write it as a new image.
///
/// Implementations are shared between the extraction workers, so every call
/// must be independent: the source is opened again for each region.
pub trait ImageBackend: Sync {
    fn extract(&self, source: &Path, region: &Region, destination: &Path)
        -> Result<(), BackendError>;
}

/// Backend on top of the `image` crate, writing PNG files
#[derive(Copy, Clone, Debug, Default)]
pub struct ImageCrateBackend;

impl ImageBackend for ImageCrateBackend {
    fn extract(
        &self,
        source: &Path,
        region: &Region,
        destination: &Path,
    ) -> Result<(), BackendError> {
        let texture = image::open(source).map_err(|error| BackendError::Decode {
            path: source.to_path_buf(),
            source: error,
        })?;

        let (width, height) = texture.dimensions();

        // `crop_imm` clamps to the image bounds instead of failing
        if !region.fits_within(width, height) {
            return Err(BackendError::OutOfBounds {
                region: *region,
                width,
                height,
            });
        }

        let face = texture.crop_imm(region.left, region.top, region.width, region.height);

        face.save_with_format(destination, ImageFormat::Png)
            .map_err(|error| BackendError::Encode {
                path: destination.to_path_buf(),
                source: error,
            })
    }
}
