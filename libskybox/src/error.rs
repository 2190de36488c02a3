extern crate miette;
extern crate thiserror;

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::face::FaceName;
use crate::layout::Region;

#[derive(Error, Diagnostic, Debug)]
pub enum ConverterError {
    #[error("error converting an value")]
    #[diagnostic(code(libskybox::try_from_int_error))]
    TryFromIntError(#[from] std::num::TryFromIntError),

    #[error("value {value} multiplied by {factor} overflows")]
    #[diagnostic(code(libskybox::overflow_error))]
    Overflow { value: u32, factor: u32 },
}

#[derive(Error, Diagnostic, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    #[diagnostic(code(libskybox::convert_error))]
    ConvertValue(#[from] ConverterError),

    #[error("unknown layout \"{name}\"")]
    #[diagnostic(
        code(libskybox::invalid_layout),
        help("supported layouts: {supported}")
    )]
    InvalidLayout { name: String, supported: String },

    #[error("face size must be a positive integer")]
    #[diagnostic(code(libskybox::invalid_face_size))]
    InvalidFaceSize,
}

#[derive(Error, Diagnostic, Debug)]
pub enum BackendError {
    #[error("source image \"{}\" reading error", .path.display())]
    #[diagnostic(code(libskybox::decode_error))]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("face image \"{}\" writing error", .path.display())]
    #[diagnostic(code(libskybox::encode_error))]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("region {region} is outside of the source image ({width}x{height})")]
    #[diagnostic(
        code(libskybox::region_bounds_error),
        help("check that the face size matches the texture")
    )]
    OutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },
}

#[derive(Error, Diagnostic, Debug)]
pub enum ExtractionError {
    #[error(transparent)]
    #[diagnostic(code(libskybox::convert_error))]
    ConvertValue(#[from] ConverterError),

    #[error("extraction of the {face} face failed")]
    #[diagnostic(code(libskybox::face_error))]
    Face {
        face: FaceName,
        #[source]
        #[diagnostic_source]
        source: BackendError,
    },

    #[error("extraction worker of the {face} face could not be started")]
    #[diagnostic(code(libskybox::spawn_error))]
    Spawn {
        face: FaceName,
        #[source]
        source: std::io::Error,
    },

    #[error("extraction worker of the {face} face panicked")]
    #[diagnostic(code(libskybox::worker_error))]
    WorkerPanicked { face: FaceName },
}

impl ExtractionError {
    /// Get the face the error belongs to, if any
    pub fn face(&self) -> Option<FaceName> {
        match self {
            Self::Face { face, .. } | Self::Spawn { face, .. } | Self::WorkerPanicked { face } => {
                Some(*face)
            }
            Self::ConvertValue(_) => None,
        }
    }
}
