/// Number of faces in a cubemap
pub const FACE_COUNT: usize = 6;
/// Width of a cross template (in faces)
pub const TEMPLATE_COLUMNS: u32 = 4;
/// Height of a cross template (in faces)
pub const TEMPLATE_ROWS: u32 = 3;

pub mod backend;
mod converter;
pub mod error;
pub mod face;
pub mod layout;
pub mod pipeline;

pub use crate::backend::{ImageBackend, ImageCrateBackend};
pub use crate::error::{BackendError, ConverterError, ExtractionError, LayoutError};
pub use crate::face::FaceName;
pub use crate::layout::{resolve_regions, resolve_regions_by_name, FaceLayout, GridPosition, Region};
pub use crate::pipeline::{
    build_jobs, extract_faces, extract_faces_with, run_jobs, ExtractionJob, ExtractionObserver,
    ExtractionOutcome, JobReport, NoopObserver,
};
