use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, error, info};

use crate::backend::{ImageBackend, ImageCrateBackend};
use crate::converter;
use crate::error::ExtractionError;
use crate::face::FaceName;
use crate::layout::Region;
use crate::FACE_COUNT;

/// Extraction of a single face, consumed by one worker
#[derive(Clone, Debug)]
pub struct ExtractionJob<'a> {
    pub face: FaceName,
    pub source_path: &'a Path,
    pub region: Region,
    pub destination_path: PathBuf,
}

/// Settled state of a single job
#[derive(Debug)]
pub struct JobReport {
    pub face: FaceName,
    pub result: Result<(), ExtractionError>,
}

impl JobReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregate result of all six jobs
#[derive(Debug)]
pub enum ExtractionOutcome {
    Success {
        elapsed_ms: u64,
        saved_directory: PathBuf,
    },
    Failure {
        cause: ExtractionError,
    },
}

impl ExtractionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Convert the outcome to elapsed milliseconds or the failure cause
    pub fn into_result(self) -> Result<u64, ExtractionError> {
        match self {
            Self::Success { elapsed_ms, .. } => Ok(elapsed_ms),
            Self::Failure { cause } => Err(cause),
        }
    }
}

/// Status hooks called from the worker threads
pub trait ExtractionObserver: Sync {
    fn job_started(&self, _job: &ExtractionJob<'_>) {}

    fn job_finished(&self, _report: &JobReport) {}
}

#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl ExtractionObserver for NoopObserver {}

/// Pair every region with its face and destination file
pub fn build_jobs<'a>(
    source: &'a Path,
    destination_dir: &Path,
    regions: &[Region; FACE_COUNT],
) -> Vec<ExtractionJob<'a>> {
    FaceName::ALL
        .iter()
        .zip(regions)
        .map(|(face, region)| ExtractionJob {
            face: *face,
            source_path: source,
            region: *region,
            destination_path: destination_dir.join(face.file_name()),
        })
        .collect()
}

/// Run every job on its own thread and wait until all of them have settled.
///
/// Reports come back in the order of `jobs`. A failing job never stops the
/// others, and nothing already written is removed.
pub fn run_jobs<B, O>(backend: &B, observer: &O, jobs: Vec<ExtractionJob<'_>>) -> Vec<JobReport>
where
    B: ImageBackend + ?Sized,
    O: ExtractionObserver + ?Sized,
{
    std::thread::scope(|scope| {
        let handles: Vec<_> = jobs
            .into_iter()
            .map(|job| {
                let face = job.face;
                let handle = std::thread::Builder::new()
                    .name(format!("skybox-{face}"))
                    .spawn_scoped(scope, move || run_job(backend, observer, job));
                (face, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(face, handle)| match handle {
                Err(error) => {
                    error!("worker of the {face} face could not be started: {error}");
                    settle_failed(observer, face, ExtractionError::Spawn { face, source: error })
                }
                Ok(handle) => match handle.join() {
                    Ok(report) => report,
                    Err(_) => {
                        error!("worker of the {face} face panicked");
                        settle_failed(observer, face, ExtractionError::WorkerPanicked { face })
                    }
                },
            })
            .collect()
    })
}

/// Report of a job whose worker did not deliver one itself
pub(crate) fn settle_failed<O>(observer: &O, face: FaceName, cause: ExtractionError) -> JobReport
where
    O: ExtractionObserver + ?Sized,
{
    let report = JobReport {
        face,
        result: Err(cause),
    };
    observer.job_finished(&report);
    report
}

fn run_job<B, O>(backend: &B, observer: &O, job: ExtractionJob<'_>) -> JobReport
where
    B: ImageBackend + ?Sized,
    O: ExtractionObserver + ?Sized,
{
    observer.job_started(&job);
    debug!(
        "extracting {} face {} into \"{}\"",
        job.face,
        job.region,
        job.destination_path.display()
    );

    let result = backend
        .extract(job.source_path, &job.region, &job.destination_path)
        .map_err(|error| ExtractionError::Face {
            face: job.face,
            source: error,
        });

    match &result {
        Ok(()) => debug!("{} face saved", job.face),
        Err(ExtractionError::Face { source, .. }) => {
            error!("{} face failed: {}", job.face, source)
        }
        Err(other) => error!("{} face failed: {}", job.face, other),
    }

    let report = JobReport {
        face: job.face,
        result,
    };
    observer.job_finished(&report);
    report
}

fn settle(reports: Vec<JobReport>, elapsed: Duration, destination_dir: &Path) -> ExtractionOutcome {
    let failed = reports.iter().filter(|report| !report.is_ok()).count();

    if let Some(cause) = reports.into_iter().find_map(|report| report.result.err()) {
        info!("extraction failed: {failed} of {FACE_COUNT} faces were not saved");
        return ExtractionOutcome::Failure { cause };
    }

    match converter::duration_to_millis(elapsed) {
        Err(error) => ExtractionOutcome::Failure {
            cause: error.into(),
        },
        Ok(elapsed_ms) => {
            info!(
                "{FACE_COUNT} faces saved into \"{}\" in {elapsed_ms} ms",
                destination_dir.display()
            );
            ExtractionOutcome::Success {
                elapsed_ms,
                saved_directory: destination_dir.to_path_buf(),
            }
        }
    }
}

/// Extract the faces with an explicit backend and observer
pub fn extract_faces_with<B, O>(
    backend: &B,
    observer: &O,
    source: &Path,
    destination_dir: &Path,
    regions: &[Region; FACE_COUNT],
) -> ExtractionOutcome
where
    B: ImageBackend + ?Sized,
    O: ExtractionObserver + ?Sized,
{
    let jobs = build_jobs(source, destination_dir, regions);

    let started = Instant::now();
    let reports = run_jobs(backend, observer, jobs);
    let elapsed = started.elapsed();

    settle(reports, elapsed, destination_dir)
}

/// Extract the six faces of `source` into `destination_dir` as PNG files
pub fn extract_faces(
    source: &Path,
    destination_dir: &Path,
    regions: &[Region; FACE_COUNT],
) -> ExtractionOutcome {
    extract_faces_with(
        &ImageCrateBackend,
        &NoopObserver,
        source,
        destination_dir,
        regions,
    )
}
