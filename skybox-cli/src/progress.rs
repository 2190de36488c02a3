use libskybox::{ExtractionJob, ExtractionObserver, JobReport, FACE_COUNT};
use miette::{IntoDiagnostic, Result};

/// Progress bar advanced by the extraction workers
pub struct ProgressObserver {
    bar: indicatif::ProgressBar,
}

impl ProgressObserver {
    pub fn new() -> Result<Self> {
        let bar = indicatif::ProgressBar::new(FACE_COUNT as u64);
        bar.set_style(get_bar_style()?);
        Ok(Self::with_bar(bar))
    }

    pub fn with_bar(bar: indicatif::ProgressBar) -> Self {
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ExtractionObserver for ProgressObserver {
    fn job_started(&self, job: &ExtractionJob<'_>) {
        self.bar.set_message(job.face.file_name());
    }

    fn job_finished(&self, report: &JobReport) {
        if !report.is_ok() {
            self.bar.println(format!("{} face failed", report.face));
        }
        self.bar.inc(1);
    }
}

fn get_bar_style() -> Result<indicatif::ProgressStyle> {
    Ok(
        indicatif::ProgressStyle::with_template("[{bar:32}] {pos}/{len} {msg}")
            .into_diagnostic()?
            .progress_chars("=>-"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use libskybox::{ExtractionError, FaceName};

    #[test]
    fn bar_counts_settled_faces() {
        let observer = ProgressObserver::with_bar(indicatif::ProgressBar::hidden());

        for face in FaceName::ALL {
            let result = match face {
                FaceName::Top => Err(ExtractionError::WorkerPanicked { face }),
                _ => Ok(()),
            };
            observer.job_finished(&JobReport { face, result });
        }

        assert_eq!(observer.bar.position(), FACE_COUNT as u64);
        observer.finish();
        assert!(observer.bar.is_finished());
    }

    #[test]
    fn bar_style_is_valid() {
        assert!(get_bar_style().is_ok());
    }
}
