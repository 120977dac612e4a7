/*!
Conversion jobs: which file goes in, where the result lands.
*/

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// One source-file-to-target-file conversion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    source: PathBuf,
    target: PathBuf,
}

impl ConversionJob {
    /// Create a job for `source`, placing the result in `output_dir`.
    ///
    /// The target keeps the source's file stem and swaps the extension
    /// for `.onnx`, no matter how deep the source path is. Running the
    /// same job twice overwrites the same target.
    pub fn new(source: impl Into<PathBuf>, output_dir: &Path) -> Self {
        let source = source.into();

        let mut name = source.file_stem().unwrap_or_default().to_os_string();
        name.push(".onnx");
        let target = output_dir.join(name);

        Self { source, target }
    }

    /// Create a job with an explicit target path.
    pub fn from_paths(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// The source's file name, for transcript lines.
    pub fn source_name(&self) -> Cow<'_, str> {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default()
    }

    /// The target's file name, for transcript lines.
    pub fn target_name(&self) -> Cow<'_, str> {
        self.target
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default()
    }
}

/// Where a job is in its (short) life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// Created but not handed to the converter yet.
    Pending,

    /// The converter exited with status zero.
    Succeeded,

    /// The converter exited with a non-zero status; carries its stderr
    /// text verbatim.
    Failed(String),
}

impl JobStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, JobStatus::Failed(_))
    }
}

/// A job paired with its terminal status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub job: ConversionJob,
    pub status: JobStatus,
}
