/*!
Discovery and the batch driver.
*/

use crate::error::AlceError;
use crate::job::{ConversionJob, JobReport, JobStatus};
use crate::tool::ToolRunner;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where to look for models, and where the results go.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Scanned non-recursively for `.tflite` files.
    pub source_dir: PathBuf,

    /// Receives one `.onnx` file per converted model. Assumed to exist.
    pub output_dir: PathBuf,
}

/// Outcome of a whole batch run, one report per discovered file, in
/// discovery order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<JobReport>,
}

impl BatchSummary {
    pub fn converted(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.status == JobStatus::Succeeded)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.status.is_failed())
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}

/// List the `.tflite` files directly inside `source_dir`, sorted by
/// name so a batch always runs in the same order.
pub fn discover(source_dir: &Path) -> Result<Vec<PathBuf>, AlceError> {
    let entries = std::fs::read_dir(source_dir).map_err(|source| AlceError::Discovery {
        dir: source_dir.to_path_buf(),
        source,
    })?;

    let mut files = vec![];
    for entry in entries {
        let entry = entry.map_err(|source| AlceError::Discovery {
            dir: source_dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("tflite") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Run one job and write its transcript lines to `out`.
///
/// The returned report carries the tool's stderr verbatim when the
/// conversion failed.
pub fn convert_file(
    job: ConversionJob,
    runner: &mut dyn ToolRunner,
    out: &mut dyn Write,
) -> Result<JobReport, AlceError> {
    writeln!(
        out,
        "Converting {} -> {}...",
        job.source_name(),
        job.target_name()
    )?;

    let output = runner.convert(&job)?;

    let status = if output.success {
        writeln!(
            out,
            "Successfully converted to {}",
            absolute(job.target()).display()
        )?;
        JobStatus::Succeeded
    } else {
        writeln!(out, "Error converting {}:", job.source_name())?;
        writeln!(out, "{}", output.stderr)?;
        JobStatus::Failed(output.stderr)
    };

    Ok(JobReport { job, status })
}

/// Convert every discovered file, one subprocess at a time.
///
/// A failed conversion is recorded on its report and never halts,
/// skips, or retries the jobs after it; only environmental failures
/// (unreadable source directory, unlaunchable tool, a closed sink)
/// abort the batch.
pub fn run_batch(
    config: &BatchConfig,
    runner: &mut dyn ToolRunner,
    out: &mut dyn Write,
) -> Result<BatchSummary, AlceError> {
    let sources = discover(&config.source_dir)?;

    if sources.is_empty() {
        writeln!(
            out,
            "No .tflite files found in {}",
            absolute(&config.source_dir).display()
        )?;
        return Ok(BatchSummary::default());
    }

    let mut reports = Vec::with_capacity(sources.len());
    for source in sources {
        let job = ConversionJob::new(source, &config.output_dir);
        reports.push(convert_file(job, runner, out)?);
    }

    Ok(BatchSummary { reports })
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
