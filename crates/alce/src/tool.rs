/*!
The subprocess boundary towards the `tf2onnx` converter.

Everything that actually spawns a process lives behind [`ToolRunner`],
so the batch driver and the reporting can be exercised in tests with a
fake runner.
*/

use crate::error::AlceError;
use crate::job::ConversionJob;
use std::ffi::OsString;
use std::process::{Command, Output};

/// The opset version we target unless told otherwise.
pub const DEFAULT_OPSET: u32 = 13;

/// Captured outcome of one converter invocation.
///
/// Stdout and stderr are collected after the process has exited, never
/// streamed. An exit status of zero is the sole success signal.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for ToolOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Turns a job into one converter run.
pub trait ToolRunner {
    /// Convert `job.source()` into `job.target()`.
    ///
    /// An `Err` means the converter could not be run at all; a
    /// completed-but-unhappy converter is an `Ok` with `success` false.
    fn convert(&mut self, job: &ConversionJob) -> Result<ToolOutput, AlceError>;
}

/// Runs `tf2onnx.convert` through a Python interpreter.
pub struct Tf2Onnx {
    python: OsString,
    opset: u32,
}

impl Tf2Onnx {
    /// Use `python3` from the path.
    pub fn new(opset: u32) -> Self {
        Self::with_python("python3", opset)
    }

    /// Use a specific interpreter.
    pub fn with_python(python: impl Into<OsString>, opset: u32) -> Self {
        Self {
            python: python.into(),
            opset,
        }
    }

    /// The argument vector passed to the interpreter for `job`.
    pub fn arguments(&self, job: &ConversionJob) -> Vec<OsString> {
        vec![
            "-m".into(),
            "tf2onnx.convert".into(),
            "--tflite".into(),
            job.source().into(),
            "--output".into(),
            job.target().into(),
            "--opset".into(),
            self.opset.to_string().into(),
        ]
    }
}

impl ToolRunner for Tf2Onnx {
    fn convert(&mut self, job: &ConversionJob) -> Result<ToolOutput, AlceError> {
        let arguments = self.arguments(job);
        log::debug!("running {:?} {:?}", self.python, arguments);

        let output = Command::new(&self.python)
            .args(&arguments)
            .output()
            .map_err(|source| AlceError::ToolLaunch {
                program: self.python.to_string_lossy().into_owned(),
                source,
            })?;

        Ok(output.into())
    }
}
