/*!

# Alce

Alce is a small toolkit for converting TFLite models to ONNX in bulk.
It doesn't read model bytes itself; the actual conversion is done by
the `tf2onnx` Python package, driven as a subprocess once per file.

The pieces are deliberately separable: [`batch::discover`] lists the
candidate files, [`job::ConversionJob`] derives the output path,
[`tool::Tf2Onnx`] owns the subprocess boundary behind the
[`tool::ToolRunner`] trait, and [`batch::run_batch`] ties them together
while writing a line-oriented transcript to any writer.

```no_run
use alce::prelude::*;

let config = BatchConfig {
    source_dir: "./tflite".into(),
    output_dir: ".".into(),
};

let mut runner = Tf2Onnx::new(DEFAULT_OPSET);
let summary = run_batch(&config, &mut runner, &mut std::io::stdout())?;
println!("{} ok, {} failed", summary.converted(), summary.failed());
# Ok::<(), alce::error::AlceError>(())
```

*/

#![warn(rust_2018_idioms)]

pub mod batch;
pub mod error;
pub mod job;
pub mod tool;

/// Most utilities are re-exported here.
pub mod prelude {
    pub use super::batch::{convert_file, discover, run_batch, BatchConfig, BatchSummary};
    pub use super::error::AlceError;
    pub use super::job::{ConversionJob, JobReport, JobStatus};
    pub use super::tool::{Tf2Onnx, ToolOutput, ToolRunner, DEFAULT_OPSET};
}
