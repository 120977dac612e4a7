// Author: Tom Solberg <tom.solberg@embark-studios.com>
// Copyright © 2023, Embark Studios AB, all rights reserved.
// Created: 21 February 2023

use super::Outcome;
use alce::prelude::*;
use anyhow::{bail, Result};
use clap::Parser;
use std::{io::Write, path::PathBuf};

/// Convert the TFLite files in a directory to ONNX.
///
/// Output files keep the source file's name, with an `.onnx` extension.
#[derive(Parser, Debug)]
#[clap()]
pub(crate) struct BatchToOnnxArgs {
    /// The directory scanned (non-recursively) for .tflite files.
    #[clap(long = "source-dir", default_value = "./tflite")]
    source_dir: PathBuf,

    /// The directory receiving the converted files.
    #[clap(long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// The ONNX opset version passed to the converter.
    #[clap(long = "opset", default_value_t = DEFAULT_OPSET)]
    opset: u32,
}

/// Convert a TFLite file to ONNX.
#[derive(Parser, Debug)]
#[clap()]
pub(crate) struct ToOnnxArgs {
    /// The source TFLite file.
    in_file: PathBuf,

    /// The destination ONNX file.
    out_file: PathBuf,

    /// The ONNX opset version passed to the converter.
    #[clap(long = "opset", default_value_t = DEFAULT_OPSET)]
    opset: u32,
}

pub(super) fn tflite_to_onnx(config: ToOnnxArgs) -> Result<Outcome> {
    match config.in_file.extension().and_then(|ext| ext.to_str()) {
        Some("tflite") => {}
        Some(ext) => bail!("unexpected extension: {:?}", ext),
        None => bail!("file without extension: {:?}", config.in_file),
    }

    match config.out_file.extension().and_then(|ext| ext.to_str()) {
        Some("onnx") => {}
        Some(ext) => bail!("unexpected extension: {:?}", ext),
        None => bail!("file without extension: {:?}", config.out_file),
    }

    let job = ConversionJob::from_paths(config.in_file, config.out_file);
    let mut runner = Tf2Onnx::new(config.opset);

    let report = convert_file(job, &mut runner, &mut std::io::stdout().lock())?;

    Ok(if report.status.is_failed() {
        Outcome::JobsFailed
    } else {
        Outcome::Clean
    })
}

pub(super) fn batch_tflite_to_onnx(config: BatchToOnnxArgs) -> Result<Outcome> {
    let batch = BatchConfig {
        source_dir: config.source_dir,
        output_dir: config.output_dir,
    };

    let mut runner = Tf2Onnx::new(config.opset);
    let mut out = std::io::stdout().lock();

    let summary = run_batch(&batch, &mut runner, &mut out)?;

    if !summary.reports.is_empty() {
        writeln!(
            out,
            "Converted {} of {} files",
            summary.converted(),
            summary.reports.len()
        )?;
    }

    Ok(if summary.is_clean() {
        Outcome::Clean
    } else {
        Outcome::JobsFailed
    })
}
