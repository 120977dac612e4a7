// Author: Tom Solberg <tom.solberg@embark-studios.com>
// Copyright © 2023, Embark Studios AB, all rights reserved.
// Created: 21 February 2023

/*!

*/

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod to_onnx;

/// The command to run.
#[derive(Parser, Debug)]
pub(crate) enum Command {
    ToOnnx(to_onnx::ToOnnxArgs),
    BatchToOnnx(to_onnx::BatchToOnnxArgs),
}

/// What a finished command wants the process to report.
///
/// Conversion failures don't bubble up as errors, so a command that ran
/// to completion still has to say whether every job went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Every job succeeded, or there was nothing to do.
    Clean,

    /// At least one conversion failed.
    JobsFailed,
}

impl Outcome {
    pub(crate) fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Clean => ExitCode::SUCCESS,
            Outcome::JobsFailed => ExitCode::from(2),
        }
    }
}

pub(crate) fn run(command: Command) -> Result<Outcome> {
    match command {
        Command::ToOnnx(config) => to_onnx::tflite_to_onnx(config),
        Command::BatchToOnnx(config) => to_onnx::batch_tflite_to_onnx(config),
    }
}
