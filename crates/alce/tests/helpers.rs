// Author: Tom Solberg <tom.solberg@embark-studios.com>
// Copyright © 2023, Embark Studios AB, all rights reserved.
// Created: 21 February 2023

#![allow(dead_code)]

use alce::prelude::*;
use tempfile::TempDir;

/// A runner that records every job it sees and never spawns anything.
///
/// Jobs whose source file name is listed in `fail_names` report a
/// non-zero exit with `stderr`; everything else succeeds. With
/// `touch_targets` set the runner also creates the target file, like
/// the real converter would.
pub struct FakeRunner {
    pub calls: Vec<ConversionJob>,
    pub fail_names: Vec<String>,
    pub stderr: String,
    pub touch_targets: bool,
}

impl FakeRunner {
    pub fn succeeding() -> Self {
        Self {
            calls: vec![],
            fail_names: vec![],
            stderr: String::new(),
            touch_targets: false,
        }
    }

    pub fn failing_on(names: &[&str], stderr: &str) -> Self {
        Self {
            fail_names: names.iter().map(|name| (*name).to_owned()).collect(),
            stderr: stderr.to_owned(),
            ..Self::succeeding()
        }
    }

    pub fn touching_targets() -> Self {
        Self {
            touch_targets: true,
            ..Self::succeeding()
        }
    }
}

impl ToolRunner for FakeRunner {
    fn convert(&mut self, job: &ConversionJob) -> Result<ToolOutput, AlceError> {
        self.calls.push(job.clone());

        if self
            .fail_names
            .iter()
            .any(|name| job.source_name() == name.as_str())
        {
            return Ok(ToolOutput {
                success: false,
                stdout: String::new(),
                stderr: self.stderr.clone(),
            });
        }

        if self.touch_targets {
            std::fs::write(job.target(), b"onnx").expect("writable target");
        }

        Ok(ToolOutput {
            success: true,
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

/// A scratch directory seeded with the given (empty-ish) files.
pub fn dir_with(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("a tempdir");
    for name in files {
        std::fs::write(dir.path().join(name), b"TFL3").expect("a writable tempdir");
    }

    dir
}

pub fn config(source: &TempDir, output: &TempDir) -> BatchConfig {
    BatchConfig {
        source_dir: source.path().to_path_buf(),
        output_dir: output.path().to_path_buf(),
    }
}

pub fn transcript(buffer: &[u8]) -> String {
    String::from_utf8(buffer.to_vec()).expect("utf-8 transcript")
}
