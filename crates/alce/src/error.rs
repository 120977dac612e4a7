// Author: Tom Solberg <tom.solberg@embark-studios.com>
// Copyright © 2023, Embark Studios AB, all rights reserved.
// Created: 21 February 2023

/*!

*/
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can be returned by Alce.
///
/// Note that a conversion rejected by the tool is not an error; it's
/// recorded on the job as [`crate::job::JobStatus::Failed`]. These
/// variants cover the environmental failures that abort a run.
#[derive(Error, Debug)]
pub enum AlceError {
    #[error("failed to list source directory {dir:?}")]
    Discovery {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch converter {program:?}")]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report output")]
    Report(#[from] std::io::Error),
}
