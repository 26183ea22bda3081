use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::size::SizeError;
use crate::args::ArgError;
use crate::common::io_error_msg;

/// Every way a run can fail. All of them end the run with exit status 1.
#[derive(Debug, Error)]
pub enum RomSplitError {
    #[error("{0}")]
    Argument(String),

    #[error("output file '{}' would overwrite the input file", .0.display())]
    OutputIsInput(PathBuf),

    #[error("rom '{}': {}", .path.display(), .source)]
    Size {
        path: PathBuf,
        source: SizeError,
    },

    #[error("unable to open rom '{}': {}", .path.display(), io_error_msg(.source))]
    Open { path: PathBuf, source: io::Error },

    #[error("unable to read rom '{}': {}", .path.display(), io_error_msg(.source))]
    Read { path: PathBuf, source: io::Error },

    #[error("unable to write output file '{}': {}", .path.display(), io_error_msg(.source))]
    Write { path: PathBuf, source: io::Error },
}

impl From<ArgError> for RomSplitError {
    fn from(e: ArgError) -> Self {
        RomSplitError::Argument(e.to_string())
    }
}
