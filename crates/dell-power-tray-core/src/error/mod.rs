use crate::ModeAxis;

use std::process::ExitStatus;

use error_location::ErrorLocation;
use thiserror::Error;

/// Mode control errors with source location tracking.
#[derive(Error, Debug)]
pub enum PowerError {
    /// A hardware control tool could not be started.
    #[error("Failed to run {program}: {source} {location}")]
    CommandSpawn {
        /// Program that was invoked.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A hardware control tool exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr} {location}")]
    CommandFailed {
        /// Program that was invoked.
        program: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A tool report did not name any known mode for the axis.
    #[error("Unrecognized {axis} report: {output:?} {location}")]
    UnrecognizedOutput {
        /// Axis whose report was being read.
        axis: ModeAxis,
        /// Raw report text.
        output: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A requested mode is not in the axis's enumerated list.
    #[error("Unknown {axis} mode: {mode} {location}")]
    UnknownMode {
        /// Axis the mode was requested for.
        axis: ModeAxis,
        /// The rejected mode token.
        mode: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The presentation shell rejected a command.
    #[error("Presentation error: {reason} {location}")]
    Presentation {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`PowerError`].
pub type Result<T> = std::result::Result<T, PowerError>;
