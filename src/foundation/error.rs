use std::{path::PathBuf, process::ExitStatus};

/// Convenience result type used across the countdown pipeline.
pub type CountdownResult<T> = Result<T, CountdownError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum CountdownError {
    /// Invalid user-provided countdown or pipeline settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// A required external program could not be located.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An external program could not be spawned, exited non-zero, or left no output behind.
    #[error("{} failed ({}): {stderr}", .program.display(), describe_status(.status))]
    Tool {
        /// Program that was invoked.
        program: PathBuf,
        /// Exit status, `None` when the process never ran.
        status: Option<ExitStatus>,
        /// Captured standard error (or a local diagnostic when there is none).
        stderr: String,
    },

    /// Rendering of a single frame failed.
    #[error("frame {index} failed: {source}")]
    Frame {
        /// 0-based frame index.
        index: usize,
        /// Underlying failure.
        #[source]
        source: Box<CountdownError>,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CountdownError {
    /// Build a [`CountdownError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CountdownError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`CountdownError::Tool`] value.
    pub fn tool(
        program: impl Into<PathBuf>,
        status: Option<ExitStatus>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Tool {
            program: program.into(),
            status,
            stderr: stderr.into(),
        }
    }

    /// Wrap `source` as the failure of frame `index`.
    pub fn frame(index: usize, source: CountdownError) -> Self {
        Self::Frame {
            index,
            source: Box::new(source),
        }
    }

    /// Index of the failing frame, if this error came out of frame rendering.
    pub fn frame_index(&self) -> Option<usize> {
        match self {
            Self::Frame { index, .. } => Some(*index),
            _ => None,
        }
    }
}

fn describe_status(status: &Option<ExitStatus>) -> String {
    match status {
        Some(s) => s.to_string(),
        None => "did not run".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
