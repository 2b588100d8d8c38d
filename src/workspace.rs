use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::error::CountdownResult;

/// File name of the shared palette artifact.
pub const PALETTE_FILE_NAME: &str = "palette.png";

/// Suffix appended to the output stem to name the frame directory.
pub const TEMP_DIR_SUFFIX: &str = "_temp";

/// Append `.gif` unless `filename` already ends with it (any case).
pub fn gif_file_name(filename: &str) -> String {
    if filename.to_lowercase().ends_with(".gif") {
        filename.to_string()
    } else {
        format!("{filename}.gif")
    }
}

/// Where a run keeps its output and intermediates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspaceLayout {
    /// Final animated image.
    pub output_path: PathBuf,
    /// Directory holding the raster frames.
    pub temp_dir: PathBuf,
    /// Palette artifact written by the encoder's first pass.
    pub palette_path: PathBuf,
}

impl WorkspaceLayout {
    /// Derive the layout for `filename` (with `.gif` already applied) under `work_dir`.
    ///
    /// The frame directory is `<filename minus extension>_temp`; the palette sits directly
    /// in `work_dir`.
    pub fn new(work_dir: &Path, filename: &str) -> Self {
        let mut temp_name = OsString::from(Path::new(filename).with_extension(""));
        temp_name.push(TEMP_DIR_SUFFIX);
        Self {
            output_path: work_dir.join(filename),
            temp_dir: work_dir.join(temp_name),
            palette_path: work_dir.join(PALETTE_FILE_NAME),
        }
    }
}

/// Create the frame directory (and parents) if it is missing.
pub fn prepare_workspace(layout: &WorkspaceLayout) -> CountdownResult<()> {
    std::fs::create_dir_all(&layout.temp_dir).with_context(|| {
        format!(
            "failed to create frame directory '{}'",
            layout.temp_dir.display()
        )
    })?;
    Ok(())
}

/// Remove the frame directory and the palette artifact.
///
/// Failures are logged, never returned. Returns `true` when both removals succeeded.
pub fn teardown_workspace(layout: &WorkspaceLayout) -> bool {
    let mut clean = true;

    match std::fs::remove_dir_all(&layout.temp_dir) {
        Ok(()) => tracing::info!(
            "The directory at {} has been successfully deleted.",
            layout.temp_dir.display()
        ),
        Err(e) => {
            tracing::warn!("Error: {} - {e}.", layout.temp_dir.display());
            clean = false;
        }
    }

    if let Err(e) = std::fs::remove_file(&layout.palette_path) {
        tracing::warn!("Error: {} - {e}.", layout.palette_path.display());
        clean = false;
    }

    clean
}

#[cfg(test)]
#[path = "../tests/unit/workspace.rs"]
mod tests;
