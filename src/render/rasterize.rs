use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use crate::{
    encode::tool::run_tool,
    foundation::error::{CountdownError, CountdownResult},
};

/// Executable name probed on the search path.
pub const RASTERIZER_NAME: &str = "inkscape";

/// Fallback location of a bundled rasterizer, relative to the work directory.
#[cfg(windows)]
pub const BUNDLED_RASTERIZER: &str = "inkscape/bin/inkscape.exe";
/// Fallback location of a bundled rasterizer, relative to the work directory.
#[cfg(not(windows))]
pub const BUNDLED_RASTERIZER: &str = "inkscape/bin/inkscape";

/// External SVG -> PNG converter (inkscape command line).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rasterizer {
    program: PathBuf,
}

impl Rasterizer {
    /// Use `program` as-is without checking it exists.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Find `inkscape` on `search_path`, falling back to the bundled copy under `work_dir`.
    pub fn locate(search_path: Option<&OsStr>, work_dir: &Path) -> CountdownResult<Self> {
        if let Ok(found) = which::which_in(RASTERIZER_NAME, search_path, work_dir) {
            return Ok(Self::new(found));
        }

        let bundled = work_dir.join(BUNDLED_RASTERIZER);
        if bundled.is_file() {
            return Ok(Self::new(bundled));
        }

        Err(CountdownError::configuration(format!(
            "could not find '{RASTERIZER_NAME}' on PATH or at '{}'; install inkscape on PATH \
             or pass --rasterizer",
            bundled.display()
        )))
    }

    /// Resolve a user-supplied program: an existing path (absolute or relative to `work_dir`)
    /// or a name found on `search_path`.
    pub fn resolve(
        program: &Path,
        search_path: Option<&OsStr>,
        work_dir: &Path,
    ) -> CountdownResult<Self> {
        let candidate = work_dir.join(program);
        if candidate.is_file() {
            return Ok(Self::new(candidate));
        }
        which::which_in(program.as_os_str(), search_path, work_dir)
            .map(Self::new)
            .map_err(|e| {
                CountdownError::configuration(format!(
                    "rasterizer '{}' not found: {e}",
                    program.display()
                ))
            })
    }

    /// Path of the executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed for one conversion.
    pub fn args(svg: &Path, png: &Path) -> Vec<OsString> {
        let mut export = OsString::from("--export-filename=");
        export.push(png);
        vec![
            OsString::from("--export-type=png"),
            export,
            svg.as_os_str().to_os_string(),
        ]
    }

    /// Convert `svg` into `png`, blocking until the process exits.
    ///
    /// Fails on a non-zero exit or when `png` was not produced.
    pub fn rasterize(&self, svg: &Path, png: &Path) -> CountdownResult<()> {
        run_tool(&self.program, Self::args(svg, png))?
            .into_result()?
            .expect_artifact(png)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/rasterize.rs"]
mod tests;
