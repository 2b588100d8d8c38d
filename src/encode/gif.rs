use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{encode::tool::run_tool, foundation::error::CountdownResult};

/// Default encoder executable, looked up on PATH by the OS.
pub const DEFAULT_ENCODER: &str = "ffmpeg";

/// Playback rate of the GIF; one countdown label per second.
pub const FRAMES_PER_SECOND: u32 = 1;

/// Two-pass palette GIF encoding through the system `ffmpeg` binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GifEncoder {
    program: PathBuf,
}

impl Default for GifEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_ENCODER)
    }
}

impl GifEncoder {
    /// Use `program` as the ffmpeg executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Path or name of the executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments of pass 1: derive a palette from the frame differences.
    pub fn palette_args(pattern: &Path, palette: &Path) -> Vec<OsString> {
        let mut args = os_args(["-loglevel", "warning", "-i"]);
        args.push(pattern.into());
        args.extend(os_args(["-vf", "palettegen=stats_mode=diff", "-y"]));
        args.push(palette.into());
        args.push("-hide_banner".into());
        args
    }

    /// Arguments of pass 2: encode an infinitely looping GIF using the palette.
    pub fn encode_args(pattern: &Path, palette: &Path, output: &Path) -> Vec<OsString> {
        let fps = FRAMES_PER_SECOND.to_string();
        let mut args = os_args(["-loglevel", "warning", "-framerate", fps.as_str(), "-i"]);
        args.push(pattern.into());
        args.push("-i".into());
        args.push(palette.into());
        args.extend(os_args([
            "-filter_complex",
            "paletteuse",
            "-r",
            fps.as_str(),
            "-loop",
            "0",
            "-y",
        ]));
        args.push(output.into());
        args.push("-hide_banner".into());
        args
    }

    /// Merge the frame sequence matching `pattern` into `output`.
    ///
    /// Runs the palette pass, then the encode pass; either failing aborts with its stderr.
    pub fn assemble(&self, pattern: &Path, palette: &Path, output: &Path) -> CountdownResult<()> {
        tracing::debug!(pattern = %pattern.display(), palette = %palette.display(), "palettegen");
        run_tool(&self.program, Self::palette_args(pattern, palette))?
            .into_result()?
            .expect_artifact(palette)?;

        tracing::debug!(output = %output.display(), "paletteuse");
        run_tool(&self.program, Self::encode_args(pattern, palette, output))?
            .into_result()?
            .expect_artifact(output)?;
        Ok(())
    }
}

fn os_args<'a>(args: impl IntoIterator<Item = &'a str>) -> Vec<OsString> {
    args.into_iter().map(OsString::from).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
