//! Countdown GIF generator.
//!
//! Turns a countdown length into an animated GIF showing `MM:SS` labels, one per second.
//!
//! # Pipeline overview
//!
//! 1. **Sequence**: `CountdownSpec -> FrameSequence` (labels down to `00:00`, plus hold frames)
//! 2. **Render**: each label is substituted into an SVG [`Template`] and rasterized to PNG by
//!    the external `inkscape` binary, sequentially or on a fixed-size worker pool
//! 3. **Encode**: the system `ffmpeg` binary builds a palette from the PNG sequence, then
//!    encodes an infinitely looping 1 fps GIF with it
//! 4. **Cleanup**: the frame directory and palette are removed once the GIF exists
//!
//! Every external call is checked: a non-zero exit or a missing artifact aborts the run with
//! the tool's stderr.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod countdown;
mod encode;
mod foundation;
mod pipeline;
mod render;
mod workspace;

#[cfg(test)]
#[path = "../tests/support/mod.rs"]
mod test_support;

pub use countdown::sequence::{
    CountdownSpec, FrameSequence, MAX_FRAMES, ZERO_LABEL, format_clock,
};
pub use encode::gif::{DEFAULT_ENCODER, FRAMES_PER_SECOND, GifEncoder};
pub use encode::tool::{ToolOutput, run_tool};
pub use foundation::error::{CountdownError, CountdownResult};
pub use pipeline::{PipelineConfig, RunReport, run_pipeline};
pub use render::dispatch::{Dispatch, FrameJob, dispatch_frames};
pub use render::frame::{FrameNaming, FramePaths, RASTER_EXT, VECTOR_EXT, render_frame};
pub use render::rasterize::{BUNDLED_RASTERIZER, RASTERIZER_NAME, Rasterizer};
pub use render::template::{DEFAULT_TEMPLATE, PLACEHOLDER, Template};
pub use workspace::{
    PALETTE_FILE_NAME, TEMP_DIR_SUFFIX, WorkspaceLayout, gif_file_name, prepare_workspace,
    teardown_workspace,
};
