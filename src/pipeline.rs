use std::path::PathBuf;

use crate::{
    countdown::sequence::{CountdownSpec, FrameSequence},
    encode::gif::GifEncoder,
    foundation::error::{CountdownError, CountdownResult},
    render::{
        dispatch::{Dispatch, FrameJob, dispatch_frames},
        frame::FrameNaming,
        rasterize::Rasterizer,
        template::Template,
    },
    workspace::{WorkspaceLayout, gif_file_name, prepare_workspace, teardown_workspace},
};

/// Everything one run needs. Nothing is read from the process environment after this is built.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Output file name, relative to `work_dir` unless absolute. `.gif` is appended if missing.
    pub filename: String,
    /// Directory holding the output, the frame directory and the palette artifact.
    pub work_dir: PathBuf,
    /// Countdown length and hold.
    pub countdown: CountdownSpec,
    /// SVG template for every frame.
    pub template: Template,
    /// Resolved SVG -> PNG converter.
    pub rasterizer: Rasterizer,
    /// GIF encoder.
    pub encoder: GifEncoder,
    /// Frame scheduling.
    pub dispatch: Dispatch,
    /// Frame file naming.
    pub naming: FrameNaming,
}

impl PipelineConfig {
    /// Config with the default template, ffmpeg from PATH, sequential rendering.
    pub fn new(
        filename: impl Into<String>,
        work_dir: impl Into<PathBuf>,
        countdown: CountdownSpec,
        rasterizer: Rasterizer,
    ) -> Self {
        Self {
            filename: filename.into(),
            work_dir: work_dir.into(),
            countdown,
            template: Template::default(),
            rasterizer,
            encoder: GifEncoder::default(),
            dispatch: Dispatch::Sequential,
            naming: FrameNaming::default(),
        }
    }

    /// Check values that cannot be expressed in the field types.
    pub fn validate(&self) -> CountdownResult<()> {
        if self.filename.trim().is_empty() {
            return Err(CountdownError::validation("output filename must not be empty"));
        }
        if self.naming.prefix.is_empty() {
            return Err(CountdownError::validation("frame name prefix must not be empty"));
        }
        Ok(())
    }

    /// Paths this config will use.
    pub fn layout(&self) -> WorkspaceLayout {
        WorkspaceLayout::new(&self.work_dir, &gif_file_name(&self.filename))
    }
}

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Paths that were used.
    pub layout: WorkspaceLayout,
    /// Number of frames rendered.
    pub frames: usize,
    /// Whether the frame directory and palette were removed without error.
    pub cleaned: bool,
}

/// Render all frames, encode the GIF and clean up.
///
/// The workspace is torn down only after the encoder confirmed the output file exists.
pub fn run_pipeline(cfg: &PipelineConfig) -> CountdownResult<RunReport> {
    cfg.validate()?;
    let frames = FrameSequence::generate(cfg.countdown);
    let layout = cfg.layout();
    prepare_workspace(&layout)?;

    tracing::info!(frames = frames.len(), "creating images ...");
    let job = FrameJob {
        frame_dir: &layout.temp_dir,
        naming: &cfg.naming,
        template: &cfg.template,
        rasterizer: &cfg.rasterizer,
    };
    dispatch_frames(&frames, &job, cfg.dispatch)?;

    tracing::info!("creating gif ...");
    // Fails when the GIF was not written, which leaves the frames in place.
    cfg.encoder.assemble(
        &cfg.naming.encoder_pattern(&layout.temp_dir),
        &layout.palette_path,
        &layout.output_path,
    )?;

    tracing::info!("removing temp files ...");
    let cleaned = teardown_workspace(&layout);

    tracing::info!("done");
    Ok(RunReport {
        layout,
        frames: frames.len(),
        cleaned,
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
