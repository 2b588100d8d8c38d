use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::{
    countdown::sequence::FrameSequence,
    foundation::error::{CountdownError, CountdownResult},
    render::{
        frame::{FrameNaming, FramePaths, render_frame},
        rasterize::Rasterizer,
        template::Template,
    },
};

/// How frame tasks are scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// One frame at a time, in index order, stopping at the first failure.
    Sequential,
    /// A dedicated pool of exactly this many workers. Every frame runs even if some fail.
    Parallel(NonZeroUsize),
}

impl Dispatch {
    /// `0` selects sequential mode, anything else is the pool size.
    pub fn from_workers(workers: usize) -> Self {
        match NonZeroUsize::new(workers) {
            Some(n) => Self::Parallel(n),
            None => Self::Sequential,
        }
    }
}

/// Everything a frame task needs besides its index and label.
#[derive(Clone, Debug)]
pub struct FrameJob<'a> {
    /// Directory receiving the raster frames.
    pub frame_dir: &'a Path,
    /// File naming of each frame.
    pub naming: &'a FrameNaming,
    /// SVG template.
    pub template: &'a Template,
    /// SVG -> PNG converter.
    pub rasterizer: &'a Rasterizer,
}

impl FrameJob<'_> {
    fn run(&self, index: usize, text: &str) -> CountdownResult<FramePaths> {
        let paths = self.naming.paths(self.frame_dir, index);
        render_frame(text, &paths, self.template, self.rasterizer)
            .map_err(|e| CountdownError::frame(index, e))?;
        Ok(paths)
    }
}

/// Render every frame of `frames`; returns the raster paths in index order.
///
/// In parallel mode tasks may finish in any order. Failures are reported after all tasks
/// have been awaited, as the lowest-indexed [`CountdownError::Frame`].
pub fn dispatch_frames(
    frames: &FrameSequence,
    job: &FrameJob<'_>,
    mode: Dispatch,
) -> CountdownResult<Vec<PathBuf>> {
    match mode {
        Dispatch::Sequential => {
            let mut out = Vec::with_capacity(frames.len());
            for (index, text) in frames.iter() {
                tracing::debug!(index, text, "rendering frame");
                out.push(job.run(index, text)?.raster_path);
            }
            Ok(out)
        }
        Dispatch::Parallel(workers) => {
            let pool = build_thread_pool(workers)?;
            for index in 0..frames.len() {
                tracing::info!("task {}", index + 1);
            }
            tracing::info!("finish task");

            let results = pool.install(|| {
                frames
                    .labels()
                    .par_iter()
                    .enumerate()
                    .map(|(index, text)| {
                        tracing::debug!(index, text, "rendering frame");
                        job.run(index, text)
                    })
                    .collect::<Vec<_>>()
            });

            let mut out = Vec::with_capacity(results.len());
            let mut first_err = None;
            for result in results {
                match result {
                    Ok(paths) => out.push(paths.raster_path),
                    Err(e) => {
                        tracing::warn!("{e}");
                        first_err.get_or_insert(e);
                    }
                }
            }
            match first_err {
                Some(e) => Err(e),
                None => Ok(out),
            }
        }
    }
}

fn build_thread_pool(workers: NonZeroUsize) -> CountdownResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers.get())
        .thread_name(|i| format!("frame-worker-{i}"))
        .build()
        .map_err(|e| {
            CountdownError::Other(anyhow::anyhow!("failed to build frame worker pool: {e}"))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/render/dispatch.rs"]
mod tests;
