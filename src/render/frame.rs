use std::path::{Path, PathBuf};

use crate::{
    foundation::error::CountdownResult,
    render::{rasterize::Rasterizer, template::Template},
};

/// Extension of the intermediate vector document.
pub const VECTOR_EXT: &str = "svg";
/// Extension of the persisted raster frame.
pub const RASTER_EXT: &str = "png";

/// printf-style frame naming: `<prefix><index zero-padded to width>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameNaming {
    /// File-name prefix, `frame_` by default.
    pub prefix: String,
    /// Minimum digits of the index; wider indices are not truncated.
    pub width: usize,
}

impl Default for FrameNaming {
    fn default() -> Self {
        Self {
            prefix: "frame_".to_string(),
            width: 4,
        }
    }
}

impl FrameNaming {
    /// File stem (no extension) of frame `index`.
    pub fn stem(&self, index: usize) -> String {
        format!("{}{:0width$}", self.prefix, index, width = self.width)
    }

    /// Paths of frame `index` inside `dir`.
    pub fn paths(&self, dir: &Path, index: usize) -> FramePaths {
        let base = dir.join(self.stem(index));
        FramePaths {
            index,
            vector_path: base.with_extension(VECTOR_EXT),
            raster_path: base.with_extension(RASTER_EXT),
        }
    }

    /// Image-sequence pattern the encoder reads, e.g. `dir/frame_%04d.png`.
    pub fn encoder_pattern(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}%0{}d.{RASTER_EXT}", self.prefix, self.width))
    }
}

/// Files owned by one frame task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FramePaths {
    /// 0-based frame index.
    pub index: usize,
    /// Temporary SVG, removed before the task returns.
    pub vector_path: PathBuf,
    /// Rasterized PNG, kept until workspace teardown.
    pub raster_path: PathBuf,
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

/// Write the SVG for `text`, rasterize it, then delete the SVG.
///
/// The SVG is removed whether or not rasterization succeeded.
#[tracing::instrument(skip(paths, template, rasterizer), fields(index = paths.index))]
pub fn render_frame(
    text: &str,
    paths: &FramePaths,
    template: &Template,
    rasterizer: &Rasterizer,
) -> CountdownResult<()> {
    let _svg = TempFileGuard(Some(paths.vector_path.clone()));
    template.write_document(&paths.vector_path, text)?;
    rasterizer.rasterize(&paths.vector_path, &paths.raster_path)
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
