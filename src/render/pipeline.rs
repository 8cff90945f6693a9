use std::path::Path;

use crate::{
    encode::png::write_png,
    foundation::error::IconResult,
    layout::icon::IconLayout,
    render::{
        backend::{FrameRGBA, RenderSettings, create_backend},
        draw::draw_layout,
    },
};

/// Lay out and rasterize the eye icon without touching the filesystem.
///
/// Pipeline:
/// 1. [`IconLayout::for_size`](crate::IconLayout::for_size)
/// 2. [`create_backend`](crate::create_backend) for a transparent canvas
/// 3. [`draw_layout`](crate::draw_layout), then readback
///
/// Returns a [`FrameRGBA`] containing **premultiplied** RGBA8 pixels.
pub fn render_icon_frame(size: u32, settings: &RenderSettings) -> IconResult<FrameRGBA> {
    let layout = IconLayout::for_size(size)?;
    let mut backend = create_backend(settings.backend, size)?;
    draw_layout(backend.as_mut(), &layout)?;
    backend.readback_rgba8()
}

/// Render the icon at `size` and write it as a PNG to `path`, overwriting any existing file.
///
/// Returns the rendered frame.
#[tracing::instrument(skip(path, settings), fields(path = %path.display(), backend = ?settings.backend))]
pub fn render_icon_with(
    size: u32,
    path: &Path,
    settings: &RenderSettings,
) -> IconResult<FrameRGBA> {
    let frame = render_icon_frame(size, settings)?;
    write_png(&frame, path)?;
    tracing::debug!("wrote icon");
    Ok(frame)
}

/// Render the icon at `size` with default settings and write it to `filename`.
pub fn render_icon(size: u32, filename: impl AsRef<Path>) -> IconResult<()> {
    render_icon_with(size, filename.as_ref(), &RenderSettings::default()).map(|_| ())
}
