use std::{borrow::Cow, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::error::{IconError, IconResult, MissingCapability},
    render::backend::FrameRGBA,
};

/// Check that PNG encoding is compiled into the imaging library.
///
/// This is the startup gate for the driver: it runs once, before any canvas is allocated.
pub fn probe_imaging() -> Result<(), MissingCapability> {
    if image::ImageFormat::Png.writing_enabled() {
        Ok(())
    } else {
        Err(MissingCapability::png())
    }
}

/// Encode `frame` as an RGBA8 PNG at `path`, replacing any existing file.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> IconResult<()> {
    // The encoder opens the output before checking format support.
    probe_imaging()?;
    let data = if frame.premultiplied {
        Cow::Owned(frame.clone().into_straight().data)
    } else {
        Cow::Borrowed(frame.data.as_slice())
    };
    match image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    ) {
        Ok(()) => Ok(()),
        Err(image::ImageError::Unsupported(e)) => {
            tracing::warn!(path = %path.display(), "png encoder unavailable: {e}");
            Err(MissingCapability::png().into())
        }
        Err(e) => Err(IconError::from(
            anyhow::Error::new(e).context(format!("write png '{}'", path.display())),
        )),
    }
}

/// Decode a PNG file into straight RGBA8.
pub fn read_png(path: &Path) -> IconResult<FrameRGBA> {
    let img = image::open(path)
        .with_context(|| format!("read png '{}'", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(FrameRGBA {
        width,
        height,
        data: img.into_raw(),
        premultiplied: false,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
