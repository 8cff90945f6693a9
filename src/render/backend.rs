use crate::foundation::{
    core::{BBox, Rgba8},
    error::IconResult,
};

/// A rendered canvas as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// The `[r, g, b, a]` bytes at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data
            .get(i..i + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Convert to straight alpha in place; a no-op for straight frames.
    pub fn into_straight(mut self) -> Self {
        if self.premultiplied {
            crate::foundation::math::unpremultiply_rgba8_in_place(&mut self.data);
            self.premultiplied = false;
        }
        self
    }
}

/// A square canvas that ellipses are painted onto, in call order.
///
/// Each `fill_ellipse` composites source-over on top of what is already there, so later shapes
/// cover earlier ones where they overlap.
pub trait RasterBackend {
    /// Paint the ellipse inscribed in `bbox` with `color`.
    fn fill_ellipse(&mut self, bbox: BBox, color: Rgba8) -> IconResult<()>;

    /// Read back the canvas.
    fn readback_rgba8(&mut self) -> IconResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// Hard-edged pixel coverage; the classic look of the icons.
    #[default]
    Aliased,
    /// Coverage-based antialiasing powered by `vello_cpu`.
    Antialiased,
}

/// Backend-agnostic settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// Which rasterizer draws the icon.
    pub backend: BackendKind,
}

/// Create a transparent `size` x `size` canvas for the requested backend.
pub fn create_backend(kind: BackendKind, size: u32) -> IconResult<Box<dyn RasterBackend>> {
    match kind {
        BackendKind::Aliased => Ok(Box::new(crate::render::aliased::AliasedBackend::new(
            size,
        )?)),
        BackendKind::Antialiased => Ok(Box::new(crate::render::cpu::CpuBackend::new(size)?)),
    }
}
