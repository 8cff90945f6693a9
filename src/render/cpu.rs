use kurbo::Shape;

use crate::{
    foundation::{
        core::{BBox, Rgba8},
        error::{IconError, IconResult},
    },
    render::backend::{FrameRGBA, RasterBackend},
};

const PATH_TOLERANCE: f64 = 0.1;

/// Antialiased backend powered by `vello_cpu`.
///
/// Shapes are recorded into a render context and resolved into a premultiplied pixmap on
/// readback.
pub struct CpuBackend {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuBackend {
    /// A fully transparent `size` x `size` canvas.
    pub fn new(size: u32) -> IconResult<Self> {
        let side: u16 = size
            .try_into()
            .map_err(|_| IconError::raster("canvas size exceeds u16"))?;
        Ok(Self {
            width: side,
            height: side,
            ctx: vello_cpu::RenderContext::new(side, side),
        })
    }
}

impl RasterBackend for CpuBackend {
    fn fill_ellipse(&mut self, bbox: BBox, color: Rgba8) -> IconResult<()> {
        let ellipse = kurbo::Ellipse::from_rect(bbox.to_rect());
        let mut path = vello_cpu::kurbo::BezPath::new();
        for el in ellipse.path_elements(PATH_TOLERANCE) {
            path.push(el);
        }

        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_path(&path);
        Ok(())
    }

    fn readback_rgba8(&mut self) -> IconResult<FrameRGBA> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let data = pixmap.data_as_u8_slice().to_vec();
        let expected = usize::from(self.width) * usize::from(self.height) * 4;
        if data.len() != expected {
            return Err(IconError::raster("pixmap byte len mismatch"));
        }

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
            premultiplied: true,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
