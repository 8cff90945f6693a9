use crate::{
    foundation::{
        core::{BBox, Rgba8},
        error::{IconError, IconResult},
        math::over_premul,
    },
    render::backend::{FrameRGBA, RasterBackend},
};

/// Hard-edged rasterizer over a premultiplied RGBA8 buffer.
///
/// A pixel belongs to an ellipse when its center lies inside it. Bounding boxes are inclusive,
/// so a zero-span box still paints the single pixel it names.
pub struct AliasedBackend {
    size: u32,
    data: Vec<u8>,
}

impl AliasedBackend {
    /// A fully transparent `size` x `size` canvas.
    pub fn new(size: u32) -> IconResult<Self> {
        let len = (size as usize)
            .checked_mul(size as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| IconError::raster("canvas byte length overflows usize"))?;
        Ok(Self {
            size,
            data: vec![0; len],
        })
    }

    fn blend_px(&mut self, x: i32, y: i32, src: [u8; 4]) {
        let i = ((y as usize) * (self.size as usize) + (x as usize)) * 4;
        over_premul(&mut self.data[i..i + 4], src);
    }
}

impl RasterBackend for AliasedBackend {
    fn fill_ellipse(&mut self, bbox: BBox, color: Rgba8) -> IconResult<()> {
        if color.a == 0 {
            return Ok(());
        }
        let src = color.to_premul();

        let cx = f64::from(bbox.x0 + bbox.x1 + 1) / 2.0;
        let cy = f64::from(bbox.y0 + bbox.y1 + 1) / 2.0;
        let rx = f64::from(bbox.width_px()) / 2.0;
        let ry = f64::from(bbox.height_px()) / 2.0;

        let last = self.size as i32 - 1;
        let (x_lo, x_hi) = (bbox.x0.max(0), bbox.x1.min(last));
        let (y_lo, y_hi) = (bbox.y0.max(0), bbox.y1.min(last));

        for y in y_lo..=y_hi {
            let dy = (f64::from(y) + 0.5 - cy) / ry;
            for x in x_lo..=x_hi {
                let dx = (f64::from(x) + 0.5 - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.blend_px(x, y, src);
                }
            }
        }
        Ok(())
    }

    fn readback_rgba8(&mut self) -> IconResult<FrameRGBA> {
        Ok(FrameRGBA {
            width: self.size,
            height: self.size,
            data: self.data.clone(),
            premultiplied: true,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/aliased.rs"]
mod tests;
