use crate::{
    foundation::error::IconResult,
    layout::icon::{IconLayout, IconShape},
    render::backend::RasterBackend,
};

/// Paint every shape of `layout` onto `backend`, in layout order.
pub fn draw_layout<B: RasterBackend + ?Sized>(
    backend: &mut B,
    layout: &IconLayout,
) -> IconResult<()> {
    for shape in &layout.shapes {
        tracing::trace!(role = ?shape.role, bbox = ?shape.bbox, "draw shape");
        draw_shape(backend, shape)?;
    }
    Ok(())
}

/// Paint one shape. An outline occupies the outer `width` pixels of the box; when the inset
/// leaves nothing, the whole ellipse takes the outline color.
pub fn draw_shape<B: RasterBackend + ?Sized>(backend: &mut B, shape: &IconShape) -> IconResult<()> {
    let Some(outline) = shape.outline else {
        return backend.fill_ellipse(shape.bbox, shape.fill);
    };

    backend.fill_ellipse(shape.bbox, outline.color)?;
    if let Some(inner) = shape.bbox.inset(outline.width) {
        backend.fill_ellipse(inner, shape.fill)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
