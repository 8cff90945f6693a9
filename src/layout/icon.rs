use crate::foundation::{
    core::{BBox, Rgba8},
    error::{IconError, IconResult},
};

/// Smallest accepted icon side; below it the eyes collapse to nothing.
pub const MIN_ICON_SIZE: u32 = 8;
/// Largest accepted icon side.
pub const MAX_ICON_SIZE: u32 = 4096;

/// Face fill.
pub const FACE_FILL: Rgba8 = Rgba8::new(66, 133, 244, 255);
/// Face outline.
pub const FACE_OUTLINE: Rgba8 = Rgba8::new(25, 118, 210, 255);
/// Face outline width in pixels.
pub const FACE_OUTLINE_WIDTH: i32 = 2;

/// Which part of the icon a shape draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeRole {
    /// The large blue circle.
    Face,
    /// White of the left eye.
    LeftEye,
    /// White of the right eye.
    RightEye,
    /// Pupil of the left eye.
    LeftPupil,
    /// Pupil of the right eye.
    RightPupil,
}

/// Stroke drawn inside a shape's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outline {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in pixels, measured inward from the box edge.
    pub width: i32,
}

/// One ellipse of the icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconShape {
    /// What the shape represents.
    pub role: ShapeRole,
    /// Extent of the ellipse.
    pub bbox: BBox,
    /// Interior color.
    pub fill: Rgba8,
    /// Optional outline.
    pub outline: Option<Outline>,
}

/// The five shapes of the eye icon for one size, in draw order.
///
/// Every coordinate derives from `size` by truncating integer division, so a layout is a pure
/// function of its size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconLayout {
    /// Canvas side in pixels.
    pub size: u32,
    /// Face, left eye, right eye, left pupil, right pupil.
    pub shapes: [IconShape; 5],
}

impl IconLayout {
    /// Compute the layout for a `size` x `size` canvas.
    ///
    /// Sizes outside `MIN_ICON_SIZE..=MAX_ICON_SIZE` are rejected.
    pub fn for_size(size: u32) -> IconResult<Self> {
        validate_size(size)?;
        let s = size as i32;

        let margin = s / 8;
        let face_span = s - 2 * margin;
        let face = IconShape {
            role: ShapeRole::Face,
            bbox: BBox::new(margin, margin, margin + face_span, margin + face_span),
            fill: FACE_FILL,
            outline: Some(Outline {
                color: FACE_OUTLINE,
                width: FACE_OUTLINE_WIDTH,
            }),
        };

        let eye_y = s / 2 - s / 12;
        let left_eye_x = s / 2 - s / 6;
        let right_eye_x = s / 2 + s / 6;
        let eye_size = s / 8;
        let pupil_size = eye_size / 3;

        let plain = |role, bbox, fill| IconShape {
            role,
            bbox,
            fill,
            outline: None,
        };

        Ok(Self {
            size,
            shapes: [
                face,
                plain(
                    ShapeRole::LeftEye,
                    BBox::centered(left_eye_x, eye_y, eye_size),
                    Rgba8::WHITE,
                ),
                plain(
                    ShapeRole::RightEye,
                    BBox::centered(right_eye_x, eye_y, eye_size),
                    Rgba8::WHITE,
                ),
                plain(
                    ShapeRole::LeftPupil,
                    BBox::centered(left_eye_x, eye_y, pupil_size),
                    Rgba8::BLACK,
                ),
                plain(
                    ShapeRole::RightPupil,
                    BBox::centered(right_eye_x, eye_y, pupil_size),
                    Rgba8::BLACK,
                ),
            ],
        })
    }

    /// The shape with the given role.
    pub fn shape(&self, role: ShapeRole) -> &IconShape {
        &self.shapes[role as usize]
    }
}

/// Check a requested icon size against the supported range.
pub fn validate_size(size: u32) -> IconResult<()> {
    if !(MIN_ICON_SIZE..=MAX_ICON_SIZE).contains(&size) {
        return Err(IconError::validation(format!(
            "icon size {size} is outside the supported range {MIN_ICON_SIZE}..={MAX_ICON_SIZE}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/icon.rs"]
mod tests;
