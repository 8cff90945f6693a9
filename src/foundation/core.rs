pub use kurbo::Rect;

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black; the canvas clear color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as `[r, g, b, a]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channels premultiplied by alpha, as `[r, g, b, a]`.
    pub fn to_premul(self) -> [u8; 4] {
        crate::foundation::math::premul_rgba8(self.to_array())
    }
}

/// Bounding box of an ellipse in integer pixel coordinates.
///
/// Both corners are inclusive pixel indices: `(2, 2, 4, 4)` spans a 3x3 block of pixels, and a
/// box with `x0 == x1` is one pixel wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BBox {
    /// Left edge (inclusive).
    pub x0: i32,
    /// Top edge (inclusive).
    pub y0: i32,
    /// Right edge (inclusive).
    pub x1: i32,
    /// Bottom edge (inclusive).
    pub y1: i32,
}

impl BBox {
    /// Build a box from its corners.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// A box of `span` around `(cx, cy)`, extending `span / 2` (truncated) to each side.
    pub const fn centered(cx: i32, cy: i32, span: i32) -> Self {
        let half = span / 2;
        Self::new(cx - half, cy - half, cx + half, cy + half)
    }

    /// Shrink every edge by `by` pixels, or `None` when nothing would remain.
    pub fn inset(self, by: i32) -> Option<Self> {
        let inner = Self::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by);
        (inner.x0 <= inner.x1 && inner.y0 <= inner.y1).then_some(inner)
    }

    /// Number of pixel columns covered.
    pub fn width_px(self) -> i32 {
        self.x1 - self.x0 + 1
    }

    /// Number of pixel rows covered.
    pub fn height_px(self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// Whether pixel `(x, y)` lies inside the box.
    pub fn contains_px(self, x: i32, y: i32) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }

    /// The continuous rectangle covered by the box's pixels.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1 + 1),
            f64::from(self.y1 + 1),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
