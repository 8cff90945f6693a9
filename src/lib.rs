//! eye-icon draws the toolbar icon of the eye-tracking browser extension and writes it as PNG.
//!
//! The icon is a blue face circle with two white eyes and two black pupils. Every shape is an
//! ellipse whose bounding box is derived from the icon size by truncating integer division.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: `size -> IconLayout` (five shapes in draw order)
//! 2. **Rasterize**: `IconLayout -> FrameRGBA` through a [`RasterBackend`]
//! 3. **Encode**: `FrameRGBA -> PNG` on disk
//!
//! The [`run`] driver repeats this for the fixed [`IconSet::standard`] list (16, 48 and 128
//! pixels), after a single [`probe_imaging`] check for PNG support.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a layout is a pure function of its size, and so is the canvas for a given
//!   backend.
//! - **Premultiplied inside, straight on disk**: backends read back premultiplied RGBA8; PNG
//!   files hold straight alpha.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod encode;
mod foundation;
mod layout;
mod render;

pub use driver::{DriverOutcome, IconJob, IconSet, SUCCESS_LINE, run, run_standard};
pub use encode::png::{probe_imaging, read_png, write_png};
pub use foundation::core::{BBox, Rect, Rgba8};
pub use foundation::error::{IconError, IconResult, MissingCapability};
pub use layout::icon::{
    FACE_FILL, FACE_OUTLINE, FACE_OUTLINE_WIDTH, IconLayout, IconShape, MAX_ICON_SIZE,
    MIN_ICON_SIZE, Outline, ShapeRole, validate_size,
};
pub use render::aliased::AliasedBackend;
pub use render::backend::{BackendKind, FrameRGBA, RasterBackend, RenderSettings, create_backend};
pub use render::cpu::CpuBackend;
pub use render::draw::{draw_layout, draw_shape};
pub use render::pipeline::{render_icon, render_icon_frame, render_icon_with};
