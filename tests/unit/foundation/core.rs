use super::*;

#[test]
fn centered_box_truncates_half_span() {
    assert_eq!(BBox::centered(6, 7, 2), BBox::new(5, 6, 7, 8));
    assert_eq!(BBox::centered(43, 54, 5), BBox::new(41, 52, 45, 56));
    assert_eq!(BBox::centered(6, 7, 0), BBox::new(6, 7, 6, 7));
}

#[test]
fn inset_keeps_single_pixel_and_drops_empty() {
    let b = BBox::new(2, 2, 14, 14);
    assert_eq!(b.inset(2), Some(BBox::new(4, 4, 12, 12)));
    assert_eq!(BBox::new(0, 0, 4, 4).inset(2), Some(BBox::new(2, 2, 2, 2)));
    assert_eq!(BBox::new(0, 0, 3, 3).inset(2), None);
}

#[test]
fn pixel_extent_is_inclusive() {
    let b = BBox::new(5, 6, 7, 8);
    assert_eq!(b.width_px(), 3);
    assert_eq!(b.height_px(), 3);
    assert!(b.contains_px(5, 6));
    assert!(b.contains_px(7, 8));
    assert!(!b.contains_px(8, 8));
    assert_eq!(b.to_rect(), Rect::new(5.0, 6.0, 8.0, 9.0));
}

#[test]
fn opaque_colors_premultiply_to_themselves() {
    let blue = Rgba8::new(66, 133, 244, 255);
    assert_eq!(blue.to_premul(), blue.to_array());
    assert_eq!(Rgba8::TRANSPARENT.to_premul(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::new(255, 255, 255, 128).to_premul(), [128, 128, 128, 128]);
}
