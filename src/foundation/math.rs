pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn premul_rgba8(rgba: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = rgba;
    let a16 = u16::from(a);
    let premul = |c: u8| mul_div255_u8(u16::from(c), a16);
    [premul(r), premul(g), premul(b), a]
}

/// Source-over of a premultiplied `src` onto a premultiplied `dst` pixel.
pub(crate) fn over_premul(dst: &mut [u8], src: [u8; 4]) {
    let inv = 255 - u16::from(src[3]);
    for (d, s) in dst.iter_mut().zip(src) {
        *d = s.saturating_add(mul_div255_u8(u16::from(*d), inv));
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
