pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Convert straight-alpha RGBA8 into premultiplied RGBA8 in place.
pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255_u8(u16::from(px[0]), a);
        px[1] = mul_div255_u8(u16::from(px[1]), a);
        px[2] = mul_div255_u8(u16::from(px[2]), a);
    }
}

/// Convert premultiplied RGBA8 back to straight alpha in place.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Premultiplied source-over of one pixel onto another.
pub(crate) fn src_over(dst: &mut [u8], src: [u8; 4]) {
    let inv = 255 - u16::from(src[3]);
    if inv == 0 {
        dst.copy_from_slice(&src);
        return;
    }
    for i in 0..4 {
        let v = u16::from(src[i]) + mul_div255_u16(u16::from(dst[i]), inv);
        dst[i] = v.min(255) as u8;
    }
}

/// Scale a premultiplied pixel by an opacity in `[0, 1]`.
pub(crate) fn scale_alpha(px: [u8; 4], opacity: f64) -> [u8; 4] {
    let k = (opacity.clamp(0.0, 1.0) * 255.0).round() as u16;
    [
        mul_div255_u8(u16::from(px[0]), k),
        mul_div255_u8(u16::from(px[1]), k),
        mul_div255_u8(u16::from(px[2]), k),
        mul_div255_u8(u16::from(px[3]), k),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
