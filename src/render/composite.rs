use crate::foundation::{
    core::{BYTES_PER_PIXEL, Extent, Region},
    error::{CasementError, CasementResult},
};

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let keep = 255 - u16::from(sa);
            std::array::from_fn(|i| add_sat_u8(src[i], mul_div255(u16::from(dst[i]), keep)))
        }
    }
}

/// Composite `src` over `dst` pixel by pixel. Both buffers are premultiplied RGBA8.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> CasementResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(BYTES_PER_PIXEL) {
        return Err(CasementError::bad_parameter(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst
        .chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(src.chunks_exact(BYTES_PER_PIXEL))
    {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Source-replace copy of `clip` from `src` into `dst`.
///
/// Both buffers cover `extent`. The clip is intersected with the extent first;
/// pixels outside it are never written. Returns the region actually copied.
pub fn copy_region(
    dst: &mut [u8],
    src: &[u8],
    extent: Extent,
    clip: Region,
) -> CasementResult<Option<Region>> {
    if dst.len() != extent.byte_len() || src.len() != extent.byte_len() {
        return Err(CasementError::bad_parameter(format!(
            "copy_region expects {}x{} rgba8 buffers",
            extent.width, extent.height
        )));
    }
    let Some(clip) = clip.intersect(extent.region()) else {
        return Ok(None);
    };

    let stride = usize::from(extent.width) * BYTES_PER_PIXEL;
    let x0 = clip.x as usize * BYTES_PER_PIXEL;
    let x1 = clip.right() as usize * BYTES_PER_PIXEL;
    for row in clip.y as usize..clip.bottom() as usize {
        let start = row * stride;
        dst[start + x0..start + x1].copy_from_slice(&src[start + x0..start + x1]);
    }
    Ok(Some(clip))
}

pub fn fill(dst: &mut [u8], rgba: PremulRgba8) {
    for px in dst.chunks_exact_mut(BYTES_PER_PIXEL) {
        px.copy_from_slice(&rgba);
    }
}

/// Convert premultiplied RGBA8 to straight alpha, rounding to nearest.
pub fn unpremultiply_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(BYTES_PER_PIXEL) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
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

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
