use crate::{
    foundation::core::{BYTES_PER_PIXEL, Extent, Rgba8Premul},
    foundation::error::{CasementError, CasementResult},
    render::composite::fill,
};

/// Native pixel store behind a view, supplied by the window-system layer.
///
/// Pixels are premultiplied RGBA8, row-major, tightly packed.
pub trait Drawable {
    /// Current size of the native pixel store.
    fn size(&self) -> (u32, u32);

    /// Current contents viewed at `extent`.
    ///
    /// Areas outside the native store read as the drawable's background.
    fn snapshot(&self, extent: Extent) -> CasementResult<Vec<u8>>;

    /// Replace the native contents with `pixels` covering `extent`.
    fn present(&mut self, extent: Extent, pixels: &[u8]) -> CasementResult<()>;
}

/// Heap-backed [`Drawable`] used by tests and the replay tool.
#[derive(Clone, Debug)]
pub struct MemoryDrawable {
    width: u32,
    height: u32,
    background: Rgba8Premul,
    data: Vec<u8>,
    presents: u64,
}

impl MemoryDrawable {
    /// Allocate a `width` x `height` store filled with `background`.
    ///
    /// Sizes no surface could mirror are rejected before anything is allocated.
    pub fn new(width: u32, height: u32, background: Rgba8Premul) -> CasementResult<Self> {
        let max = u32::from(u16::MAX);
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .filter(|_| width <= max && height <= max)
            .ok_or_else(|| {
                CasementError::bad_parameter(format!(
                    "drawable {width}x{height} exceeds {max}x{max}"
                ))
            })?;
        let mut data = vec![0u8; len];
        fill(&mut data, background.to_array());
        Ok(Self {
            width,
            height,
            background,
            data,
            presents: 0,
        })
    }

    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Number of successful [`Drawable::present`] calls.
    pub fn present_count(&self) -> u64 {
        self.presents
    }
}

impl Drawable for MemoryDrawable {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn snapshot(&self, extent: Extent) -> CasementResult<Vec<u8>> {
        let (w, h) = (u32::from(extent.width), u32::from(extent.height));
        if (w, h) == (self.width, self.height) {
            return Ok(self.data.clone());
        }

        let mut out = vec![0u8; extent.byte_len()];
        fill(&mut out, self.background.to_array());
        let copy_w = w.min(self.width) as usize * BYTES_PER_PIXEL;
        let dst_stride = w as usize * BYTES_PER_PIXEL;
        let src_stride = self.width as usize * BYTES_PER_PIXEL;
        for row in 0..h.min(self.height) as usize {
            out[row * dst_stride..row * dst_stride + copy_w]
                .copy_from_slice(&self.data[row * src_stride..row * src_stride + copy_w]);
        }
        Ok(out)
    }

    fn present(&mut self, extent: Extent, pixels: &[u8]) -> CasementResult<()> {
        if pixels.len() != extent.byte_len() {
            return Err(CasementError::window(format!(
                "present expects {} bytes for {}x{}, got {}",
                extent.byte_len(),
                extent.width,
                extent.height,
                pixels.len()
            )));
        }
        self.width = u32::from(extent.width);
        self.height = u32::from(extent.height);
        self.data.clear();
        self.data.extend_from_slice(pixels);
        self.presents += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/drawable.rs"]
mod tests;
