use crate::{
    foundation::core::{Extent, Region},
    foundation::error::{CasementError, CasementResult},
    render::composite::{copy_region, over_in_place},
    view::drawable::Drawable,
};

/// A premultiplied RGBA8 pixel buffer backed by a `vello_cpu` pixmap.
pub struct Surface {
    extent: Extent,
    pixmap: vello_cpu::Pixmap,
}

impl Surface {
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            pixmap: vello_cpu::Pixmap::new(extent.width, extent.height),
        }
    }

    pub fn from_premul_bytes(extent: Extent, bytes: &[u8]) -> CasementResult<Self> {
        if bytes.len() != extent.byte_len() {
            return Err(CasementError::create_context_failed(format!(
                "surface data is {} bytes, {}x{} needs {}",
                bytes.len(),
                extent.width,
                extent.height,
                extent.byte_len()
            )));
        }
        let mut surface = Self::new(extent);
        surface.pixmap.data_as_u8_slice_mut().copy_from_slice(bytes);
        Ok(surface)
    }

    /// A surface with the same extent and content, independent of `self`.
    pub fn similar(&self) -> Self {
        let mut surface = Self::new(self.extent);
        surface
            .pixmap
            .data_as_u8_slice_mut()
            .copy_from_slice(self.pixmap.data_as_u8_slice());
        surface
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_as_u8_slice_mut()
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.extent.width)
            .field("height", &self.extent.height)
            .finish_non_exhaustive()
    }
}

/// Back/front buffers plus the drawing context bound to front.
///
/// Lives for exactly one paint bracket. Dropping the pair releases both
/// surfaces and the context.
pub struct SurfacePair {
    back: Surface,
    front: Surface,
    context: vello_cpu::RenderContext,
}

impl SurfacePair {
    /// Allocate a back surface mirroring `drawable` and a front surface seeded from it.
    pub fn open(drawable: &dyn Drawable, extent: Extent) -> CasementResult<Self> {
        let native = drawable.snapshot(extent).map_err(|e| {
            CasementError::create_context_failed(format!("back surface unavailable: {e}"))
        })?;
        let back = Surface::from_premul_bytes(extent, &native)?;
        let front = back.similar();
        Ok(Self {
            back,
            front,
            context: vello_cpu::RenderContext::new(extent.width, extent.height),
        })
    }

    pub fn extent(&self) -> Extent {
        self.back.extent()
    }

    pub fn back(&self) -> &Surface {
        &self.back
    }

    pub fn front(&self) -> &Surface {
        &self.front
    }

    pub fn context_mut(&mut self) -> &mut vello_cpu::RenderContext {
        &mut self.context
    }

    /// Land the client's drawing on front, then copy `clip` of front onto back.
    ///
    /// Only back pixels inside `clip` change. Returns the region copied, or
    /// `None` if `clip` misses the surface.
    pub fn commit(&mut self, clip: Region) -> CasementResult<Option<Region>> {
        let extent = self.extent();
        let mut layer = vello_cpu::Pixmap::new(extent.width, extent.height);
        self.context.flush();
        self.context.render_to_pixmap(&mut layer);
        over_in_place(self.front.data_mut(), layer.data_as_u8_slice())?;

        copy_region(self.back.data_mut(), self.front.data(), extent, clip)
    }
}

impl std::fmt::Debug for SurfacePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfacePair")
            .field("back", &self.back)
            .field("front", &self.front)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
