use crate::foundation::error::{CasementError, CasementResult};

/// Bytes per premultiplied RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Position and size of a view, in window-system pixels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Frame {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn sized(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Surface extent for this frame, if the frame can back a pixmap.
    pub fn extent(self) -> CasementResult<Extent> {
        Extent::new(self.width, self.height)
    }

    /// The frame's area in view-local coordinates.
    pub fn local_region(self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }
}

/// Validated surface size.
///
/// Surfaces are `vello_cpu` pixmaps, so both sides must be in `1..=u16::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: u16,
    pub height: u16,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> CasementResult<Self> {
        if width == 0 || height == 0 {
            return Err(CasementError::create_context_failed(format!(
                "surface extent {width}x{height} is empty"
            )));
        }
        let w: u16 = width.try_into().map_err(|_| {
            CasementError::create_context_failed(format!("surface width {width} exceeds u16"))
        })?;
        let h: u16 = height.try_into().map_err(|_| {
            CasementError::create_context_failed(format!("surface height {height} exceeds u16"))
        })?;
        Ok(Self {
            width: w,
            height: h,
        })
    }

    pub fn pixel_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub fn byte_len(self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    pub fn region(self) -> Region {
        Region::new(0, 0, u32::from(self.width), u32::from(self.height))
    }
}

/// Axis-aligned pixel rectangle.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Bounding box of both regions. Empty regions do not contribute.
    pub fn union(self, other: Region) -> Region {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Region::new(x, y, right - x, bottom - y)
    }

    /// Overlap of both regions, or `None` when they do not overlap.
    pub fn intersect(self, other: Region) -> Option<Region> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return None;
        }
        Some(Region::new(x, y, right - x, bottom - y))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self::default()
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
