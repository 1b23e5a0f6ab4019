// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use core::fmt;
use std::ops::Range;

/// Resolution tier of a camera stream.
///
/// The capture pipeline may deliver a second, higher resolution stream
/// alongside the normal one. Both tiers share one rotation configuration
/// but have independent display dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Normal resolution stream
    Normal,
    /// High resolution stream
    High,
}

/// Width and height of a single plane or of a full I420 frame.
///
/// For a full frame the geometry describes the luma plane; the chroma
/// planes are derived by halving both dimensions. The capture pipeline
/// guarantees both dimensions are multiples of 16, which keeps every
/// plane size a multiple of 4. That precondition is not validated here.
///
/// # Example
///
/// ```
/// use edgefirst_rotate::image::PlaneGeometry;
///
/// let geom = PlaneGeometry::new(16, 16);
/// assert_eq!(geom.luma_size(), 256);
/// assert_eq!(geom.chroma_size(), 64);
/// assert_eq!(geom.frame_size(), 384);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlaneGeometry {
    /// Width in pixels (bytes per row)
    pub width: u32,
    /// Height in pixels (rows)
    pub height: u32,
}

impl PlaneGeometry {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Size in bytes of the luma plane, `width * height`.
    ///
    /// Saturates at `usize::MAX`; use [`PlaneGeometry::checked_luma_size`]
    /// where an exact value is required.
    pub const fn luma_size(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Size in bytes of the luma plane, `None` if it does not fit a `usize`.
    pub const fn checked_luma_size(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Geometry of each chroma plane, half width and half height.
    pub const fn chroma(&self) -> PlaneGeometry {
        PlaneGeometry::new(self.width / 2, self.height / 2)
    }

    /// Size in bytes of one chroma plane.
    pub const fn chroma_size(&self) -> usize {
        self.chroma().luma_size()
    }

    /// Size in bytes of a full planar 4:2:0 frame.
    ///
    /// Saturates like [`PlaneGeometry::luma_size`].
    pub const fn frame_size(&self) -> usize {
        match self.checked_frame_size() {
            Some(size) => size,
            None => usize::MAX,
        }
    }

    /// Size in bytes of a full planar 4:2:0 frame, `None` if it does not fit
    /// a `usize`.
    pub const fn checked_frame_size(&self) -> Option<usize> {
        match self.checked_luma_size() {
            Some(luma) => match luma.checked_mul(3) {
                Some(size) => Some(size / 2),
                None => None,
            },
            None => None,
        }
    }

    /// The same geometry with width and height exchanged.
    pub const fn swapped(&self) -> PlaneGeometry {
        PlaneGeometry::new(self.height, self.width)
    }

    /// Y, U and V plane regions of a planar 4:2:0 frame of this geometry.
    ///
    /// The planes are contiguous with no padding: luma first, then the two
    /// quarter-size chroma planes.
    pub fn planes(&self) -> [PlaneRegion; 3] {
        let luma = self.luma_size();
        let chroma = self.chroma();
        [
            PlaneRegion {
                offset: 0,
                geometry: *self,
            },
            PlaneRegion {
                offset: luma,
                geometry: chroma,
            },
            PlaneRegion {
                offset: luma + chroma.luma_size(),
                geometry: chroma,
            },
        ]
    }
}

impl fmt::Display for PlaneGeometry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Location of one plane inside a frame buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlaneRegion {
    /// Byte offset of the first row from the start of the frame
    pub offset: usize,
    /// Dimensions of the plane
    pub geometry: PlaneGeometry,
}

impl PlaneRegion {
    pub fn len(&self) -> usize {
        self.geometry.luma_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn width(&self) -> usize {
        self.geometry.width as usize
    }

    pub fn height(&self) -> usize {
        self.geometry.height as usize
    }

    /// Byte range of the plane within its frame.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len()
    }
}
