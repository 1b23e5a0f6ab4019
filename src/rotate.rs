// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{
    error::{check_frame_size, exact_size, RotateError},
    image::{PlaneGeometry, PlaneRegion, Tier},
    ops,
};
use core::fmt;
use tracing::{debug, instrument, warn};

/// Rotation angles supported by the software rotator.
///
/// Rotation is always clockwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Angle {
    /// No rotation (0 degrees)
    #[default]
    Deg0,
    /// Rotate 90 degrees clockwise
    Deg90,
    /// Rotate 180 degrees
    Deg180,
    /// Rotate 270 degrees clockwise (90 degrees counter-clockwise)
    Deg270,
}

impl Angle {
    /// Maps a requested angle onto one of the four supported rotations.
    ///
    /// Returns `None` if `degrees` is not a multiple of 90. Any multiple of
    /// 90 is reduced modulo 360, so `-90` maps to [`Angle::Deg270`] and
    /// `450` to [`Angle::Deg90`].
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        if degrees % 90 != 0 {
            return None;
        }
        match degrees.rem_euclid(360) {
            0 => Some(Angle::Deg0),
            90 => Some(Angle::Deg90),
            180 => Some(Angle::Deg180),
            _ => Some(Angle::Deg270),
        }
    }

    pub fn degrees(&self) -> u32 {
        match self {
            Angle::Deg0 => 0,
            Angle::Deg90 => 90,
            Angle::Deg180 => 180,
            Angle::Deg270 => 270,
        }
    }

    /// True for the quarter turns, which exchange width and height.
    pub fn swaps_dimensions(&self) -> bool {
        matches!(self, Angle::Deg90 | Angle::Deg270)
    }
}

/// Mirror axis applied before rotation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// No mirroring
    #[default]
    None,
    /// Mirror across the horizontal axis (top-bottom)
    Horizontal,
    /// Mirror across the vertical axis (left-right)
    Vertical,
}

impl Axis {
    /// Parses the flip axis configuration value.
    ///
    /// Only the first character matters: `h` selects [`Axis::Horizontal`],
    /// `v` selects [`Axis::Vertical`] and anything else, including an empty
    /// string, means no mirroring.
    pub fn from_selector(selector: &str) -> Self {
        match selector.chars().next() {
            Some('h') => Axis::Horizontal,
            Some('v') => Axis::Vertical,
            _ => Axis::None,
        }
    }
}

/// Normalized rotation settings for one camera.
///
/// Built once per configuration cycle and read-only afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RotationConfig {
    pub angle: Angle,
    pub axis: Axis,
}

impl RotationConfig {
    /// Validates a requested angle in degrees.
    ///
    /// Angles that are not a multiple of 90 disable rotation and log a
    /// warning; the flip axis is kept either way.
    pub fn new(degrees: i32, axis: Axis) -> Self {
        let angle = match Angle::from_degrees(degrees) {
            Some(angle) => angle,
            None => {
                warn!(
                    "rotate setting not a multiple of 90: {}, rotation disabled",
                    degrees
                );
                Angle::Deg0
            }
        };
        Self { angle, axis }
    }

    /// True when frames pass through untouched.
    pub fn is_identity(&self) -> bool {
        self.angle == Angle::Deg0 && self.axis == Axis::None
    }

    /// Dimensions of a captured frame once this configuration is applied.
    pub fn display(&self, capture: PlaneGeometry) -> PlaneGeometry {
        if self.angle.swaps_dimensions() {
            capture.swapped()
        } else {
            capture
        }
    }
}

impl fmt::Display for RotationConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} degrees axis {:?}", self.angle.degrees(), self.axis)
    }
}

/// Result of a successful transform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RotateOutcome {
    /// Width and height are as before
    Unchanged,
    /// Width and height are now exchanged
    Swapped,
}

impl RotateOutcome {
    /// Legacy status code: 0 for unchanged, 1 for swapped dimensions.
    pub fn code(&self) -> i32 {
        match self {
            RotateOutcome::Unchanged => 0,
            RotateOutcome::Swapped => 1,
        }
    }
}

/// Software rotator for planar YUV 4:2:0 camera frames.
///
/// `Rotator` holds the normalized [`RotationConfig`], the display dimensions
/// of each resolution tier and the scratch buffer used by 90 and 270 degree
/// rotations, which cannot be performed in place. The scratch buffer only
/// grows; it is released by [`Rotator::teardown`] or when the rotator is
/// dropped.
///
/// # Thread Safety
///
/// A `Rotator` belongs to one camera context. Frames for that context must
/// be processed one at a time, which `&mut self` enforces.
///
/// # Example
///
/// ```
/// use edgefirst_rotate::{image::{PlaneGeometry, Tier}, rotate::{Rotator, RotateOutcome}};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let capture = PlaneGeometry::new(640, 480);
/// let mut rotator = Rotator::new();
/// rotator.configure(90, "none", capture, None)?;
/// assert_eq!(rotator.display(Tier::Normal), Some(PlaneGeometry::new(480, 640)));
///
/// let mut frame = vec![0u8; capture.frame_size()];
/// let outcome = rotator.rotate_frame(&mut frame, capture.width, capture.height)?;
/// assert_eq!(outcome, RotateOutcome::Swapped);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Rotator {
    config: RotationConfig,
    display_normal: Option<PlaneGeometry>,
    display_high: Option<PlaneGeometry>,
    scratch: Vec<u8>,
}

impl Rotator {
    /// Creates a rotator that leaves frames untouched until configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a new rotation configuration.
    ///
    /// `degrees` is the requested clockwise rotation and `flip_axis` the
    /// axis selector (see [`Axis::from_selector`]). `normal` and `high` are
    /// the capture dimensions of each tier; an empty high tier is treated as
    /// absent.
    ///
    /// An invalid angle is not an error: it is logged and rotation is
    /// disabled. The only failure is an unsatisfiable scratch allocation
    /// for 90 and 270 degree rotations. In that case rotation is disabled
    /// as well (the flip axis is kept) before the error is returned, so the
    /// rotator stays usable.
    #[instrument(skip(self))]
    pub fn configure(
        &mut self,
        degrees: i32,
        flip_axis: &str,
        normal: PlaneGeometry,
        high: Option<PlaneGeometry>,
    ) -> Result<(), RotateError> {
        let mut config = RotationConfig::new(degrees, Axis::from_selector(flip_axis));
        let high = high.filter(|geom| geom.frame_size() > 0);

        let mut result = Ok(());
        if config.angle.swaps_dimensions() {
            let needed = normal
                .frame_size()
                .max(high.map_or(0, |geom| geom.frame_size()));
            if let Err(err) = self.reserve_scratch(needed) {
                warn!("{}, rotation disabled", err);
                config.angle = Angle::Deg0;
                result = Err(err);
            }
        }

        self.config = config;
        self.display_normal = Some(config.display(normal));
        self.display_high = high.map(|geom| config.display(geom));

        debug!("rotation configured: {}", config);
        result
    }

    pub fn config(&self) -> RotationConfig {
        self.config
    }

    /// Display dimensions of a tier, `None` if the tier is not configured.
    pub fn display(&self, tier: Tier) -> Option<PlaneGeometry> {
        match tier {
            Tier::Normal => self.display_normal,
            Tier::High => self.display_high,
        }
    }

    /// Current size of the scratch buffer in bytes.
    pub fn scratch_capacity(&self) -> usize {
        self.scratch.len()
    }

    /// Releases the scratch buffer. Safe to call repeatedly, and also before
    /// the rotator was ever configured.
    pub fn teardown(&mut self) {
        if !self.scratch.is_empty() {
            debug!("rotation scratch buffer freed");
        }
        self.scratch = Vec::new();
    }

    /// Ensures the scratch buffer holds at least `size` bytes.
    ///
    /// The old buffer is released before the new one is reserved so the two
    /// never coexist.
    fn reserve_scratch(&mut self, size: usize) -> Result<(), RotateError> {
        if size <= self.scratch.len() {
            return Ok(());
        }
        self.scratch = Vec::new();
        self.scratch.try_reserve_exact(size)?;
        self.scratch.resize(size, 0);
        debug!("rotation scratch buffer grown to {} bytes", size);
        Ok(())
    }

    /// Rotates a planar YUV 4:2:0 frame in place.
    ///
    /// `width` and `height` are the capture dimensions of `frame`, before
    /// rotation. The configured mirror is applied first, to all three
    /// planes, followed by the rotation.
    ///
    /// # Returns
    ///
    /// [`RotateOutcome::Swapped`] for 90 and 270 degrees, in which case the
    /// caller must treat the frame as `height x width` from now on, and
    /// [`RotateOutcome::Unchanged`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if `frame` is smaller than `width * height * 3 / 2`,
    /// if that size overflows a `usize`, or if the scratch buffer had to
    /// grow and could not. The frame is not modified in any of these cases.
    #[instrument(level = "debug", skip(self, frame))]
    pub fn rotate_frame(
        &mut self,
        frame: &mut [u8],
        width: u32,
        height: u32,
    ) -> Result<RotateOutcome, RotateError> {
        if self.config.is_identity() {
            return Ok(RotateOutcome::Unchanged);
        }

        let geom = PlaneGeometry::new(width, height);
        let size = exact_size(geom.checked_frame_size(), width, height)?;
        check_frame_size(frame, size)?;
        debug!(
            "rotating frame {} degrees {} axis {:?}",
            geom,
            self.config.angle.degrees(),
            self.config.axis
        );

        if self.config.angle.swaps_dimensions() {
            self.reserve_scratch(size)?;
        }

        let planes = geom.planes();
        for plane in &planes {
            flip(&mut frame[plane.range()], plane, self.config.axis);
        }

        match self.config.angle {
            Angle::Deg0 => Ok(RotateOutcome::Unchanged),
            Angle::Deg180 => {
                for plane in &planes {
                    ops::rotate_180(&mut frame[plane.range()]);
                }
                Ok(RotateOutcome::Unchanged)
            }
            Angle::Deg90 => {
                self.quarter_turn(frame, &planes, size, ops::rotate_cw)?;
                Ok(RotateOutcome::Swapped)
            }
            Angle::Deg270 => {
                self.quarter_turn(frame, &planes, size, ops::rotate_ccw)?;
                Ok(RotateOutcome::Swapped)
            }
        }
    }

    /// Maps a single luma plane from display orientation back to capture
    /// orientation.
    ///
    /// `width` and `height` are the dimensions of `plane` as it is now, that
    /// is the display dimensions. The rotation is undone first (a 90 degree
    /// configuration turns the plane counter-clockwise, a 270 degree one
    /// clockwise) and the mirror, which is its own inverse, is then reapplied
    /// at capture orientation.
    ///
    /// Return values and errors follow [`Rotator::rotate_frame`], with the
    /// size requirement being `width * height`.
    #[instrument(level = "debug", skip(self, plane))]
    pub fn unrotate_plane(
        &mut self,
        plane: &mut [u8],
        width: u32,
        height: u32,
    ) -> Result<RotateOutcome, RotateError> {
        if self.config.is_identity() {
            return Ok(RotateOutcome::Unchanged);
        }

        let geom = PlaneGeometry::new(width, height);
        let size = exact_size(geom.checked_luma_size(), width, height)?;
        check_frame_size(plane, size)?;
        debug!(
            "unrotating plane {} degrees {} axis {:?}",
            geom,
            self.config.angle.degrees(),
            self.config.axis
        );

        let region = PlaneRegion {
            offset: 0,
            geometry: geom,
        };
        let outcome = match self.config.angle {
            Angle::Deg0 => RotateOutcome::Unchanged,
            Angle::Deg180 => {
                ops::rotate_180(&mut plane[region.range()]);
                RotateOutcome::Unchanged
            }
            Angle::Deg90 => {
                self.quarter_turn(plane, &[region], region.len(), ops::rotate_ccw)?;
                RotateOutcome::Swapped
            }
            Angle::Deg270 => {
                self.quarter_turn(plane, &[region], region.len(), ops::rotate_cw)?;
                RotateOutcome::Swapped
            }
        };

        // The mirror was applied at capture orientation, so it is undone last.
        let capture = PlaneRegion {
            offset: 0,
            geometry: self.config.display(geom),
        };
        flip(&mut plane[capture.range()], &capture, self.config.axis);

        Ok(outcome)
    }

    /// Turns each region of `data` into the scratch buffer at the same
    /// offset, then copies the first `size` scratch bytes back.
    ///
    /// `rotate_frame` reserves before mutating anything, so the reservation
    /// here is a no-op for it.
    fn quarter_turn(
        &mut self,
        data: &mut [u8],
        regions: &[PlaneRegion],
        size: usize,
        turn: fn(&[u8], &mut [u8], usize, usize),
    ) -> Result<(), RotateError> {
        self.reserve_scratch(size)?;
        for region in regions {
            let range = region.range();
            turn(
                &data[range.clone()],
                &mut self.scratch[range],
                region.width(),
                region.height(),
            );
        }
        data[..size].copy_from_slice(&self.scratch[..size]);
        Ok(())
    }
}

fn flip(plane: &mut [u8], region: &PlaneRegion, axis: Axis) {
    match axis {
        Axis::None => {}
        Axis::Horizontal => ops::flip_horizontal(plane, region.width(), region.height()),
        Axis::Vertical => ops::flip_vertical(plane, region.width(), region.height()),
    }
}
