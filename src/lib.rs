// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! # EdgeFirst Camera Rotation Library
//!
//! This library rotates and mirrors planar YUV 4:2:0 (I420) camera frames in
//! software so that a camera mounted sideways or upside-down still produces
//! upright output. Downstream consumers only need to know whether the frame
//! dimensions were swapped.
//!
//! ## Features
//!
//! - **Quarter Turns**: 90 and 270 degree rotation through a reusable,
//!   grow-only scratch buffer owned by the [`rotate::Rotator`].
//! - **In-Place 180 and Mirroring**: half turns and horizontal or vertical
//!   mirroring without any extra memory.
//! - **Planar Aware**: luma and both half-resolution chroma planes are
//!   transformed at their own geometry, keeping chroma aligned with luma.
//! - **Inverse Mapping**: single-plane outputs produced at display
//!   orientation can be mapped back to capture orientation.
//!
//! ## Example
//!
//! ```
//! use edgefirst_rotate::{image::PlaneGeometry, rotate::{Rotator, RotateOutcome}};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let capture = PlaneGeometry::new(1920, 1080);
//! let mut rotator = Rotator::new();
//!
//! // Camera mounted upside-down
//! rotator.configure(180, "none", capture, None)?;
//!
//! let mut frame = vec![0u8; capture.frame_size()];
//! let outcome = rotator.rotate_frame(&mut frame, capture.width, capture.height)?;
//! assert_eq!(outcome, RotateOutcome::Unchanged);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod ops;
pub mod rotate;

pub use error::RotateError;
