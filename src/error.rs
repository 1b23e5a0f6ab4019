// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use std::{
    collections::TryReserveError,
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Expected versus received byte counts for a buffer check.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Errors reported by the rotation engine.
#[derive(Debug)]
pub enum RotateError {
    /// The frame or plane handed to a transform is smaller than its geometry.
    FrameSize(MismatchedSize),
    /// The scratch buffer for a quarter turn could not be reserved.
    Allocation(TryReserveError),
    /// The frame dimensions describe more bytes than a `usize` can address.
    SizeOverflow { width: u32, height: u32 },
}

impl RotateError {
    /// Legacy status code for callers that expect the 0/1/-1 contract.
    pub fn code(&self) -> i32 {
        -1
    }
}

impl Display for RotateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RotateError::FrameSize(size) => write!(
                f,
                "frame buffer must hold at least {} bytes but it holds {}",
                size.expected, size.received
            ),
            RotateError::Allocation(err) => {
                write!(f, "failed to allocate rotation scratch buffer: {}", err)
            }
            RotateError::SizeOverflow { width, height } => {
                write!(f, "frame size {}x{} overflows pointer capabilities", width, height)
            }
        }
    }
}

impl Error for RotateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RotateError::Allocation(err) => Some(err),
            RotateError::FrameSize(_) | RotateError::SizeOverflow { .. } => None,
        }
    }
}

impl From<TryReserveError> for RotateError {
    fn from(err: TryReserveError) -> Self {
        RotateError::Allocation(err)
    }
}

/// Exact byte count for a geometry, or [`RotateError::SizeOverflow`].
#[inline]
pub(crate) fn exact_size(
    size: Option<usize>,
    width: u32,
    height: u32,
) -> Result<usize, RotateError> {
    size.ok_or(RotateError::SizeOverflow { width, height })
}

#[inline]
pub(crate) fn check_frame_size(data: &[u8], expected: usize) -> Result<(), RotateError> {
    if data.len() < expected {
        return Err(RotateError::FrameSize(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}
