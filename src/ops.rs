// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Pixel reordering primitives for a single 8-bit plane.
//!
//! Planes are tightly packed, so the row stride equals `width`. Functions
//! taking a `width` and `height` expect the plane slices to hold at least
//! `width * height` bytes and leave bytes past that point untouched.
//! [`rotate_180`] has no geometry and reverses the entire slice it is given.

/// Rotates a plane by 180 degrees in place.
///
/// A packed plane turned half way round is the same bytes in reverse order,
/// so the whole region is simply reversed.
pub fn rotate_180(plane: &mut [u8]) {
    plane.reverse();
}

/// Mirrors a plane across its horizontal centerline, in place.
///
/// Row `l` is exchanged with row `height - 1 - l`, turning the image
/// upside down without changing left and right.
pub fn flip_horizontal(plane: &mut [u8], width: usize, height: usize) {
    for l in 0..height / 2 {
        let (top, bottom) = plane.split_at_mut((height - 1 - l) * width);
        top[l * width..(l + 1) * width].swap_with_slice(&mut bottom[..width]);
    }
}

/// Mirrors a plane across its vertical centerline, in place.
///
/// Each row is reversed independently, swapping left and right.
pub fn flip_vertical(plane: &mut [u8], width: usize, height: usize) {
    if width == 0 {
        return;
    }
    for row in plane[..width * height].chunks_exact_mut(width) {
        row.reverse();
    }
}

/// Reads `src` column by column, left to right, walking each column from the
/// bottom row up to the top row.
fn columns_bottom_up(src: &[u8], width: usize, height: usize) -> impl Iterator<Item = u8> + '_ {
    (0..width).flat_map(move |x| (0..height).rev().map(move |y| src[y * width + x]))
}

/// Rotates a `width x height` plane 90 degrees clockwise into `dst`.
///
/// The result is `height` pixels wide and `width` pixels tall. Its first
/// row is the first source column read from bottom to top. `src` and `dst`
/// must be distinct buffers of at least `width * height` bytes.
pub fn rotate_cw(src: &[u8], dst: &mut [u8], width: usize, height: usize) {
    let size = width * height;
    for (out, px) in dst[..size]
        .iter_mut()
        .zip(columns_bottom_up(src, width, height))
    {
        *out = px;
    }
}

/// Rotates a `width x height` plane 90 degrees counter-clockwise into `dst`.
///
/// Uses the same read order as [`rotate_cw`] but fills `dst` from its last
/// byte backwards, which yields the counter-clockwise turn.
pub fn rotate_ccw(src: &[u8], dst: &mut [u8], width: usize, height: usize) {
    let size = width * height;
    for (out, px) in dst[..size]
        .iter_mut()
        .rev()
        .zip(columns_bottom_up(src, width, height))
    {
        *out = px;
    }
}
