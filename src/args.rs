// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use clap::Parser;
use edgefirst_rotate::image::PlaneGeometry;
use std::path::PathBuf;

/// Direction of the transform applied to the input file.
#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Copy)]
pub enum Mode {
    /// Rotate full I420 frames from capture to display orientation
    Rotate,
    /// Map luma-only frames from display back to capture orientation
    Unrotate,
}

/// Command-line arguments for the EdgeFirst rotation tool.
///
/// Reads raw frames from a file, applies the configured rotation and mirror
/// to each frame, and writes the result. Arguments can be specified via
/// command line or environment variables.
///
/// # Example
///
/// ```bash
/// # Via command line
/// edgefirst-rotate --rotate 90 --flip-axis h --camera-size 1920 1080 \
///     --input capture.yuv --output upright.yuv
///
/// # Via environment variables
/// export ROTATE=270
/// export FLIP_AXIS=vertical
/// edgefirst-rotate --input capture.yuv --output upright.yuv
/// ```
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Clockwise rotation in degrees, must be a multiple of 90
    #[arg(long, env = "ROTATE", default_value = "0", allow_negative_numbers = true)]
    pub rotate: i32,

    /// Flip axis applied before rotation: h(orizontal), v(ertical) or none
    #[arg(long, env = "FLIP_AXIS", default_value = "none")]
    pub flip_axis: String,

    /// Camera capture resolution in pixels (width height)
    #[arg(
        long,
        env = "CAMERA_SIZE",
        default_value = "1920 1080",
        value_delimiter = ' ',
        num_args = 2
    )]
    pub camera_size: Vec<u32>,

    /// High resolution capture size in pixels (width height), if the camera
    /// provides a second stream
    #[arg(
        long,
        env = "CAMERA_SIZE_HIGH",
        value_delimiter = ' ',
        num_args = 2
    )]
    pub camera_size_high: Option<Vec<u32>>,

    /// Transform direction
    #[arg(long, env = "MODE", default_value = "rotate", value_enum)]
    pub mode: Mode,

    /// Raw input file of back-to-back frames
    #[arg(short, long)]
    pub input: PathBuf,

    /// Raw output file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable Tracy profiler for performance analysis
    #[arg(long, env = "TRACY")]
    pub tracy: bool,
}

impl Args {
    /// Capture dimensions of the normal resolution stream.
    pub fn camera_geometry(&self) -> PlaneGeometry {
        geometry(&self.camera_size)
    }

    /// Capture dimensions of the high resolution stream, if configured.
    pub fn camera_geometry_high(&self) -> Option<PlaneGeometry> {
        self.camera_size_high.as_deref().map(geometry)
    }
}

fn geometry(size: &[u32]) -> PlaneGeometry {
    match size {
        [width, height, ..] => PlaneGeometry::new(*width, *height),
        _ => PlaneGeometry::default(),
    }
}
