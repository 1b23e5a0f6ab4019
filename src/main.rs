// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use args::{Args, Mode};
use clap::Parser;
use edgefirst_rotate::{
    image::{PlaneGeometry, Tier},
    rotate::{RotateOutcome, Rotator},
};
use serde_json::json;
use std::{error::Error, fs, time::Instant};
use tracing::{debug, info, warn};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, Layer, Registry};

mod args;

fn init_logging(args: &Args) -> Result<(), Box<dyn Error>> {
    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let stdout_log = tracing_subscriber::fmt::layer().with_filter(level);

    // journald is optional, hosts without systemd log to stdout only.
    let (journald, journald_err) = match tracing_journald::layer() {
        Ok(layer) => (Some(layer.with_filter(level)), None),
        Err(err) => (None, Some(err)),
    };

    let tracy = if args.tracy {
        tracy_client::Client::start();
        Some(tracing_tracy::TracyLayer::default().with_filter(LevelFilter::TRACE))
    } else {
        None
    };

    let subscriber = Registry::default()
        .with(stdout_log)
        .with(journald)
        .with(tracy);
    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;

    if let Some(err) = journald_err {
        debug!("journald logging unavailable: {}", err);
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let capture = args.camera_geometry();
    let capture_high = args.camera_geometry_high();

    let mut rotator = Rotator::new();
    rotator.configure(args.rotate, &args.flip_axis, capture, capture_high)?;
    let display = rotator.display(Tier::Normal).unwrap_or(capture);

    // Frames in the input file are laid out at capture orientation when
    // rotating, and at display orientation when mapping luma back.
    let (geom, frame_size) = match args.mode {
        Mode::Rotate => (capture, capture.frame_size()),
        Mode::Unrotate => (display, display.luma_size()),
    };
    if frame_size == 0 {
        return Err(Box::from(format!("invalid frame size {}", geom)));
    }

    let mut data = fs::read(&args.input)?;
    let trailing = data.len() % frame_size;
    if trailing != 0 {
        warn!(
            "{} trailing bytes in {} ignored, not a whole {} frame",
            trailing,
            args.input.display(),
            geom
        );
    }

    let now = Instant::now();
    let mut frames = 0;
    let mut swapped = false;
    for frame in data.chunks_exact_mut(frame_size) {
        let outcome = match args.mode {
            Mode::Rotate => rotator.rotate_frame(frame, geom.width, geom.height)?,
            Mode::Unrotate => rotator.unrotate_plane(frame, geom.width, geom.height)?,
        };
        swapped = outcome == RotateOutcome::Swapped;
        frames += 1;
    }
    let elapsed = now.elapsed();
    debug!("transformed {} frames in {:?}", frames, elapsed);

    fs::write(&args.output, &data[..frames * frame_size])?;

    let output = if swapped { geom.swapped() } else { geom };
    let config = rotator.config();
    let summary = json!({
        "mode": format!("{:?}", args.mode).to_lowercase(),
        "degrees": config.angle.degrees(),
        "axis": format!("{:?}", config.axis).to_lowercase(),
        "input": geom.to_string(),
        "output": output.to_string(),
        "display_high": rotator.display(Tier::High).map(|g: PlaneGeometry| g.to_string()),
        "scratch_bytes": rotator.scratch_capacity(),
        "frames": frames,
        "elapsed_ms": elapsed.as_secs_f64() * 1000.0,
    });
    info!("{}", summary);

    rotator.teardown();
    Ok(())
}
