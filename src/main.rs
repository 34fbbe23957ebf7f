//! Preview binary for the orbicam ellipsoid orbit camera rig.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use orbicam::camera::{Camera, OrbitCameraController, OrbitPlacement};
use orbicam::debug::{DebugDrawData, EllipsoidDebugVisualizer};
use orbicam::validation::{ValidationContext, ValidationResult};
use orbicam::{OrbitError, Options};
use serde::Serialize;

/// Position an orbit camera from a preset and report the result.
#[derive(Parser, Debug)]
#[command(name = "orbicam", version, about)]
struct Args {
    /// TOML preset to load (defaults are used when omitted).
    #[arg(long)]
    preset: Option<PathBuf>,
    /// Override the azimuthal angle, in degrees.
    #[arg(long, allow_hyphen_values = true)]
    azimuth: Option<f32>,
    /// Override the polar angle, in degrees.
    #[arg(long, allow_hyphen_values = true)]
    polar: Option<f32>,
    /// Write a JSON report (placement, camera, debug geometry) here.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Save the resulting options as a TOML preset here.
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report {
    options: Options,
    validation_errors: Vec<String>,
    placement: Option<OrbitPlacement>,
    eye: [f32; 3],
    target: [f32; 3],
    up: [f32; 3],
    debug: Option<DebugDrawData>,
}

fn run(args: &Args) -> Result<(), OrbitError> {
    let mut options = match &args.preset {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(azimuth) = args.azimuth {
        options.rig.horizontal_angle_deg = azimuth;
    }
    if let Some(polar) = args.polar {
        options.rig.vertical_angle_deg = polar;
    }

    let mut rig = OrbitCameraController::new(Camera::default());
    if options.debug.enabled {
        rig = rig.with_debug_visualizer(Box::new(
            EllipsoidDebugVisualizer::new(options.debug.clone()),
        ));
    }

    // The camera keeps its previous transform on failure; report it anyway.
    if let Err(e) = rig.apply_options(&options.rig) {
        log::warn!("rig options applied with errors: {e}");
    }

    let mut validation = ValidationContext::new();
    if rig.validate(&mut validation) == ValidationResult::Invalid {
        for error in validation.errors() {
            log::warn!("validation: {error}");
        }
    }

    if let Some(placement) = rig.placement() {
        log::info!(
            "camera at {} looking {} (up {})",
            placement.position,
            placement.forward,
            placement.up
        );
    }

    let options = Options {
        rig: rig.to_options(),
        ..options
    };
    if let Some(path) = &args.save {
        options.save(path)?;
    }

    if let Some(path) = &args.report {
        let camera = rig.sink();
        let report = Report {
            validation_errors: validation.errors().to_vec(),
            placement: rig.placement().copied(),
            eye: camera.eye.to_array(),
            target: camera.target.to_array(),
            up: camera.up.to_array(),
            debug: rig.debug_draw(),
            options,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| OrbitError::Report(e.to_string()))?;
        std::fs::write(path, json)?;
        log::info!("wrote report to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
