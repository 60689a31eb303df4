//! Handling the command line front-end
//!
//! This module handles the command line parsing as well as basic information (e.g. help dialog, version information, etc.).
use clap::{builder::Str, Parser};
use std::path::{Path, PathBuf};
use uom::si::f64::Time;

use crate::{
    animation::MAX_ANIMATION_TIME,
    error::{GeoOpticsError, GeoOpticsResult},
    get_version,
    optic::{FocalLengthModelType, OpticType, SurfaceType},
    optical_object::OpticalObjectChoice,
    rays_type::RaysType,
    scene::SceneConfig,
    seconds,
    utils::f64_to_usize,
};

/// Command line arguments of the geometric optics application.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// configuration of the scene to be simulated
    pub scene_config: SceneConfig,

    /// total animation time
    pub time: Time,

    /// time step of the animation
    pub time_step: Time,
}

#[derive(Parser, Debug)]
#[command(author, version = Str::from(get_version()), about, long_about = None)]
pub struct PartialArgs {
    /// path of a JSON scene configuration. Command line options override the values of this file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// type of the optic
    #[arg(long, value_enum)]
    optic: Option<OpticType>,

    /// object in front of the optic
    #[arg(short, long, value_enum)]
    object: Option<OpticalObjectChoice>,

    /// surface type of the optic
    #[arg(short, long, value_enum)]
    surface: Option<SurfaceType>,

    /// focal length model of the optic
    #[arg(short, long, value_enum)]
    model: Option<FocalLengthModelType>,

    /// ray representation
    #[arg(short, long, value_enum)]
    rays: Option<RaysType>,

    /// animation time in seconds. If not given, the animation runs until all rays are fully drawn.
    #[arg(short, long)]
    time: Option<f64>,

    /// animation time step in seconds
    #[arg(short = 'd', long, default_value_t = 0.02)]
    dt: f64,
}

fn read_scene_config(path: Option<&Path>) -> GeoOpticsResult<SceneConfig> {
    path.map_or_else(|| Ok(SceneConfig::default()), SceneConfig::from_file)
        .map_err(|e| GeoOpticsError::Console(format!("invalid scene configuration: {e}")))
}

/// Evaluates the animation time input.
/// # Returns
/// * the animation time in seconds, [`MAX_ANIMATION_TIME`] if no time was given
/// * None if the time is negative or not finite
fn eval_time_input(time: Option<f64>) -> Option<f64> {
    match time {
        None => Some(MAX_ANIMATION_TIME),
        Some(t) if t.is_finite() && t >= 0.0 => Some(t.min(MAX_ANIMATION_TIME)),
        Some(_) => None,
    }
}

fn eval_time_step_input(dt: f64) -> Option<f64> {
    (dt.is_finite() && dt > 0.0).then_some(dt)
}

impl TryFrom<PartialArgs> for Args {
    type Error = GeoOpticsError;

    fn try_from(part_args: PartialArgs) -> GeoOpticsResult<Self> {
        let mut scene_config = read_scene_config(part_args.config.as_deref())?;
        if let Some(optic_type) = part_args.optic {
            scene_config.optic_type = optic_type;
        }
        if let Some(object) = part_args.object {
            if object != scene_config.object {
                // positions of the configuration belong to a different scene kind
                scene_config.object_positions.clear();
            }
            scene_config.object = object;
        }
        if part_args.surface.is_some() {
            scene_config.surface_type = part_args.surface;
        }
        if part_args.model.is_some() {
            scene_config.focal_length_model = part_args.model;
        }
        if let Some(rays_type) = part_args.rays {
            scene_config.rays_type = rays_type;
        }
        scene_config
            .validate()
            .map_err(|e| GeoOpticsError::Console(format!("invalid scene configuration: {e}")))?;
        let time = eval_time_input(part_args.time).ok_or_else(|| {
            GeoOpticsError::Console("animation time must be a non-negative number".into())
        })?;
        let time_step = eval_time_step_input(part_args.dt).ok_or_else(|| {
            GeoOpticsError::Console("animation time step must be a positive number".into())
        })?;
        Ok(Self {
            scene_config,
            time: seconds!(time),
            time_step: seconds!(time_step),
        })
    }
}

impl Args {
    /// Returns the number of animation steps needed to reach the requested animation time.
    #[must_use]
    pub fn nr_of_steps(&self) -> usize {
        let steps = (self.time / self.time_step).value;
        // absorb rounding of the division, 1.0 / 0.1 must give 10 steps
        f64_to_usize((steps - 1e-9).ceil().max(0.0))
    }
}

/// Creates the intro line shown before a simulation run.
#[must_use]
fn create_intro() -> String {
    format!(
        "Geometric Optics - ray tracing for thin lenses and mirrors (version {})",
        get_version()
    )
}

/// Show the intro and the CLI version information on stderr.
pub fn show_intro() {
    eprintln!("{}", create_intro());
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use uom::si::time::second;

    use crate::scene::SceneKind;

    #[test]
    fn eval_time_input_test() {
        assert_eq!(eval_time_input(None), Some(MAX_ANIMATION_TIME));
        assert_eq!(eval_time_input(Some(2.5)), Some(2.5));
        assert_eq!(eval_time_input(Some(0.0)), Some(0.0));
        assert_eq!(eval_time_input(Some(25.0)), Some(MAX_ANIMATION_TIME));
        assert_eq!(eval_time_input(Some(-1.0)), None);
        assert_eq!(eval_time_input(Some(f64::NAN)), None);
    }
    #[test]
    fn eval_time_step_input_test() {
        assert_eq!(eval_time_step_input(0.1), Some(0.1));
        assert_eq!(eval_time_step_input(0.0), None);
        assert_eq!(eval_time_step_input(-0.1), None);
        assert_eq!(eval_time_step_input(f64::INFINITY), None);
    }
    #[test]
    fn try_from_defaults() {
        let args = Args::try_from(PartialArgs::parse_from(["geometric_optics"])).unwrap();
        assert_eq!(args.scene_config, SceneConfig::default());
        assert_eq!(args.time.get::<second>(), MAX_ANIMATION_TIME);
        assert_eq!(args.time_step.get::<second>(), 0.02);
        assert_eq!(args.nr_of_steps(), 500);
    }
    #[test]
    fn try_from_options() {
        let args = Args::try_from(PartialArgs::parse_from([
            "geometric_optics",
            "--optic",
            "mirror",
            "--object",
            "arrow",
            "--surface",
            "convex",
            "--rays",
            "many",
            "--time",
            "1.0",
            "--dt",
            "0.25",
        ]))
        .unwrap();
        assert_eq!(args.scene_config.optic_type, OpticType::Mirror);
        assert_eq!(args.scene_config.scene_kind(), SceneKind::Arrow);
        assert_eq!(args.scene_config.surface_type, Some(SurfaceType::Convex));
        assert_eq!(args.scene_config.rays_type, RaysType::Many);
        assert_eq!(args.nr_of_steps(), 4);
    }
    #[test]
    fn try_from_invalid() {
        assert_matches!(
            Args::try_from(PartialArgs::parse_from([
                "geometric_optics",
                "--optic",
                "mirror",
                "--object",
                "light"
            ])),
            Err(GeoOpticsError::Console(_))
        );
        assert_matches!(
            Args::try_from(PartialArgs::parse_from(["geometric_optics", "--dt", "0"])),
            Err(GeoOpticsError::Console(_))
        );
        assert_matches!(
            Args::try_from(PartialArgs::parse_from(["geometric_optics", "--time=-1"])),
            Err(GeoOpticsError::Console(_))
        );
        assert_matches!(
            Args::try_from(PartialArgs::parse_from([
                "geometric_optics",
                "--config",
                "./invalid_file_path/scene.json"
            ])),
            Err(GeoOpticsError::Console(_))
        );
    }
    #[test]
    fn try_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"object": "light", "object_positions": [[-150.0, 10.0], [-250.0, -10.0]]}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_owned();
        let args = Args::try_from(PartialArgs::parse_from([
            "geometric_optics",
            "--config",
            &path,
        ]))
        .unwrap();
        assert_eq!(args.scene_config.scene_kind(), SceneKind::Light);
        assert_eq!(args.scene_config.object_positions.len(), 2);
        // switching the object drops the positions of the file
        let args = Args::try_from(PartialArgs::parse_from([
            "geometric_optics",
            "--config",
            &path,
            "--object",
            "star",
        ]))
        .unwrap();
        assert_eq!(args.scene_config.scene_kind(), SceneKind::Framed);
        assert!(args.scene_config.object_positions.is_empty());
    }
    #[test]
    fn intro() {
        assert!(create_intro().contains(&get_version()));
    }
}
