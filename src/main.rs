use clap::Parser;
use env_logger::Env;
use geometric_optics::{
    console::{show_intro, Args, PartialArgs},
    error::{GeoOpticsError, GeoOpticsResult},
    scene::Scene,
};
use log::info;

fn run_animation(args: &Args) -> GeoOpticsResult<Scene> {
    let mut scene = Scene::new(args.scene_config.clone())?;
    let nr_of_steps = args.nr_of_steps();
    info!("running animation with {nr_of_steps} steps");
    let mut remaining = args.time;
    for _ in 0..nr_of_steps {
        let dt = if remaining < args.time_step {
            remaining
        } else {
            args.time_step
        };
        scene.step(dt);
        remaining -= dt;
    }
    Ok(scene)
}

fn main() -> GeoOpticsResult<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    //parse CLI arguments
    let args = Args::try_from(PartialArgs::parse())?;
    show_intro();

    let scene = run_animation(&args)?;

    let snapshot = serde_json::to_string_pretty(&scene.snapshot())
        .map_err(|e| GeoOpticsError::Other(format!("serialization of scene snapshot failed: {e}")))?;
    println!("{snapshot}");
    Ok(())
}
