//! This is the documentation for the **geometric_optics** package, the ray tracing and image formation engine of
//! an educational lens and mirror simulation.
//!
//! A [`Scene`](scene::Scene) places an [`Optic`](optic::Optic) (thin lens or mirror) on the optical axis together
//! with optical objects in front of it. For every source point the engine computes the image predicted by the thin
//! lens equation, traces light rays through the optic toward that image and, for light sources, the spot on a
//! projection screen. All lengths are handled as `uom` quantities on the public API.
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod console;
pub mod error;
pub mod guide;
pub mod light_rays;
pub mod light_spot;
pub mod optic;
pub mod optical_image;
pub mod optical_object;
pub mod projection_screen;
pub mod ray;
pub mod rays_type;
pub mod scene;
pub mod shape;
pub mod surface;
pub mod utils;

/// Return the version information of the currently built executable.
#[must_use]
pub fn get_version() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn get_ver() {
        let version_string = get_version();
        assert!(version_string.starts_with("geometric_optics "));
        assert!(version_string.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
