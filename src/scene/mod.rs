#![warn(missing_docs)]
//! Scenes: an optic together with the optical objects in front of it.
//!
//! All scene kinds share the optic, the ray representation and the animation clock. They differ in the objects they
//! contain (see [`SceneContent`]). Every change of an input recomputes all images, rays, guides and light spots.
mod config;
mod content;
mod snapshot;

pub use config::SceneConfig;
pub use content::{ArrowContent, FramedContent, ImagingPath, LightContent, SceneContent};
pub use snapshot::{GuideSnapshot, OpticSnapshot, PathSnapshot, SceneSnapshot, SpotSnapshot};

use log::{debug, info};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use uom::si::{
    f64::{Length, Time, Velocity},
    length::centimeter,
};

use crate::{
    animation::RayAnimationClock,
    centimeter, centimeter_per_second,
    error::{GeoOpticsError, GeoOpticsResult},
    guide::Guide,
    light_rays::MAX_RAY_LENGTH,
    light_spot::LightSpot,
    optic::{Optic, OpticType},
    optical_object::{OpticalObject, OpticalObjectChoice},
    projection_screen::ProjectionScreen,
    rays_type::RaysType,
    utils::{cm_to_point, point_to_cm},
};

/// The different kinds of scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SceneKind {
    /// two arrows
    Arrow,
    /// a framed object with an optional second point of interest
    Framed,
    /// two light sources and a projection screen (lens only)
    Light,
}
impl SceneKind {
    /// Returns the [`SceneKind`] showing the given object.
    #[must_use]
    pub const fn for_object(object: OpticalObjectChoice) -> Self {
        match object {
            OpticalObjectChoice::Arrow => Self::Arrow,
            OpticalObjectChoice::Light => Self::Light,
            OpticalObjectChoice::Pencil | OpticalObjectChoice::Penguin | OpticalObjectChoice::Star => {
                Self::Framed
            }
        }
    }
    /// Number of optical objects of this scene kind.
    #[must_use]
    pub const fn object_count(&self) -> usize {
        match self {
            Self::Arrow | Self::Light => 2,
            Self::Framed => 1,
        }
    }
}

/// A complete scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    config: SceneConfig,
    optic: Optic,
    rays_type: RaysType,
    clock: RayAnimationClock,
    content: SceneContent,
}
impl Scene {
    /// Creates a new [`Scene`] from the given configuration.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the configuration is inconsistent (see [`SceneConfig::validate`]).
    ///   - an object is not located left of the optic.
    pub fn new(config: SceneConfig) -> GeoOpticsResult<Self> {
        config.validate()?;
        let optic = Optic::new(config.optic_type, config.optic_config())?;
        let content = Self::initial_content(&config, &optic)?;
        let mut scene = Self {
            rays_type: config.rays_type,
            config,
            optic,
            clock: RayAnimationClock::new(),
            content,
        };
        scene.recompute();
        info!(
            "created {} scene with {} {}",
            scene.kind(),
            scene.optic.surface_type(),
            scene.optic.optic_type()
        );
        Ok(scene)
    }
    fn initial_content(config: &SceneConfig, optic: &Optic) -> GeoOpticsResult<SceneContent> {
        let objects = config
            .object_positions_or_default()
            .iter()
            .map(|p| {
                check_left_of_optic(optic, p)?;
                OpticalObject::new(cm_to_point(p))
            })
            .collect::<GeoOpticsResult<Vec<_>>>()?;
        let content = match config.scene_kind() {
            SceneKind::Arrow => SceneContent::arrows(objects),
            SceneKind::Framed => {
                let mut object = objects.into_iter().next().ok_or_else(|| {
                    GeoOpticsError::Config("framed scene requires an object position".into())
                })?;
                object.set_second_point_offset(config.second_point_offset.map(|o| centimeter!(o)))?;
                SceneContent::framed(config.object, object)
            }
            SceneKind::Light => {
                if optic.optic_type() != OpticType::Lens {
                    return Err(GeoOpticsError::Scene(
                        "light scenes require a lens".into(),
                    ));
                }
                let screen = ProjectionScreen::new(cm_to_point(&config.screen_position))?;
                SceneContent::lights(objects, screen)
            }
        };
        Ok(content)
    }
    /// Returns the [`SceneKind`] of this [`Scene`].
    #[must_use]
    pub const fn kind(&self) -> SceneKind {
        match self.content {
            SceneContent::Arrow(_) => SceneKind::Arrow,
            SceneContent::Framed(_) => SceneKind::Framed,
            SceneContent::Light(_) => SceneKind::Light,
        }
    }
    /// Returns the configuration this [`Scene`] was created with.
    #[must_use]
    pub const fn config(&self) -> &SceneConfig {
        &self.config
    }
    /// Returns the optic of this [`Scene`].
    #[must_use]
    pub const fn optic(&self) -> &Optic {
        &self.optic
    }
    /// Modify the optic of this [`Scene`].
    ///
    /// The given function can use the setters of [`Optic`]. Afterwards the animation restarts and all derived
    /// values are recomputed (also if the function fails).
    ///
    /// # Errors
    ///
    /// This function will return the error of the given function.
    pub fn modify_optic<F>(&mut self, f: F) -> GeoOpticsResult<()>
    where
        F: FnOnce(&mut Optic) -> GeoOpticsResult<()>,
    {
        let result = f(&mut self.optic);
        self.restart();
        result
    }
    /// Returns the selected [`RaysType`].
    #[must_use]
    pub const fn rays_type(&self) -> RaysType {
        self.rays_type
    }
    /// Select the [`RaysType`]. This restarts the animation.
    pub fn set_rays_type(&mut self, rays_type: RaysType) {
        self.rays_type = rays_type;
        self.restart();
    }
    /// Returns the propagation speed of the light rays.
    #[must_use]
    pub fn light_speed(&self) -> Velocity {
        centimeter_per_second!(self.config.light_speed)
    }
    /// Returns the elapsed animation time.
    #[must_use]
    pub fn elapsed(&self) -> Time {
        self.clock.elapsed()
    }
    /// Advance the animation by the given time step.
    pub fn step(&mut self, dt: Time) {
        self.clock.step(dt);
        self.recompute();
    }
    /// Jump to the end of the animation.
    pub fn finish_animation(&mut self) {
        self.clock.finish();
        self.recompute();
    }
    /// Returns the optical objects (or light sources) of this [`Scene`].
    #[must_use]
    pub fn objects(&self) -> &[OpticalObject] {
        self.content.objects()
    }
    /// Move the optical object with the given index. This restarts the animation.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the index is out of range.
    ///   - the position is not finite or not left of the optic.
    pub fn set_object_position(&mut self, index: usize, position: Point2<Length>) -> GeoOpticsResult<()> {
        check_left_of_optic(&self.optic, &point_to_cm(&position))?;
        let object = self.content.objects_mut().get_mut(index).ok_or_else(|| {
            GeoOpticsError::Scene(format!("no optical object with index {index}"))
        })?;
        object.set_position(position)?;
        self.restart();
        Ok(())
    }
    /// Set (or remove) the second point of interest of a framed object. This restarts the animation.
    ///
    /// # Errors
    ///
    /// This function will return an error if this is not a framed object scene or the offset is not finite.
    pub fn set_second_point_offset(&mut self, offset: Option<Length>) -> GeoOpticsResult<()> {
        if self.kind() != SceneKind::Framed {
            return Err(GeoOpticsError::Scene(
                "second points of interest are only available for framed objects".into(),
            ));
        }
        if let Some(object) = self.content.objects_mut().first_mut() {
            object.set_second_point_offset(offset)?;
        }
        self.restart();
        Ok(())
    }
    /// Returns the projection screen (light scene only).
    #[must_use]
    pub const fn screen(&self) -> Option<&ProjectionScreen> {
        self.content.screen()
    }
    /// Move the projection screen.
    ///
    /// # Errors
    ///
    /// This function will return an error if this is not a light scene or the position is not finite.
    pub fn set_screen_position(&mut self, position: Point2<Length>) -> GeoOpticsResult<()> {
        let screen = self.content.screen_mut().ok_or_else(|| {
            GeoOpticsError::Scene("only light scenes have a projection screen".into())
        })?;
        *screen = ProjectionScreen::new(position)?;
        self.recompute();
        Ok(())
    }
    /// Returns the kind specific content of this [`Scene`].
    #[must_use]
    pub const fn content(&self) -> &SceneContent {
        &self.content
    }
    /// Returns all imaging paths (source point, image and rays).
    #[must_use]
    pub fn paths(&self) -> &[ImagingPath] {
        self.content.paths()
    }
    /// Returns the guides of this [`Scene`].
    #[must_use]
    pub fn guides(&self) -> &[Guide] {
        self.content.guides()
    }
    /// Returns the light spots of this [`Scene`].
    #[must_use]
    pub fn spots(&self) -> &[LightSpot] {
        self.content.spots()
    }
    /// Restore the initial state of this [`Scene`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the initial state cannot be restored.
    pub fn reset(&mut self) -> GeoOpticsResult<()> {
        self.optic.reset();
        self.rays_type = self.config.rays_type;
        self.content = Self::initial_content(&self.config, &self.optic)?;
        self.restart();
        info!("{} scene reset", self.kind());
        Ok(())
    }
    /// Returns a serializable snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::new(self)
    }
    fn restart(&mut self) {
        self.clock.reset();
        self.recompute();
    }
    fn recompute(&mut self) {
        let travelled: Length = self.light_speed() * self.clock.elapsed();
        debug!("recomputing {} scene", self.kind());
        self.content
            .update(&self.optic, self.rays_type, travelled.get::<centimeter>());
    }
}

fn check_left_of_optic(optic: &Optic, position: &Point2<f64>) -> GeoOpticsResult<()> {
    let dx = optic.position_cm().x - position.x;
    if dx <= 0.0 || dx.is_nan() {
        return Err(GeoOpticsError::Scene(format!(
            "optical object at x = {} cm must be left of the optic",
            position.x
        )));
    }
    if dx > MAX_RAY_LENGTH {
        return Err(GeoOpticsError::Scene(format!(
            "optical object at x = {} cm is farther than {MAX_RAY_LENGTH} cm from the optic",
            position.x
        )));
    }
    Ok(())
}
