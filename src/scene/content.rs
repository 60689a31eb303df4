//! Building blocks of the different scene kinds.
use nalgebra::Point2;
use uom::si::f64::Length;

use crate::{
    guide::{Guide, GuideLocation},
    light_rays::LightRays,
    light_spot::LightSpot,
    optic::{Optic, OpticType},
    optical_image::OpticalImage,
    optical_object::{OpticalObject, OpticalObjectChoice},
    projection_screen::ProjectionScreen,
    rays_type::RaysType,
    utils::cm_to_point,
};

/// A source point together with its image and the rays connecting both.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagingPath {
    source: Point2<f64>,
    image: OpticalImage,
    rays: LightRays,
}
impl ImagingPath {
    fn new(
        source: Point2<f64>,
        optic: &Optic,
        rays_type: RaysType,
        travelled: f64,
        screen: Option<&ProjectionScreen>,
    ) -> Self {
        let mut image = OpticalImage::from_cm(optic, &source);
        let rays = LightRays::from_cm(rays_type, &source, optic, &mut image, screen, travelled);
        Self {
            source,
            image,
            rays,
        }
    }
    /// Returns the source point of this [`ImagingPath`].
    #[must_use]
    pub fn source(&self) -> Point2<Length> {
        cm_to_point(&self.source)
    }
    pub(crate) const fn source_cm(&self) -> Point2<f64> {
        self.source
    }
    /// Returns the image of the source point.
    #[must_use]
    pub const fn image(&self) -> &OpticalImage {
        &self.image
    }
    /// Returns the light rays from the source point.
    #[must_use]
    pub const fn rays(&self) -> &LightRays {
        &self.rays
    }
}

/// Two arrows, each with its image and rays.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowContent {
    objects: Vec<OpticalObject>,
    paths: Vec<ImagingPath>,
    guides: Vec<Guide>,
}

/// A framed object with an optional second point of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct FramedContent {
    choice: OpticalObjectChoice,
    object: OpticalObject,
    paths: Vec<ImagingPath>,
    guides: Vec<Guide>,
}

/// Two light sources shining on a projection screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LightContent {
    lights: Vec<OpticalObject>,
    screen: ProjectionScreen,
    paths: Vec<ImagingPath>,
    spots: Vec<LightSpot>,
}

/// The kind specific part of a [`Scene`](super::Scene).
#[derive(Debug, Clone, PartialEq)]
pub enum SceneContent {
    /// arrow scene
    Arrow(ArrowContent),
    /// framed object scene
    Framed(FramedContent),
    /// light scene
    Light(LightContent),
}
impl SceneContent {
    pub(crate) fn arrows(objects: Vec<OpticalObject>) -> Self {
        Self::Arrow(ArrowContent {
            objects,
            paths: Vec::new(),
            guides: Vec::new(),
        })
    }
    pub(crate) fn framed(choice: OpticalObjectChoice, object: OpticalObject) -> Self {
        Self::Framed(FramedContent {
            choice,
            object,
            paths: Vec::new(),
            guides: Vec::new(),
        })
    }
    pub(crate) fn lights(lights: Vec<OpticalObject>, screen: ProjectionScreen) -> Self {
        Self::Light(LightContent {
            lights,
            screen,
            paths: Vec::new(),
            spots: Vec::new(),
        })
    }
    /// Recompute all images, rays, guides and spots.
    pub(crate) fn update(&mut self, optic: &Optic, rays_type: RaysType, travelled: f64) {
        match self {
            Self::Arrow(content) => {
                content.paths = content
                    .objects
                    .iter()
                    .map(|o| ImagingPath::new(o.position_cm(), optic, rays_type, travelled, None))
                    .collect();
                content.guides = content
                    .objects
                    .first()
                    .map_or_else(Vec::new, |o| guides(optic, &o.position_cm()));
            }
            Self::Framed(content) => {
                content.paths = std::iter::once(content.object.position_cm())
                    .chain(content.object.second_point_cm())
                    .map(|p| ImagingPath::new(p, optic, rays_type, travelled, None))
                    .collect();
                content.guides = guides(optic, &content.object.position_cm());
            }
            Self::Light(content) => {
                let screen = &content.screen;
                content.paths = content
                    .lights
                    .iter()
                    .map(|o| ImagingPath::new(o.position_cm(), optic, rays_type, travelled, Some(screen)))
                    .collect();
                content.spots = content
                    .lights
                    .iter()
                    .zip(content.paths.iter())
                    .map(|(light, path)| LightSpot::new(optic, screen, &light.position(), path.image()))
                    .collect();
            }
        }
    }
    /// Returns the optical objects (or light sources).
    #[must_use]
    pub fn objects(&self) -> &[OpticalObject] {
        match self {
            Self::Arrow(content) => &content.objects,
            Self::Framed(content) => std::slice::from_ref(&content.object),
            Self::Light(content) => &content.lights,
        }
    }
    pub(crate) fn objects_mut(&mut self) -> &mut [OpticalObject] {
        match self {
            Self::Arrow(content) => &mut content.objects,
            Self::Framed(content) => std::slice::from_mut(&mut content.object),
            Self::Light(content) => &mut content.lights,
        }
    }
    /// Returns all imaging paths. For framed objects, the second entry (if any) belongs to the second point of
    /// interest.
    #[must_use]
    pub fn paths(&self) -> &[ImagingPath] {
        match self {
            Self::Arrow(content) => &content.paths,
            Self::Framed(content) => &content.paths,
            Self::Light(content) => &content.paths,
        }
    }
    /// Returns the guides (lenses only, empty for the light scene).
    #[must_use]
    pub fn guides(&self) -> &[Guide] {
        match self {
            Self::Arrow(content) => &content.guides,
            Self::Framed(content) => &content.guides,
            Self::Light(_) => &[],
        }
    }
    /// Returns the light spots (light scene only).
    #[must_use]
    pub fn spots(&self) -> &[LightSpot] {
        match self {
            Self::Light(content) => &content.spots,
            _ => &[],
        }
    }
    /// Returns the projection screen (light scene only).
    #[must_use]
    pub const fn screen(&self) -> Option<&ProjectionScreen> {
        match self {
            Self::Light(content) => Some(&content.screen),
            _ => None,
        }
    }
    pub(crate) fn screen_mut(&mut self) -> Option<&mut ProjectionScreen> {
        match self {
            Self::Light(content) => Some(&mut content.screen),
            _ => None,
        }
    }
    /// Returns the chosen framed object (framed scene only).
    #[must_use]
    pub const fn framed_object(&self) -> Option<OpticalObjectChoice> {
        match self {
            Self::Framed(content) => Some(content.choice),
            _ => None,
        }
    }
}

fn guides(optic: &Optic, object_position: &Point2<f64>) -> Vec<Guide> {
    if optic.optic_type() != OpticType::Lens {
        return Vec::new();
    }
    [GuideLocation::Top, GuideLocation::Bottom]
        .into_iter()
        .map(|location| Guide::from_cm(optic, object_position, location))
        .collect()
}
