//! Serializable snapshot of the computed geometry of a scene.
//!
//! This is the data consumed by a front-end. All lengths are given in cm, angles in radian and times in seconds.
use nalgebra::Point2;
use serde::Serialize;
use uom::si::{angle::radian, length::centimeter, time::second};

use super::{Scene, SceneKind};
use crate::{
    guide::{Guide, GuideLocation},
    light_spot::LightSpot,
    optic::{FocalLengthModelType, Optic, OpticType, SurfaceType},
    optical_image::{ImageType, Orientation},
    ray::LineSegment,
    rays_type::RaysType,
    scene::ImagingPath,
    shape::Polygon,
    utils::point_to_cm,
};

/// Snapshot of a [`Scene`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    /// kind of the scene
    pub kind: SceneKind,
    /// the optic
    pub optic: OpticSnapshot,
    /// the selected ray representation
    pub rays_type: RaysType,
    /// elapsed animation time
    pub elapsed_time: f64,
    /// one entry per source point (objects and second points of interest)
    pub paths: Vec<PathSnapshot>,
    /// guides (lens scenes)
    pub guides: Vec<GuideSnapshot>,
    /// position of the projection screen (light scene)
    pub screen: Option<Point2<f64>>,
    /// light spots (light scene)
    pub spots: Vec<SpotSnapshot>,
}
impl SceneSnapshot {
    pub(crate) fn new(scene: &Scene) -> Self {
        Self {
            kind: scene.kind(),
            optic: OpticSnapshot::from(scene.optic()),
            rays_type: scene.rays_type(),
            elapsed_time: scene.elapsed().get::<second>(),
            paths: scene.paths().iter().map(PathSnapshot::from).collect(),
            guides: scene.guides().iter().map(GuideSnapshot::from).collect(),
            screen: scene.screen().map(|s| s.position_cm()),
            spots: scene.spots().iter().map(SpotSnapshot::from).collect(),
        }
    }
}

/// Current parameters of the optic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpticSnapshot {
    /// lens or mirror
    pub optic_type: OpticType,
    /// surface type
    pub surface_type: SurfaceType,
    /// focal length model
    pub focal_length_model: FocalLengthModelType,
    /// position of the optic
    pub position: Point2<f64>,
    /// diameter
    pub diameter: f64,
    /// signed radius of curvature
    pub radius_of_curvature: f64,
    /// index of refraction
    pub index_of_refraction: f64,
    /// signed focal length
    pub focal_length: f64,
}
impl From<&Optic> for OpticSnapshot {
    fn from(optic: &Optic) -> Self {
        Self {
            optic_type: optic.optic_type(),
            surface_type: optic.surface_type(),
            focal_length_model: optic.focal_length_model(),
            position: optic.position_cm(),
            diameter: optic.diameter().get::<centimeter>(),
            radius_of_curvature: optic.radius_of_curvature().get::<centimeter>(),
            index_of_refraction: optic.index_of_refraction(),
            focal_length: optic.focal_length().get::<centimeter>(),
        }
    }
}

/// A source point with its image and rays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSnapshot {
    /// source point
    pub source: Point2<f64>,
    /// image position
    pub image_position: Point2<f64>,
    /// signed image distance
    pub image_distance: f64,
    /// signed magnification
    pub magnification: f64,
    /// real or virtual
    pub image_type: ImageType,
    /// upright or inverted
    pub orientation: Orientation,
    /// true if a ray reached the image
    pub visible: bool,
    /// real ray segments
    pub real_segments: Vec<LineSegment>,
    /// virtual ray segments
    pub virtual_segments: Vec<LineSegment>,
}
impl From<&ImagingPath> for PathSnapshot {
    fn from(path: &ImagingPath) -> Self {
        let image = path.image();
        Self {
            source: path.source_cm(),
            image_position: image.position_cm(),
            image_distance: image.image_distance().get::<centimeter>(),
            magnification: image.magnification(),
            image_type: image.image_type(),
            orientation: image.orientation(),
            visible: image.visible(),
            real_segments: path.rays().real_segments().to_vec(),
            virtual_segments: path.rays().virtual_segments().to_vec(),
        }
    }
}

/// A guide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideSnapshot {
    /// top or bottom
    pub location: GuideLocation,
    /// pivot point
    pub fulcrum: Point2<f64>,
    /// angle of the incident arm
    pub incident_angle: f64,
    /// angle of the transmitted arm
    pub transmitted_angle: f64,
}
impl From<&Guide> for GuideSnapshot {
    fn from(guide: &Guide) -> Self {
        Self {
            location: guide.location(),
            fulcrum: point_to_cm(&guide.fulcrum()),
            incident_angle: guide.incident_angle().get::<radian>(),
            transmitted_angle: guide.transmitted_angle().get::<radian>(),
        }
    }
}

/// A light spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotSnapshot {
    /// center of the spot
    pub position: Point2<f64>,
    /// vertical extent
    pub diameter: f64,
    /// intensity in the range `[0.0, 1.0]`
    pub intensity: f64,
    /// outline, clipped by the screen
    pub shape: Polygon,
}
impl From<&LightSpot> for SpotSnapshot {
    fn from(spot: &LightSpot) -> Self {
        Self {
            position: point_to_cm(&spot.position()),
            diameter: spot.diameter().get::<centimeter>(),
            intensity: spot.intensity(),
            shape: spot.shape().clone(),
        }
    }
}
