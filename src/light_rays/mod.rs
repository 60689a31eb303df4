#![warn(missing_docs)]
//! Light rays emanating from an optical object
//!
//! [`LightRays`] collects the segments of all rays starting at a source point. The initial directions depend on the
//! selected [`RaysType`] (see [`ray_directions`]), each ray is traced by [`LightRay`] and truncated to the distance
//! light travelled since the animation started.
mod light_ray;

pub use light_ray::{LightRay, IMAGE_HIT_TOLERANCE};

use log::debug;
use nalgebra::{Point2, Vector2};
use std::f64::consts::PI;
use uom::si::{
    f64::{Length, Time, Velocity},
    length::centimeter,
};

use crate::{
    optic::Optic,
    optical_image::OpticalImage,
    projection_screen::ProjectionScreen,
    ray::{LineSegment, Ray2},
    rays_type::RaysType,
    utils::{f64_to_usize, point_to_cm, usize_to_f64},
};

/// Length (cm) of rays that do not end on the projection screen.
pub const MAX_RAY_LENGTH: f64 = 10_000.0;
/// Default propagation speed of light (cm/s) in the animation.
pub const LIGHT_SPEED: f64 = 200.0;
/// Full opening angle of the [`RaysType::Many`] fan.
pub const MANY_RAYS_FAN_ANGLE: f64 = 2.0 * PI / 3.0;
/// Number of rays of the [`RaysType::Many`] fan for sources close to the optic.
const MANY_RAYS_BASE_COUNT: usize = 25;
/// Every additional distance step (cm) between source and optic adds [`MANY_RAYS_BASE_COUNT`] rays. Distances
/// beyond [`MAX_RAY_LENGTH`] do not add further rays.
const MANY_RAYS_DISTANCE_STEP: f64 = 100.0;

/// Compute the initial directions of the rays starting at `source`.
///
/// - [`RaysType::Marginal`]: toward the optic's center, top point and bottom point.
/// - [`RaysType::Principal`]: parallel to the optical axis, toward the center and toward the near focal point.
/// - [`RaysType::Many`]: a fan of 120° around the direction toward the optic. The number of rays grows with the
///   horizontal distance to the optic, up to the count reached at [`MAX_RAY_LENGTH`].
/// - [`RaysType::None`]: no rays.
///
/// A source located at the optic's x position does not emit rays.
#[must_use]
pub fn ray_directions(
    rays_type: RaysType,
    source: &Point2<Length>,
    optic: &Optic,
    image: &OpticalImage,
) -> Vec<Vector2<f64>> {
    ray_directions_cm(rays_type, &point_to_cm(source), optic, &image.position_cm())
}

fn ray_directions_cm(
    rays_type: RaysType,
    source: &Point2<f64>,
    optic: &Optic,
    image: &Point2<f64>,
) -> Vec<Vector2<f64>> {
    let optic_position = optic.position_cm();
    let dx = optic_position.x - source.x;
    if dx.abs() < f64::EPSILON {
        debug!("source at the optic's x position, no rays emitted");
        return Vec::new();
    }
    match rays_type {
        RaysType::Marginal => vec![
            optic_position - source,
            optic.extremum_point(source, image, true) - source,
            optic.extremum_point(source, image, false) - source,
        ],
        RaysType::Principal => {
            let focal_point = Point2::new(optic_position.x - optic.focal_length_cm(), optic_position.y);
            let mut to_focal_point = focal_point - source;
            // always head toward the optic
            if to_focal_point.x * dx < 0.0 {
                to_focal_point = -to_focal_point;
            }
            vec![
                Vector2::new(dx.signum(), 0.0),
                optic_position - source,
                to_focal_point,
            ]
        }
        RaysType::Many => {
            let distance = dx.abs().min(MAX_RAY_LENGTH);
            let steps = f64_to_usize((distance / MANY_RAYS_DISTANCE_STEP).floor());
            let count = MANY_RAYS_BASE_COUNT * (1 + steps);
            let center_angle = (optic_position.y - source.y).atan2(dx);
            let start_angle = 0.5f64.mul_add(-MANY_RAYS_FAN_ANGLE, center_angle);
            let delta = MANY_RAYS_FAN_ANGLE / usize_to_f64(count - 1);
            (0..count)
                .map(|i| {
                    let angle = delta.mul_add(usize_to_f64(i), start_angle);
                    Vector2::new(angle.cos(), angle.sin())
                })
                .collect()
        }
        RaysType::None => Vec::new(),
    }
}

/// The real and virtual segments of all rays emanating from a source point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightRays {
    real_segments: Vec<LineSegment>,
    virtual_segments: Vec<LineSegment>,
}
impl LightRays {
    /// Trace the rays from `source` through `optic` toward `image`.
    ///
    /// All rays are truncated to the distance light travelled with `light_speed` during `elapsed`. The visibility
    /// of the image is updated: it is visible as soon as a ray (or its virtual extension) reached it. If a
    /// projection screen is given, rays leaving the optic stop there.
    #[must_use]
    pub fn new(
        rays_type: RaysType,
        source: &Point2<Length>,
        optic: &Optic,
        image: &mut OpticalImage,
        screen: Option<&ProjectionScreen>,
        light_speed: Velocity,
        elapsed: Time,
    ) -> Self {
        let travelled: Length = light_speed * elapsed;
        Self::from_cm(
            rays_type,
            &point_to_cm(source),
            optic,
            image,
            screen,
            travelled.get::<centimeter>(),
        )
    }
    pub(crate) fn from_cm(
        rays_type: RaysType,
        source: &Point2<f64>,
        optic: &Optic,
        image: &mut OpticalImage,
        screen: Option<&ProjectionScreen>,
        travelled: f64,
    ) -> Self {
        let image_position = image.position_cm();
        let mut light_rays = Self::default();
        let mut reached_image = false;
        for direction in ray_directions_cm(rays_type, source, optic, &image_position) {
            let Some(ray) = Ray2::new(*source, direction) else {
                debug!("skipping degenerate ray direction {direction:?}");
                continue;
            };
            let light_ray = LightRay::trace(
                &ray,
                travelled,
                optic,
                rays_type,
                &image_position,
                screen,
            );
            reached_image |= light_ray.reached_image();
            light_rays
                .real_segments
                .extend_from_slice(light_ray.real_segments());
            light_rays
                .virtual_segments
                .extend(light_ray.virtual_segment().copied());
        }
        image.set_visible(reached_image);
        light_rays
    }
    /// Returns the real segments of all rays.
    #[must_use]
    pub fn real_segments(&self) -> &[LineSegment] {
        &self.real_segments
    }
    /// Returns the virtual segments of all rays.
    #[must_use]
    pub fn virtual_segments(&self) -> &[LineSegment] {
        &self.virtual_segments
    }
    /// Returns true if there are no segments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.real_segments.is_empty() && self.virtual_segments.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        centimeter, centimeter_per_second,
        optic::{OpticType, SurfaceType},
        seconds,
    };
    use approx::assert_abs_diff_eq;
    use strum::IntoEnumIterator;

    fn trace(
        rays_type: RaysType,
        optic: &Optic,
        source: Point2<Length>,
        elapsed: f64,
    ) -> (LightRays, OpticalImage) {
        let mut image = OpticalImage::new(optic, &source);
        let rays = LightRays::new(
            rays_type,
            &source,
            optic,
            &mut image,
            None,
            centimeter_per_second!(LIGHT_SPEED),
            seconds!(elapsed),
        );
        (rays, image)
    }
    #[test]
    fn none() {
        let lens = Optic::lens();
        for t in [0.0, 1.0, 10.0] {
            let (rays, image) = trace(RaysType::None, &lens, centimeter!(-170.0, 27.0), t);
            assert!(rays.is_empty());
            assert!(!image.visible());
        }
    }
    #[test]
    fn marginal_directions() {
        for optic in [
            Optic::lens(),
            Optic::lens().with_surface_type(SurfaceType::Concave),
            Optic::mirror(),
            Optic::mirror().with_surface_type(SurfaceType::Flat),
        ] {
            for source in [centimeter!(-170.0, 27.0), centimeter!(-40.0, -60.0), centimeter!(-500.0, 0.0)] {
                let image = OpticalImage::new(&optic, &source);
                let directions = ray_directions(RaysType::Marginal, &source, &optic, &image);
                assert_eq!(directions.len(), 3);
                assert!(directions.iter().all(|d| d.x > 0.0));
            }
        }
    }
    #[test]
    fn principal_directions() {
        let lens = Optic::lens();
        let source = centimeter!(-200.0, 30.0);
        let image = OpticalImage::new(&lens, &source);
        let directions = ray_directions(RaysType::Principal, &source, &lens, &image);
        assert_eq!(directions.len(), 3);
        assert_eq!(directions[0], Vector2::new(1.0, 0.0));
        assert_eq!(directions[1], Vector2::new(200.0, -30.0));
        // focal point at (-80, 0)
        assert_eq!(directions[2], Vector2::new(120.0, -30.0));
        // source between focal point and lens: the direction is flipped toward the optic
        let source = centimeter!(-40.0, 30.0);
        let image = OpticalImage::new(&lens, &source);
        let directions = ray_directions(RaysType::Principal, &source, &lens, &image);
        assert_eq!(directions[2], Vector2::new(40.0, 30.0));
    }
    #[test]
    fn many_directions() {
        let lens = Optic::lens();
        let near = centimeter!(-50.0, 0.0);
        let image = OpticalImage::new(&lens, &near);
        let directions = ray_directions(RaysType::Many, &near, &lens, &image);
        assert_eq!(directions.len(), 25);
        let far = centimeter!(-250.0, 0.0);
        let image = OpticalImage::new(&lens, &far);
        let directions = ray_directions(RaysType::Many, &far, &lens, &image);
        assert_eq!(directions.len(), 75);
        let first = directions[0].y.atan2(directions[0].x);
        let last = directions[74].y.atan2(directions[74].x);
        assert_abs_diff_eq!(first, -PI / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(last, PI / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(directions[37].y, 0.0, epsilon = 1e-12);
    }
    #[test]
    fn many_directions_bounded() {
        let lens = Optic::lens();
        let at_limit = centimeter!(-MAX_RAY_LENGTH, 0.0);
        let image = OpticalImage::new(&lens, &at_limit);
        assert_eq!(ray_directions(RaysType::Many, &at_limit, &lens, &image).len(), 2525);
        let far = centimeter!(-1e7, 0.0);
        let image = OpticalImage::new(&lens, &far);
        assert_eq!(ray_directions(RaysType::Many, &far, &lens, &image).len(), 2525);
    }
    #[test]
    fn real_image_inside_thick_lens() {
        let mut lens = Optic::lens();
        lens.set_radius_of_curvature(centimeter!(30.0)).unwrap();
        lens.set_index_of_refraction(1.87).unwrap();
        assert_abs_diff_eq!(lens.focal_length().get::<centimeter>(), 17.24, epsilon = 0.01);
        let source = centimeter!(-170.0, 27.0);
        for rays_type in [RaysType::Marginal, RaysType::Many] {
            let (rays, image) = trace(rays_type, &lens, source, 0.5);
            assert!(!rays.is_empty());
            assert!(!image.visible());
            let (_, image) = trace(rays_type, &lens, source, 10.0);
            assert!(!image.is_virtual());
            assert!(image.visible());
        }
    }
    #[test]
    fn source_at_optic() {
        let lens = Optic::lens();
        for rays_type in RaysType::iter() {
            let (rays, image) = trace(rays_type, &lens, centimeter!(0.0, 20.0), 10.0);
            assert!(rays.is_empty());
            assert!(!image.visible());
        }
    }
    #[test]
    fn image_becomes_visible() {
        let lens = Optic::lens();
        let source = centimeter!(-170.0, 27.0);
        let (rays, image) = trace(RaysType::Marginal, &lens, source, 0.0);
        assert!(rays.is_empty());
        assert!(!image.visible());
        let (rays, image) = trace(RaysType::Marginal, &lens, source, 0.5);
        assert_eq!(rays.real_segments().len(), 3);
        assert!(!image.visible());
        let (rays, image) = trace(RaysType::Marginal, &lens, source, 10.0);
        assert!(rays.virtual_segments().is_empty());
        assert!(image.visible());
    }
    #[test]
    fn virtual_image() {
        let lens = Optic::lens().with_surface_type(SurfaceType::Concave);
        let (rays, image) = trace(RaysType::Principal, &lens, centimeter!(-170.0, 27.0), 10.0);
        assert!(image.is_virtual());
        assert_eq!(rays.virtual_segments().len(), 3);
        assert!(image.visible());
        for segment in rays.virtual_segments() {
            assert_abs_diff_eq!(
                segment.end_cm().x,
                image.position_cm().x,
                epsilon = IMAGE_HIT_TOLERANCE
            );
        }
    }
    #[test]
    fn many_rays() {
        let mirror = Optic::new(OpticType::Mirror, crate::optic::OpticConfig::mirror()).unwrap();
        let (rays, image) = trace(RaysType::Many, &mirror, centimeter!(-170.0, 27.0), 10.0);
        assert!(rays.real_segments().len() >= 50);
        assert!(image.visible());
    }
    #[test]
    fn deterministic() {
        let lens = Optic::lens();
        let source = centimeter!(-170.0, 27.0);
        for rays_type in RaysType::iter() {
            let (rays1, image1) = trace(rays_type, &lens, source, 3.3);
            let (rays2, image2) = trace(rays_type, &lens, source, 3.3);
            assert_eq!(rays1, rays2);
            assert_eq!(image1, image2);
        }
    }
}
