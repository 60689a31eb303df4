//! Tracing of a single light ray through an optic.
//!
//! Rays are not refracted by Snell's law: after hitting the optic a ray is redirected so that it passes through
//! the (known) image point, or, for virtual images, so that its backward extension does.
use itertools::Itertools;
use log::debug;
use nalgebra::{Point2, Vector2};

use super::MAX_RAY_LENGTH;
use crate::{
    optic::Optic,
    projection_screen::ProjectionScreen,
    ray::{LineSegment, Ray2},
    rays_type::RaysType,
    surface::Surface,
};

/// Distance (cm) within which a ray is considered to reach the image point.
pub const IMAGE_HIT_TOLERANCE: f64 = 1e-3;

/// The traced (and time truncated) path of a single ray.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightRay {
    real_segments: Vec<LineSegment>,
    virtual_segment: Option<LineSegment>,
    reached_image: bool,
}

/// Untruncated geometry of a traced ray.
struct RayPath {
    /// source, hit points and end point
    vertices: Vec<Point2<f64>>,
    /// direction of the ray after leaving the optic (if it hit the optic)
    exit_direction: Option<Vector2<f64>>,
    /// the outgoing ray points away from the image
    diverges_from_image: bool,
}

impl LightRay {
    /// Trace a ray and truncate it to the given travelled distance (cm).
    #[must_use]
    pub(crate) fn trace(
        initial_ray: &Ray2,
        travelled: f64,
        optic: &Optic,
        rays_type: RaysType,
        image_position: &Point2<f64>,
        screen: Option<&ProjectionScreen>,
    ) -> Self {
        let path = RayPath::new(initial_ray, optic, rays_type, image_position, screen);
        let mut light_ray = Self::default();
        let mut remaining = travelled.max(0.0);
        for (start, end) in path.vertices.iter().tuple_windows() {
            if remaining <= 0.0 {
                break;
            }
            let segment = LineSegment::new(*start, *end);
            let length = segment.length_cm();
            light_ray.real_segments.push(segment.truncated(remaining));
            remaining -= length;
        }
        if path.exit_direction.is_none() {
            return light_ray;
        }
        if path.diverges_from_image {
            // the virtual part grows backwards, from the exit point toward the image, with the light travelling
            // beyond the exit point
            let exit_point = path.exit_point();
            let image_distance = (image_position - exit_point).norm();
            let beyond_exit = travelled - path.length_to_exit();
            if beyond_exit > 0.0 {
                let virtual_segment =
                    LineSegment::new(exit_point, *image_position).truncated(beyond_exit);
                light_ray.reached_image =
                    virtual_segment.length_cm() >= image_distance - IMAGE_HIT_TOLERANCE;
                light_ray.virtual_segment = Some(virtual_segment);
            }
        } else if let Some(distance) = path.length_to(image_position) {
            // real images may also lie inside a thick lens, between front and back surface
            light_ray.reached_image = travelled >= distance - IMAGE_HIT_TOLERANCE;
        }
        light_ray
    }
    /// Returns the real (forward propagating) segments of this ray.
    #[must_use]
    pub fn real_segments(&self) -> &[LineSegment] {
        &self.real_segments
    }
    /// Returns the virtual (backward extrapolated) segment of this ray.
    #[must_use]
    pub const fn virtual_segment(&self) -> Option<&LineSegment> {
        self.virtual_segment.as_ref()
    }
    /// Returns true if this ray (or its virtual extension) reached the image point.
    #[must_use]
    pub const fn reached_image(&self) -> bool {
        self.reached_image
    }
}

impl RayPath {
    fn new(
        initial_ray: &Ray2,
        optic: &Optic,
        rays_type: RaysType,
        image_position: &Point2<f64>,
        screen: Option<&ProjectionScreen>,
    ) -> Self {
        let source = initial_ray.origin();
        let Some(front_hit) = optic.front_shape(rays_type).intersect(initial_ray) else {
            debug!("ray from ({}, {}) misses the optic", source.x, source.y);
            return Self {
                vertices: vec![source, final_point(initial_ray, screen)],
                exit_direction: None,
                diverges_from_image: false,
            };
        };
        let mut direction = image_position - front_hit;
        let mut diverges_from_image = false;
        if optic.sign() * direction.x <= 0.0 {
            direction = -direction;
            diverges_from_image = true;
        }
        // image located exactly on the optic: continue in the incident direction
        let exit_ray = Ray2::new(front_hit, direction)
            .or_else(|| Ray2::new(front_hit, initial_ray.direction()))
            .unwrap_or(*initial_ray);
        let mut vertices = vec![source, front_hit];
        let exit_ray = match optic
            .back_shape(rays_type)
            .and_then(|back| back.intersect(&exit_ray))
        {
            Some(back_hit) => {
                vertices.push(back_hit);
                Ray2::new(back_hit, exit_ray.direction()).unwrap_or(exit_ray)
            }
            None => exit_ray,
        };
        vertices.push(final_point(&exit_ray, screen));
        Self {
            vertices,
            exit_direction: Some(exit_ray.direction()),
            diverges_from_image,
        }
    }
    /// Start of the last (outgoing) segment.
    fn exit_point(&self) -> Point2<f64> {
        self.vertices[self.vertices.len() - 2]
    }
    /// Path length from the source to the given point, if the path passes it behind the first hit of the optic.
    fn length_to(&self, point: &Point2<f64>) -> Option<f64> {
        let mut length = 0.0;
        for (index, (start, end)) in self.vertices.iter().tuple_windows().enumerate() {
            let segment = end - start;
            let segment_length = segment.norm();
            if index > 0 && segment_length > 0.0 {
                let along = (point - start).dot(&segment) / segment_length;
                let off_axis = (point - start).perp(&segment).abs() / segment_length;
                if (-IMAGE_HIT_TOLERANCE..=segment_length + IMAGE_HIT_TOLERANCE).contains(&along)
                    && off_axis <= IMAGE_HIT_TOLERANCE
                {
                    return Some(length + along.max(0.0));
                }
            }
            length += segment_length;
        }
        None
    }
    /// Path length from the source to the exit point.
    fn length_to_exit(&self) -> f64 {
        self.vertices[..self.vertices.len() - 1]
            .iter()
            .tuple_windows()
            .map(|(a, b)| (b - a).norm())
            .sum()
    }
}

/// End point of a ray leaving the optic: the projection screen (if hit) or far away.
fn final_point(ray: &Ray2, screen: Option<&ProjectionScreen>) -> Point2<f64> {
    let t = screen
        .and_then(|s| s.hit_distance(ray))
        .map_or(MAX_RAY_LENGTH, |t| t.min(MAX_RAY_LENGTH));
    ray.at(t)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{centimeter, optic::SurfaceType, optical_image::OpticalImage};
    use approx::assert_abs_diff_eq;

    fn image_of(optic: &Optic, object: Point2<f64>) -> Point2<f64> {
        OpticalImage::from_cm(optic, &object).position_cm()
    }
    #[test]
    fn center_ray_real_image() {
        let lens = Optic::lens();
        let source = Point2::new(-200.0, 20.0);
        let image = image_of(&lens, source);
        let ray = Ray2::towards(source, Point2::new(0.0, 0.0)).unwrap();
        let traced = LightRay::trace(&ray, 1e6, &lens, RaysType::Marginal, &image, None);
        assert!(traced.virtual_segment().is_none());
        // source -> front -> back -> far away
        assert_eq!(traced.real_segments().len(), 3);
        assert!(traced.reached_image());
        let last = traced.real_segments()[2];
        // the outgoing segment passes through the image
        let d = last.end_cm() - last.start_cm();
        let to_image = image - last.start_cm();
        assert_abs_diff_eq!(d.perp(&to_image) / d.norm(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(traced.real_segments()[0].start_cm().x, -200.0);
    }
    #[test]
    fn truncated() {
        let lens = Optic::lens();
        let source = Point2::new(-200.0, 0.0);
        let image = image_of(&lens, source);
        let ray = Ray2::new(source, Vector2::x()).unwrap();
        let traced = LightRay::trace(&ray, 50.0, &lens, RaysType::Marginal, &image, None);
        assert_eq!(traced.real_segments().len(), 1);
        assert_abs_diff_eq!(traced.real_segments()[0].end_cm().x, -150.0);
        assert!(!traced.reached_image());
        let nothing = LightRay::trace(&ray, 0.0, &lens, RaysType::Marginal, &image, None);
        assert!(nothing.real_segments().is_empty());
    }
    #[test]
    fn virtual_image() {
        // object inside the focal length: virtual image on the object side
        let lens = Optic::lens();
        let source = Point2::new(-40.0, 10.0);
        let image = image_of(&lens, source);
        assert!(image.x < source.x);
        let ray = Ray2::towards(source, Point2::new(0.0, 20.0)).unwrap();
        let traced = LightRay::trace(&ray, 1e6, &lens, RaysType::Principal, &image, None);
        // principal rays are redirected at the principal plane only
        assert_eq!(traced.real_segments().len(), 2);
        let last = traced.real_segments()[1];
        assert!(last.end_cm().x > last.start_cm().x);
        let virtual_segment = traced.virtual_segment().unwrap();
        assert_abs_diff_eq!(virtual_segment.end_cm().x, image.x, epsilon = 1e-9);
        assert!(traced.reached_image());
    }
    #[test]
    fn virtual_segment_grows() {
        let lens = Optic::lens().with_surface_type(SurfaceType::Concave);
        let source = Point2::new(-100.0, 0.0);
        let image = image_of(&lens, source);
        let ray = Ray2::new(source, Vector2::new(1.0, 0.1)).unwrap();
        let path_to_plane = (Point2::new(0.0, 10.0) - source).norm();
        let traced = LightRay::trace(
            &ray,
            path_to_plane + 5.0,
            &lens,
            RaysType::Principal,
            &image,
            None,
        );
        let virtual_segment = traced.virtual_segment().unwrap();
        assert_abs_diff_eq!(virtual_segment.length_cm(), 5.0, epsilon = 1e-9);
        assert!(!traced.reached_image());
    }
    #[test]
    fn miss() {
        let lens = Optic::lens();
        let source = Point2::new(-200.0, 100.0);
        let image = image_of(&lens, source);
        let ray = Ray2::new(source, Vector2::x()).unwrap();
        let traced = LightRay::trace(&ray, 1e6, &lens, RaysType::Many, &image, None);
        assert_eq!(traced.real_segments().len(), 1);
        assert_abs_diff_eq!(
            traced.real_segments()[0].length_cm(),
            MAX_RAY_LENGTH,
            epsilon = 1e-6
        );
        assert!(!traced.reached_image());
    }
    #[test]
    fn mirror_reflects() {
        let mirror = Optic::mirror();
        let source = Point2::new(-300.0, 30.0);
        let image = image_of(&mirror, source);
        let ray = Ray2::towards(source, Point2::new(0.0, 0.0)).unwrap();
        let traced = LightRay::trace(&ray, 1e6, &mirror, RaysType::Marginal, &image, None);
        assert_eq!(traced.real_segments().len(), 2);
        let reflected = traced.real_segments()[1];
        assert!(reflected.end_cm().x < reflected.start_cm().x);
        assert!(traced.reached_image());
    }
    #[test]
    fn real_image_inside_thick_lens() {
        let mut lens = Optic::lens();
        lens.set_radius_of_curvature(centimeter!(30.0)).unwrap();
        lens.set_index_of_refraction(1.87).unwrap();
        let source = Point2::new(-170.0, 27.0);
        let image = image_of(&lens, source);
        let (min, max) = lens.shapes().bounds();
        assert!(min.x < image.x && image.x < max.x);
        let ray = Ray2::towards(source, Point2::new(0.0, 0.0)).unwrap();
        let traced = LightRay::trace(&ray, 1e6, &lens, RaysType::Marginal, &image, None);
        assert!(traced.reached_image());
        // light stopped inside the lens before passing the image
        let to_front = traced.real_segments()[0].length_cm();
        let short = LightRay::trace(&ray, to_front + 1.0, &lens, RaysType::Marginal, &image, None);
        assert!(!short.reached_image());
    }
    #[test]
    fn stops_at_screen() {
        let lens = Optic::lens();
        let source = Point2::new(-200.0, 0.0);
        let image = image_of(&lens, source);
        let screen = ProjectionScreen::new(centimeter!(100.0, 0.0)).unwrap();
        let ray = Ray2::new(source, Vector2::x()).unwrap();
        let traced = LightRay::trace(&ray, 1e6, &lens, RaysType::Marginal, &image, Some(&screen));
        let last = traced.real_segments().last().unwrap();
        assert_abs_diff_eq!(last.end_cm().x, 100.0, epsilon = 1e-9);
        // image at 133.3 cm lies behind the screen
        assert!(!traced.reached_image());
    }
}
