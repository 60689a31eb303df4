#![warn(missing_docs)]
//! The spot illuminated by a light source on the projection screen.
//!
//! The rays through the top and bottom points of the optic are extended through the image point onto the screen
//! plane. Their intersections define the vertical extent of the spot. The spot is an ellipse clipped against the
//! screen outline and dims with growing diameter.
use nalgebra::Point2;
use uom::si::f64::Length;

use crate::{
    centimeter,
    optic::Optic,
    optical_image::OpticalImage,
    projection_screen::ProjectionScreen,
    shape::Polygon,
    utils::{cm_to_point, point_to_cm},
};

/// Spots with a diameter (cm) up to this value are drawn with full intensity.
pub const FULL_INTENSITY_DIAMETER: f64 = 7.0;
/// Ratio used if the image lies exactly above or below a point on the optic.
const VERTICAL_LINE_RATIO: f64 = 1e6;

/// Intensity of a light spot with the given diameter (cm).
///
/// `diameter_factor` is the ratio of the optic's diameter and its maximum diameter: a larger optic collects more
/// light and produces a brighter spot. The result is in the range `[0.0, 1.0]`, equals 1.0 up to
/// [`FULL_INTENSITY_DIAMETER`] and decreases with increasing diameter.
#[must_use]
pub fn intensity_for(diameter: f64, diameter_factor: f64) -> f64 {
    debug_assert!(
        (0.0..=1.0).contains(&diameter_factor),
        "diameter factor must be in [0, 1]"
    );
    if diameter <= FULL_INTENSITY_DIAMETER {
        return 1.0;
    }
    (FULL_INTENSITY_DIAMETER / diameter)
        .powf(2.0 - diameter_factor)
        .clamp(0.0, 1.0)
}

/// The illuminated area on a [`ProjectionScreen`].
#[derive(Debug, Clone, PartialEq)]
pub struct LightSpot {
    shape: Polygon,
    position: Point2<f64>,
    diameter: f64,
    intensity: f64,
}
impl LightSpot {
    /// Compute the light spot of a light source at `light_position` imaged to `image`.
    #[must_use]
    pub fn new(
        optic: &Optic,
        screen: &ProjectionScreen,
        light_position: &Point2<Length>,
        image: &OpticalImage,
    ) -> Self {
        let light_position = point_to_cm(light_position);
        let image_position = image.position_cm();
        let screen_x = screen.position_cm().x;
        let on_screen = |optic_point: Point2<f64>| {
            let dx = image_position.x - optic_point.x;
            let ratio = if dx == 0.0 {
                VERTICAL_LINE_RATIO
            } else {
                (screen_x - optic_point.x) / dx
            };
            Point2::new(
                screen_x,
                (image_position.y - optic_point.y).mul_add(ratio, optic_point.y),
            )
        };
        let top = on_screen(optic.extremum_point(&light_position, &image_position, true));
        let bottom = on_screen(optic.extremum_point(&light_position, &image_position, false));
        let position = nalgebra::center(&top, &bottom);
        let diameter = (top.y - bottom.y).abs();
        let receives_light = optic.sign() * (screen_x - optic.position_cm().x) > 0.0;
        let shape = if receives_light && diameter.is_finite() {
            Polygon::ellipse(position, diameter / 8.0, diameter / 2.0).clip_convex(&screen.outline())
        } else {
            Polygon::default()
        };
        let intensity = if shape.is_empty() {
            0.0
        } else {
            intensity_for(diameter, optic.diameter_factor())
        };
        Self {
            shape,
            position,
            diameter,
            intensity,
        }
    }
    /// Returns the shape of this [`LightSpot`] (already clipped by the screen).
    #[must_use]
    pub const fn shape(&self) -> &Polygon {
        &self.shape
    }
    /// Returns the center of this [`LightSpot`] on the screen plane.
    #[must_use]
    pub fn position(&self) -> Point2<Length> {
        cm_to_point(&self.position)
    }
    /// Returns the vertical extent of this [`LightSpot`].
    #[must_use]
    pub fn diameter(&self) -> Length {
        centimeter!(self.diameter)
    }
    /// Returns the intensity of this [`LightSpot`] in the range `[0.0, 1.0]`.
    #[must_use]
    pub const fn intensity(&self) -> f64 {
        self.intensity
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use uom::si::length::centimeter;

    fn spot(optic: &Optic, screen_position: Point2<Length>, light: Point2<Length>) -> LightSpot {
        let screen = ProjectionScreen::new(screen_position).unwrap();
        let image = OpticalImage::new(optic, &light);
        LightSpot::new(optic, &screen, &light, &image)
    }
    #[test]
    fn intensity() {
        assert_abs_diff_eq!(intensity_for(0.0, 0.5), 1.0);
        assert_abs_diff_eq!(intensity_for(FULL_INTENSITY_DIAMETER, 0.5), 1.0);
        assert_abs_diff_eq!(intensity_for(14.0, 1.0), 0.5);
        assert_abs_diff_eq!(intensity_for(14.0, 0.0), 0.25);
        let mut previous = 1.0;
        for d in (0..400).map(|i| f64::from(i) * 0.5) {
            let intensity = intensity_for(d, 0.6);
            assert!(intensity <= previous);
            assert!((0.0..=1.0).contains(&intensity));
            previous = intensity;
        }
    }
    #[test]
    fn real_image_behind_screen() {
        let lens = Optic::lens();
        let s = spot(&lens, centimeter!(200.0, 0.0), centimeter!(-170.0, 27.0));
        let image = OpticalImage::new(&lens, &centimeter!(-170.0, 27.0)).position_cm();
        let ratio = 200.0 / image.x;
        let top = (image.y - 40.0).mul_add(ratio, 40.0);
        let bottom = (image.y + 40.0).mul_add(ratio, -40.0);
        assert_abs_diff_eq!(s.diameter().get::<centimeter>(), (top - bottom).abs(), epsilon = 1e-9);
        assert_abs_diff_eq!(s.position().x.get::<centimeter>(), 200.0);
        assert_abs_diff_eq!(
            s.position().y.get::<centimeter>(),
            0.5 * (top + bottom),
            epsilon = 1e-9
        );
        assert!(!s.shape().is_empty());
        assert_abs_diff_eq!(
            s.intensity(),
            intensity_for(s.diameter().get::<centimeter>(), lens.diameter_factor())
        );
        assert!(s.intensity() > 0.0 && s.intensity() < 1.0);
    }
    #[test]
    fn screen_at_image() {
        let lens = Optic::lens();
        let light = centimeter!(-170.0, 27.0);
        let image = OpticalImage::new(&lens, &light).position();
        let s = spot(&lens, centimeter!(image.x.get::<centimeter>(), 0.0), light);
        assert!(s.diameter().get::<centimeter>() < 1e-9);
        assert!(s.shape().is_empty());
        assert_abs_diff_eq!(s.intensity(), 0.0);
    }
    #[test]
    fn small_spot_full_intensity() {
        let lens = Optic::lens();
        let light = centimeter!(-170.0, 0.0);
        let image_x = OpticalImage::new(&lens, &light).position().x.get::<centimeter>();
        // 80 cm optic: 1 cm off the image plane gives a spot of 80 / image_x cm
        let s = spot(&lens, centimeter!(image_x + 1.0, 0.0), light);
        assert!(s.diameter().get::<centimeter>() < FULL_INTENSITY_DIAMETER);
        assert_abs_diff_eq!(s.intensity(), 1.0);
    }
    #[test]
    fn spot_off_screen() {
        let lens = Optic::lens();
        let s = spot(&lens, centimeter!(200.0, 300.0), centimeter!(-170.0, 27.0));
        assert!(s.shape().is_empty());
        assert_abs_diff_eq!(s.intensity(), 0.0);
    }
    #[test]
    fn screen_in_front_of_lens() {
        let lens = Optic::lens();
        let s = spot(&lens, centimeter!(-50.0, 0.0), centimeter!(-170.0, 27.0));
        assert!(s.shape().is_empty());
        assert_abs_diff_eq!(s.intensity(), 0.0);
    }
    #[test]
    fn diameter_factor_reduces_dimming() {
        let small = Optic::lens();
        let mut large = Optic::lens();
        large.set_diameter(centimeter!(120.0)).unwrap();
        let light = centimeter!(-170.0, 0.0);
        let s_small = spot(&small, centimeter!(250.0, 0.0), light);
        let s_large = spot(&large, centimeter!(250.0, 0.0), light);
        // both spots are larger than the full intensity diameter
        assert!(s_small.diameter().get::<centimeter>() > FULL_INTENSITY_DIAMETER);
        assert!(s_large.intensity() < 1.0);
        // the larger spot of the larger optic is dimmed less than the diameter ratio alone would suggest
        let d_small = s_small.diameter().get::<centimeter>();
        let d_large = s_large.diameter().get::<centimeter>();
        assert!(s_large.intensity() > intensity_for(d_large, small.diameter_factor()));
        assert!(s_small.intensity() <= intensity_for(d_small, small.diameter_factor()) + 1e-12);
    }
}
