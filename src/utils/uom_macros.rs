#![warn(missing_docs)]
//! Macros creating unit aware values (or points) from plain numbers.
//!
//! One argument creates a single quantity, two arguments a `Point2` and more arguments a `Vec` of quantities.
/// helper macro to create the units
#[macro_export]
macro_rules! uom_unit_creator {
    ($unit:ident, $unit_type:ident, $val1:expr) => {
        $unit_type::new::<$unit>($val1)
    };
    ($unit:ident, $unit_type:ident, $val1:expr, $val2:expr) => {{
        use nalgebra::Point2;
        Point2::new($unit_type::new::<$unit>($val1), $unit_type::new::<$unit>($val2))
    }};
    ($unit:ident, $unit_type:ident, $( $x:expr ),*) => {
        vec![$( $unit_type::new::<$unit>($x) ),*]
    };
}

/// macro to create a Length in centimeter
///
/// This is the natural unit of the optics model.
#[macro_export]
macro_rules! centimeter {
    ($( $x:expr ),*) => {{
        use uom::si::{f64::Length, length::centimeter};
        $crate::uom_unit_creator![centimeter, Length, $( $x ),*]
    }};
}
/// macro to create an angle in radian
#[macro_export]
macro_rules! radian {
    ($( $x:expr ),*) => {{
        use uom::si::{angle::radian, f64::Angle};
        $crate::uom_unit_creator![radian, Angle, $( $x ),*]
    }};
}
/// macro to create a time in seconds
#[macro_export]
macro_rules! seconds {
    ($( $x:expr ),*) => {{
        use uom::si::{f64::Time, time::second};
        $crate::uom_unit_creator![second, Time, $( $x ),*]
    }};
}
/// macro to create a velocity in centimeter per second
#[macro_export]
macro_rules! centimeter_per_second {
    ($( $x:expr ),*) => {{
        use uom::si::{f64::Velocity, velocity::centimeter_per_second};
        $crate::uom_unit_creator![centimeter_per_second, Velocity, $( $x ),*]
    }};
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use uom::si::{
        angle::degree,
        f64::Length,
        length::{centimeter, meter},
        time::second,
        velocity::meter_per_second,
    };

    #[test]
    fn centimeter_test() {
        let l = centimeter!(3.);
        assert_relative_eq!(l.get::<meter>(), 0.03);
        let p = centimeter!(1., -2.);
        assert_relative_eq!(p.x.get::<centimeter>(), 1.0);
        assert_relative_eq!(p.y.get::<centimeter>(), -2.0);
        let v = centimeter!(1., 2., 3.);
        assert_eq!(v.len(), 3);
        assert_relative_eq!(v[2].get::<centimeter>(), 3.0);
    }
    #[test]
    fn radian_test() {
        let angle = radian!(std::f64::consts::PI);
        assert_relative_eq!(angle.get::<degree>(), 180.0);
    }
    #[test]
    fn time_and_velocity() {
        assert_relative_eq!(seconds!(2.5).get::<second>(), 2.5);
        assert_relative_eq!(centimeter_per_second!(200.).get::<meter_per_second>(), 2.0);
        let travelled: Length = centimeter_per_second!(200.) * seconds!(0.5);
        assert_relative_eq!(travelled.get::<centimeter>(), 100.0);
    }
}
