use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;

/// Heading angle of a velocity vector in radians.
///
/// `atan` only gives angles in quadrants I and IV, so directions in
/// quadrants II and III are recovered by adding π when the x component is
/// negative. A zero x component maps straight to ±π/2 by the sign of the
/// y component.
pub fn velocity_angle(velocity: Vec2) -> f32 {
    if velocity.x == 0. {
        return if velocity.y > 0. { PI / 2. } else { -PI / 2. };
    }

    let mut angle = (velocity.y / velocity.x).atan();

    if velocity.x < 0. {
        angle += PI;
    }

    angle
}

/// Uniformly random unit vector, re-sampled on the (rare) degenerate draw
/// so the result can always be normalized.
pub fn random_unit_vec(rng: &mut impl Rng) -> Vec2 {
    loop {
        let v = Vec2::new(rng.gen_range(-1f32..1.), rng.gen_range(-1f32..1.));

        if v.length_squared() > f32::EPSILON {
            return v.normalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec2;
    use std::f32::consts::PI;

    use super::velocity_angle;

    macro_rules! assert_eqf32 {
        ($x:expr, $y:expr) => {
            assert_relative_eq!($x, $y, epsilon = 1e-3_f32)
        };
    }

    #[test]
    fn angle_axis_aligned() {
        assert_eqf32!(velocity_angle(Vec2::new(1., 0.)), 0.);
        assert_eqf32!(velocity_angle(Vec2::new(-1., 0.)), PI);
    }

    #[test]
    fn angle_zero_x_component() {
        // the atan branch is skipped entirely when x is exactly zero
        assert_eqf32!(velocity_angle(Vec2::new(0., 3.)), PI / 2.);
        assert_eqf32!(velocity_angle(Vec2::new(0., -0.2)), -PI / 2.);
    }

    #[test]
    fn angle_quadrants() {
        assert_eqf32!(velocity_angle(Vec2::new(1., 1.)), PI / 4.);
        assert_eqf32!(velocity_angle(Vec2::new(-1., 1.)), 3. * PI / 4.);
        assert_eqf32!(velocity_angle(Vec2::new(-1., -1.)), 5. * PI / 4.);
        assert_eqf32!(velocity_angle(Vec2::new(1., -1.)), -PI / 4.);
    }

    #[test]
    fn random_direction_is_unit() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let v = super::random_unit_vec(&mut rng);
            assert_eqf32!(v.length(), 1.);
        }
    }
}
