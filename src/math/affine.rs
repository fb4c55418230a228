//! Matrix composition conventions.
//!
//! Plain helpers (`translate`) post-multiply: `m · T`, so the new transform
//! is applied to points *before* `m`. The `_local` variants pre-multiply:
//! `T · m`, applying the new transform *after* `m`, i.e. in the space `m`
//! maps into.

use glam::{Mat4, Vec3, Vec4};

/// `m · T(t)`.
#[inline]
#[must_use]
pub fn translate(m: Mat4, t: Vec3) -> Mat4 {
    m * Mat4::from_translation(t)
}

/// `T(t) · m`.
#[inline]
#[must_use]
pub fn translate_local(m: Mat4, t: Vec3) -> Mat4 {
    Mat4::from_translation(t) * m
}

/// `Rz(angle) · m`, angle in radians.
#[inline]
#[must_use]
pub fn rotate_local_z(m: Mat4, angle: f32) -> Mat4 {
    Mat4::from_rotation_z(angle) * m
}

/// Uniform scale by `factor` about `origin`, applied after `m`:
/// `T(origin) · S(factor) · T(-origin) · m`.
#[inline]
#[must_use]
pub fn scale_around_local(m: Mat4, factor: f32, origin: Vec3) -> Mat4 {
    Mat4::from_translation(origin)
        * Mat4::from_scale(Vec3::splat(factor))
        * Mat4::from_translation(-origin)
        * m
}

/// Replace the translation column of `m`, keeping the rest intact.
#[inline]
#[must_use]
pub fn set_translation(m: Mat4, t: Vec3) -> Mat4 {
    let mut out = m;
    out.w_axis = Vec4::new(t.x, t.y, t.z, m.w_axis.w);
    out
}

/// 2D orthographic projection with the OpenGL depth convention and
/// `near = -1`, `far = +1`. The z axis is flipped (`m22 = -1`), so the
/// result has a negative determinant.
#[inline]
#[must_use]
pub fn ortho_2d(left: f32, right: f32, bottom: f32, top: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(left, right, bottom, top, -1.0, 1.0)
}

/// Normalized direction of the adjugate's first column of the upper-left
/// 3×3, i.e. `row1 × row2`.
///
/// For a matrix with positive determinant this is the world direction that
/// `m` maps onto +X. A negative determinant (any view derived from
/// [`ortho_2d`]) flips it, which callers undo by negating.
#[inline]
#[must_use]
pub fn positive_x(m: &Mat4) -> Vec3 {
    let row1 = m.row(1).truncate();
    let row2 = m.row(2).truncate();
    row1.cross(row2).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn translate_and_local_differ_under_scale() {
        let m = Mat4::from_scale(Vec3::splat(2.0));
        let post = translate(m, Vec3::X);
        let pre = translate_local(m, Vec3::X);
        assert!(approx(
            post.transform_point3(Vec3::ZERO),
            Vec3::new(2.0, 0.0, 0.0)
        ));
        assert!(approx(pre.transform_point3(Vec3::ZERO), Vec3::X));
    }

    #[test]
    fn scale_around_local_keeps_origin_fixed() {
        let origin = Vec3::new(3.0, -1.0, 0.0);
        let m = scale_around_local(Mat4::IDENTITY, 4.0, origin);
        assert!(approx(m.transform_point3(origin), origin));
        assert!(approx(
            m.transform_point3(origin + Vec3::X),
            origin + Vec3::new(4.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn rotate_local_z_quarter_turn() {
        let m = rotate_local_z(Mat4::IDENTITY, FRAC_PI_2);
        assert!(approx(m.transform_point3(Vec3::X), Vec3::Y));
    }

    #[test]
    fn set_translation_preserves_linear_part() {
        let m = Mat4::from_scale(Vec3::splat(3.0))
            * Mat4::from_translation(Vec3::ONE);
        let out = set_translation(m, Vec3::new(-5.0, 2.0, 0.0));
        assert_eq!(out.x_axis, m.x_axis);
        assert!(approx(
            out.transform_point3(Vec3::ZERO),
            Vec3::new(-5.0, 2.0, 0.0)
        ));
    }

    #[test]
    fn ortho_2d_maps_extents_to_unit_square() {
        let m = ortho_2d(-2.0, 2.0, -1.0, 1.0);
        let corner = m.transform_point3(Vec3::new(2.0, 1.0, 0.0));
        assert!(approx(corner, Vec3::new(1.0, 1.0, 0.0)));
        assert!(m.determinant() < 0.0);
    }

    #[test]
    fn positive_x_flips_with_negative_determinant() {
        assert!(approx(positive_x(&Mat4::IDENTITY), Vec3::X));
        let flipped = ortho_2d(-1.0, 1.0, -1.0, 1.0);
        assert!(approx(positive_x(&flipped), -Vec3::X));
    }

    #[test]
    fn positive_x_of_rotated_view() {
        let angle = 0.7_f32;
        let m = Mat4::from_rotation_z(angle);
        let expected = Vec3::new(angle.cos(), -angle.sin(), 0.0);
        assert!(approx(positive_x(&m), expected));
    }
}
