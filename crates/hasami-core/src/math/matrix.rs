// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Column-major 4x4 matrix for model, view and projection transforms.

use super::vector::{Vec3, Vec4};
use super::EPSILON;
use std::ops::Mul;

/// A 4x4 column-major matrix.
///
/// The memory layout matches what OpenGL expects for `uniformMatrix4fv` with
/// `transpose = false`, so [`Mat4::to_cols_array`] can be uploaded as is.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Returns a row of the matrix as a `Vec4`.
    #[inline]
    pub fn get_row(&self, index: usize) -> Vec4 {
        match index {
            0 => Vec4::new(self.cols[0].x, self.cols[1].x, self.cols[2].x, self.cols[3].x),
            1 => Vec4::new(self.cols[0].y, self.cols[1].y, self.cols[2].y, self.cols[3].y),
            2 => Vec4::new(self.cols[0].z, self.cols[1].z, self.cols[2].z, self.cols[3].z),
            3 => Vec4::new(self.cols[0].w, self.cols[1].w, self.cols[2].w, self.cols[3].w),
            _ => panic!("Mat4 row index out of bounds: {index}"),
        }
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::from_vec3(v, 1.0))
    }

    /// Creates a non-uniform scale matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(scale.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z, 0.0),
            Vec4::W,
        )
    }

    /// Creates a right-handed perspective projection with the OpenGL clip
    /// depth range of [-1, 1].
    ///
    /// * `fov_y_radians`: Vertical field of view in radians.
    /// * `aspect_ratio`: Width divided by height of the viewport.
    /// * `z_near`: Distance to the near clipping plane (must be positive).
    /// * `z_far`: Distance to the far clipping plane (must be > `z_near`).
    #[inline]
    pub fn perspective_rh_gl(fov_y_radians: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        assert!(z_near > 0.0 && z_far > z_near);
        let f = 1.0 / (fov_y_radians / 2.0).tan();
        let range_inv = 1.0 / (z_near - z_far);

        Self::from_cols(
            Vec4::new(f / aspect_ratio, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, (z_far + z_near) * range_inv, -1.0),
            Vec4::new(0.0, 0.0, 2.0 * z_far * z_near * range_inv, 0.0),
        )
    }

    /// Creates a right-handed view matrix for a camera looking from `eye` towards `target`.
    ///
    /// Returns `None` if `eye` and `target` coincide or `up` is parallel to
    /// the view direction.
    #[inline]
    pub fn look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Option<Self> {
        let forward = target - eye;
        if forward.length_squared() < EPSILON * EPSILON {
            return None;
        }
        let f = forward.normalize();
        let s = f.cross(up);
        if s.length_squared() < EPSILON * EPSILON {
            return None;
        }
        let s = s.normalize();
        let u = s.cross(f);

        Some(Self::from_cols(
            Vec4::new(s.x, u.x, -f.x, 0.0),
            Vec4::new(s.y, u.y, -f.y, 0.0),
            Vec4::new(s.z, u.z, -f.z, 0.0),
            Vec4::new(-eye.dot(s), -eye.dot(u), eye.dot(f), 1.0),
        ))
    }

    /// Transforms a point (w = 1), performing the perspective divide.
    #[inline]
    pub fn transform_point3(&self, p: Vec3) -> Vec3 {
        let v = *self * Vec4::from_vec3(p, 1.0);
        if v.w.abs() > EPSILON {
            v.truncate() / v.w
        } else {
            v.truncate()
        }
    }

    /// Flattens the matrix into 16 floats, column after column.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(*self)
    }
}

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut cols = [Vec4::ZERO; 4];
        for (target, col) in cols.iter_mut().zip(rhs.cols) {
            *target = Vec4::new(
                self.get_row(0).dot(col),
                self.get_row(1).dot(col),
                self.get_row(2).dot(col),
                self.get_row(3).dot(col),
            );
        }
        Mat4 { cols }
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z + self.cols[3] * rhs.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, FRAC_PI_2};

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_identity_is_neutral() {
        let t = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Mat4::IDENTITY * t, t);
        assert_eq!(t * Mat4::IDENTITY, t);
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn test_translation_then_scale() {
        let m = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)) * Mat4::from_scale(Vec3::new(2.0, 2.0, 2.0));
        let p = m.transform_point3(Vec3::new(1.0, 1.0, 1.0));
        assert!(vec3_approx_eq(p, Vec3::new(3.0, 2.0, 2.0)));
    }

    #[test]
    fn test_to_cols_array_is_column_major() {
        let m = Mat4::from_translation(Vec3::new(5.0, 6.0, 7.0));
        let a = m.to_cols_array();
        assert_eq!(&a[12..16], &[5.0, 6.0, 7.0, 1.0]);
        assert_eq!(&a[0..4], &[1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_look_at_moves_target_onto_negative_z() {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y).unwrap();
        let p = view.transform_point3(Vec3::ZERO);
        assert!(vec3_approx_eq(p, Vec3::new(0.0, 0.0, -5.0)));
        assert!(Mat4::look_at_rh(Vec3::ZERO, Vec3::ZERO, Vec3::Y).is_none());
        assert!(Mat4::look_at_rh(Vec3::ZERO, Vec3::Y, Vec3::Y).is_none());
    }

    #[test]
    fn test_perspective_maps_near_and_far_to_gl_depth_range() {
        let proj = Mat4::perspective_rh_gl(FRAC_PI_2, 1.0, 1.0, 10.0);
        let near = proj.transform_point3(Vec3::new(0.0, 0.0, -1.0));
        let far = proj.transform_point3(Vec3::new(0.0, 0.0, -10.0));
        assert!(approx_eq(near.z, -1.0));
        assert!(approx_eq(far.z, 1.0));
    }
}
