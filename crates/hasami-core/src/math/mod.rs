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

//! Small linear algebra toolkit used by the renderer contracts and scene nodes.
//!
//! Only what the renderer needs is here: 2/3/4 component vectors, a
//! column-major 4x4 matrix and a linear RGBA color. Angles are in radians.

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

pub use std::f32::consts::{FRAC_PI_2, PI, TAU};

pub mod color;
pub mod matrix;
pub mod vector;

pub use self::color::LinearRgba;
pub use self::matrix::Mat4;
pub use self::vector::{Vec2, Vec3, Vec4};

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use hasami_core::math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use hasami_core::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
