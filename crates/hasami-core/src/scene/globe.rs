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

//! A sphere mesh built by recursive subdivision of a seed polyhedron.
//!
//! Each seed face is split into four at its edge midpoints, with every new
//! midpoint pushed back out onto the sphere, until the configured depth is
//! reached. Terminal triangles emit three vertices each with no sharing, so a
//! globe holds `faces * 4^depth * 3` vertices.

use crate::math::{Mat4, Vec2, Vec3, PI, TAU};
use crate::renderer::api::{BufferDescriptor, BufferKind, BufferUsage, PrimitiveType};
use crate::renderer::{Buffer, Renderer, ResourceError, Shader};
use crate::scene::{ModelNode, Vertex};
use serde::{Deserialize, Serialize};

/// The coarse polyhedron a globe is subdivided from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GlobeSeed {
    /// 8 faces. Coarser, with visible poles at low depths.
    Octahedron,
    /// 20 faces. Gives the most uniform triangulation.
    #[default]
    Icosahedron,
}

impl GlobeSeed {
    /// Number of triangles in the seed shape.
    pub fn face_count(self) -> usize {
        match self {
            GlobeSeed::Octahedron => OCTAHEDRON_FACES.len(),
            GlobeSeed::Icosahedron => ICOSAHEDRON_FACES.len(),
        }
    }

    /// Unit-sphere corners and face indices of the seed shape.
    fn polyhedron(self) -> (Vec<Vec3>, &'static [[usize; 3]]) {
        match self {
            GlobeSeed::Octahedron => (
                vec![Vec3::X, -Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, -Vec3::Z],
                &OCTAHEDRON_FACES[..],
            ),
            GlobeSeed::Icosahedron => {
                let phi = (1.0 + 5.0_f32.sqrt()) * 0.5;
                let corners = [
                    Vec3::new(-1.0, phi, 0.0),
                    Vec3::new(1.0, phi, 0.0),
                    Vec3::new(-1.0, -phi, 0.0),
                    Vec3::new(1.0, -phi, 0.0),
                    Vec3::new(0.0, -1.0, phi),
                    Vec3::new(0.0, 1.0, phi),
                    Vec3::new(0.0, -1.0, -phi),
                    Vec3::new(0.0, 1.0, -phi),
                    Vec3::new(phi, 0.0, -1.0),
                    Vec3::new(phi, 0.0, 1.0),
                    Vec3::new(-phi, 0.0, -1.0),
                    Vec3::new(-phi, 0.0, 1.0),
                ];
                (
                    corners.iter().map(Vec3::normalize).collect(),
                    &ICOSAHEDRON_FACES[..],
                )
            }
        }
    }
}

const OCTAHEDRON_FACES: [[usize; 3]; 8] = [
    [0, 2, 4],
    [2, 1, 4],
    [1, 3, 4],
    [3, 0, 4],
    [2, 0, 5],
    [1, 2, 5],
    [3, 1, 5],
    [0, 3, 5],
];

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Tunable parameters of a globe mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeSettings {
    /// Distance of every vertex from the center.
    pub radius: f32,
    /// Recursion depth. Each level multiplies the triangle count by four.
    /// Depths above [`GlobeSettings::MAX_SUBDIVISIONS`] are clamped.
    pub subdivisions: u32,
    /// The seed polyhedron.
    pub seed: GlobeSeed,
}

impl Default for GlobeSettings {
    fn default() -> Self {
        Self {
            radius: 1.0,
            subdivisions: 3,
            seed: GlobeSeed::Icosahedron,
        }
    }
}

impl GlobeSettings {
    /// Deepest subdivision generated. An icosahedron at this depth already
    /// holds close to a million vertices.
    pub const MAX_SUBDIVISIONS: u32 = 7;

    /// The recursion depth actually generated.
    pub fn depth(&self) -> u32 {
        self.subdivisions.min(Self::MAX_SUBDIVISIONS)
    }

    /// Number of vertices a globe generated with these settings holds.
    pub fn vertex_count(&self) -> usize {
        self.seed.face_count() * 4usize.pow(self.depth()) * 3
    }
}

/// A scene node holding a procedurally generated sphere.
///
/// The vertex list is owned exclusively by the node and is rebuilt wholesale
/// by [`GlobeNode::generate`]; it is never patched in place. The GPU copy is
/// created lazily on the first [`ModelNode::draw`] after each generation.
#[derive(Debug, Default)]
pub struct GlobeNode {
    settings: GlobeSettings,
    center: Vec3,
    vertices: Vec<Vertex>,
    buffer: Option<Box<dyn Buffer>>,
}

impl GlobeNode {
    /// Creates an empty globe node. Call [`GlobeNode::generate`] to build the mesh.
    pub fn new(settings: GlobeSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Creates a globe node and generates its mesh around `center`.
    pub fn with_center(settings: GlobeSettings, center: Vec3) -> Self {
        let mut node = Self::new(settings);
        node.generate(center);
        node
    }

    /// The settings the mesh is generated with.
    pub fn settings(&self) -> &GlobeSettings {
        &self.settings
    }

    /// Replaces the settings and regenerates around the current center.
    pub fn set_settings(&mut self, settings: GlobeSettings) {
        self.settings = settings;
        self.generate(self.center);
    }

    /// The center the mesh was last generated around.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// The generated vertices, three per triangle.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Discards the current mesh (and its GPU copy) and builds a new one around `center`.
    pub fn generate(&mut self, center: Vec3) {
        self.center = center;
        self.vertices.clear();
        self.buffer = None;
        self.generate_globe(center);
        log::debug!(
            "Generated globe: {} vertices ({:?}, depth {})",
            self.vertices.len(),
            self.settings.seed,
            self.settings.depth()
        );
    }

    fn generate_globe(&mut self, center: Vec3) {
        let size = self.settings.radius;
        let depth = self.settings.depth();
        if depth < self.settings.subdivisions {
            log::warn!(
                "Globe depth {} exceeds the maximum of {}, clamping.",
                self.settings.subdivisions,
                GlobeSettings::MAX_SUBDIVISIONS
            );
        }
        let (corners, faces) = self.settings.seed.polyhedron();

        self.vertices.reserve(self.settings.vertex_count());
        for &[i, j, k] in faces {
            let a = center + corners[i] * size;
            let mut b = center + corners[j] * size;
            let mut c = center + corners[k] * size;

            // Seed faces are wound counter-clockwise seen from outside.
            let outward = (a + b + c) * (1.0 / 3.0) - center;
            if (b - a).cross(c - a).dot(outward) < 0.0 {
                std::mem::swap(&mut b, &mut c);
            }

            self.subdivide(a, b, c, center, size, depth);
        }
    }

    /// Splits `(a, b, c)` into four triangles at its re-projected edge
    /// midpoints, recursing `depth` more times, and emits the terminal ones.
    fn subdivide(&mut self, a: Vec3, b: Vec3, c: Vec3, center: Vec3, size: f32, depth: u32) {
        if depth == 0 {
            for p in [a, b, c] {
                self.vertices.push(surface_vertex(p, center));
            }
            return;
        }

        let project = |p: Vec3| center + (p - center).normalize() * size;
        let ab = project(Vec3::midpoint(a, b));
        let bc = project(Vec3::midpoint(b, c));
        let ca = project(Vec3::midpoint(c, a));

        self.subdivide(a, ab, ca, center, size, depth - 1);
        self.subdivide(ab, b, bc, center, size, depth - 1);
        self.subdivide(ca, bc, c, center, size, depth - 1);
        self.subdivide(ab, bc, ca, center, size, depth - 1);
    }

    fn upload(&mut self, renderer: &dyn Renderer) -> Result<(), ResourceError> {
        let descriptor = BufferDescriptor {
            label: Some("globe_vertices"),
            kind: BufferKind::Vertex(Vertex::layout()),
            usage: BufferUsage::Static,
        };
        let mut buffer = renderer.create_buffer();
        buffer.upload(&descriptor, bytemuck::cast_slice(&self.vertices))?;
        self.buffer = Some(buffer);
        Ok(())
    }
}

/// Builds the vertex for a point on the sphere: outward normal and
/// equirectangular UV.
fn surface_vertex(position: Vec3, center: Vec3) -> Vertex {
    let normal = (position - center).normalize();
    let u = 0.5 + normal.z.atan2(normal.x) / TAU;
    let v = 0.5 - normal.y.clamp(-1.0, 1.0).asin() / PI;
    Vertex::new(position, normal, Vec2::new(u, v))
}

impl ModelNode for GlobeNode {
    fn draw(
        &mut self,
        renderer: &dyn Renderer,
        shader: &dyn Shader,
        projection: &Mat4,
        view: &Mat4,
    ) -> Result<(), ResourceError> {
        if self.vertices.is_empty() {
            return Ok(());
        }
        if self.buffer.is_none() {
            self.upload(renderer)?;
        }
        let Some(buffer) = self.buffer.as_ref() else {
            return Ok(());
        };

        shader.bind();
        shader.set_mat4("u_projection", projection);
        shader.set_mat4("u_view", view);
        shader.set_mat4("u_model", &Mat4::IDENTITY);
        buffer.bind();
        renderer.draw_arrays(PrimitiveType::Triangles, 0, self.vertices.len() as u32);
        Ok(())
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
