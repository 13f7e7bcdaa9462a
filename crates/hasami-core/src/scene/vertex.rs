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

use crate::math::{Vec2, Vec3};
use crate::renderer::api::{VertexFormat, VertexLayout};
use bytemuck::{Pod, Zeroable};

/// An interleaved mesh vertex: position, normal and texture coordinate.
///
/// Matches [`Vertex::layout`]: location 0 is the position, 1 the normal and
/// 2 the UV.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    /// Position in world space.
    pub position: Vec3,
    /// Unit surface normal.
    pub normal: Vec3,
    /// Texture coordinate.
    pub uv: Vec2,
}

impl Vertex {
    /// Creates a new vertex.
    pub const fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// The attribute layout of a tightly packed `Vertex` buffer.
    pub fn layout() -> VertexLayout {
        VertexLayout::packed(&[
            VertexFormat::Float32x3,
            VertexFormat::Float32x3,
            VertexFormat::Float32x2,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_struct() {
        let layout = Vertex::layout();
        assert_eq!(layout.stride as usize, std::mem::size_of::<Vertex>());
        assert_eq!(
            layout.attributes[1].offset as usize,
            std::mem::offset_of!(Vertex, normal)
        );
        assert_eq!(
            layout.attributes[2].offset as usize,
            std::mem::offset_of!(Vertex, uv)
        );
    }
}
