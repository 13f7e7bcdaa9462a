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

//! Conversions from the engine's graphics enums to OpenGL constants.
//!
//! Every source enum is closed, so each mapping is an exhaustive match and a
//! new variant fails to compile here until it is given a native value.

use hasami_core::renderer::{
    AddressMode, BufferKind, BufferUsage, FilterMode, IndexFormat, PolygonMode, PrimitiveType,
    ShaderStage, TextureFormat, VertexFormat,
};

/// Conversion into an OpenGL-side representation.
pub trait IntoGl<T> {
    /// Performs the conversion.
    fn into_gl(self) -> T;
}

/// Component count and component type of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlVertexFormat {
    /// Number of components, 1 to 4.
    pub components: i32,
    /// Component type, e.g. `GL_FLOAT`.
    pub data_type: u32,
}

/// The three enums `glTexImage2D` needs to describe a pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlTextureFormat {
    /// Sized internal format.
    pub internal_format: u32,
    /// Client pixel format.
    pub format: u32,
    /// Client component type.
    pub data_type: u32,
}

impl IntoGl<u32> for PrimitiveType {
    fn into_gl(self) -> u32 {
        match self {
            PrimitiveType::Points => glow::POINTS,
            PrimitiveType::Lines => glow::LINES,
            PrimitiveType::LineStrip => glow::LINE_STRIP,
            PrimitiveType::Triangles => glow::TRIANGLES,
            PrimitiveType::TriangleStrip => glow::TRIANGLE_STRIP,
        }
    }
}

impl IntoGl<u32> for IndexFormat {
    fn into_gl(self) -> u32 {
        match self {
            IndexFormat::Uint16 => glow::UNSIGNED_SHORT,
            IndexFormat::Uint32 => glow::UNSIGNED_INT,
        }
    }
}

impl IntoGl<u32> for PolygonMode {
    fn into_gl(self) -> u32 {
        match self {
            PolygonMode::Point => glow::POINT,
            PolygonMode::Line => glow::LINE,
            PolygonMode::Fill => glow::FILL,
        }
    }
}

impl IntoGl<u32> for ShaderStage {
    fn into_gl(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl IntoGl<u32> for BufferUsage {
    fn into_gl(self) -> u32 {
        match self {
            BufferUsage::Static => glow::STATIC_DRAW,
            BufferUsage::Dynamic => glow::DYNAMIC_DRAW,
            BufferUsage::Stream => glow::STREAM_DRAW,
        }
    }
}

impl IntoGl<u32> for &BufferKind {
    fn into_gl(self) -> u32 {
        match self {
            BufferKind::Vertex(_) => glow::ARRAY_BUFFER,
            BufferKind::Index(_) => glow::ELEMENT_ARRAY_BUFFER,
        }
    }
}

impl IntoGl<GlVertexFormat> for VertexFormat {
    fn into_gl(self) -> GlVertexFormat {
        GlVertexFormat {
            components: self.components() as i32,
            data_type: match self {
                VertexFormat::Float32
                | VertexFormat::Float32x2
                | VertexFormat::Float32x3
                | VertexFormat::Float32x4 => glow::FLOAT,
            },
        }
    }
}

impl IntoGl<GlTextureFormat> for TextureFormat {
    fn into_gl(self) -> GlTextureFormat {
        match self {
            TextureFormat::R8Unorm => GlTextureFormat {
                internal_format: glow::R8,
                format: glow::RED,
                data_type: glow::UNSIGNED_BYTE,
            },
            TextureFormat::Rgba8Unorm => GlTextureFormat {
                internal_format: glow::RGBA8,
                format: glow::RGBA,
                data_type: glow::UNSIGNED_BYTE,
            },
        }
    }
}

impl IntoGl<i32> for FilterMode {
    fn into_gl(self) -> i32 {
        (match self {
            FilterMode::Nearest => glow::NEAREST,
            FilterMode::Linear => glow::LINEAR,
        }) as i32
    }
}

impl IntoGl<i32> for AddressMode {
    fn into_gl(self) -> i32 {
        (match self {
            AddressMode::Repeat => glow::REPEAT,
            AddressMode::ClampToEdge => glow::CLAMP_TO_EDGE,
            AddressMode::MirrorRepeat => glow::MIRRORED_REPEAT,
        }) as i32
    }
}
