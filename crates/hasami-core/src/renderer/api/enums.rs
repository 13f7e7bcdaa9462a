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

//! Generic rendering enums.
//!
//! Every enum here is a closed set. Backends translate them with an exhaustive
//! `match`, so a value the backend cannot express never type-checks. Raw
//! discriminants coming from outside the type system go through `from_raw`,
//! which rejects unknown values instead of guessing.

use serde::{Deserialize, Serialize};

/// How vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// Each vertex is a point.
    Points,
    /// Every two vertices form an independent line.
    Lines,
    /// Each vertex after the first extends a connected line.
    LineStrip,
    /// Every three vertices form an independent triangle.
    Triangles,
    /// Each vertex after the second forms a triangle with the previous two.
    TriangleStrip,
}

impl PrimitiveType {
    /// All supported primitive types.
    pub const ALL: [PrimitiveType; 5] = [
        PrimitiveType::Points,
        PrimitiveType::Lines,
        PrimitiveType::LineStrip,
        PrimitiveType::Triangles,
        PrimitiveType::TriangleStrip,
    ];

    /// Decodes a raw discriminant (the position in [`PrimitiveType::ALL`]).
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }
}

/// Specifies the data type of indices in an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexFormat {
    /// Indices are 16-bit unsigned integers.
    Uint16,
    /// Indices are 32-bit unsigned integers.
    Uint32,
}

impl IndexFormat {
    /// All supported index formats.
    pub const ALL: [IndexFormat; 2] = [IndexFormat::Uint16, IndexFormat::Uint32];

    /// Size in bytes of a single index.
    pub const fn size(self) -> u32 {
        match self {
            IndexFormat::Uint16 => 2,
            IndexFormat::Uint32 => 4,
        }
    }

    /// Byte offset of the index at position `start`, or `None` if it does
    /// not fit in a `u32`.
    pub const fn byte_offset(self, start: u32) -> Option<u32> {
        start.checked_mul(self.size())
    }

    /// Decodes a raw discriminant (the position in [`IndexFormat::ALL`]).
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }
}

/// A backend-agnostic representation of a graphics API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphicsBackendType {
    /// Desktop OpenGL.
    OpenGL,
    /// OpenGL ES / WebGL.
    OpenGLEs,
    /// An unknown or unsupported backend.
    #[default]
    Unknown,
}

/// Identity of the driver behind a renderer, as reported at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RendererAdapterInfo {
    /// The renderer string (usually the GPU model).
    pub name: String,
    /// The vendor string.
    pub vendor: String,
    /// The API version string.
    pub version: String,
    /// The graphics API in use.
    pub backend_type: GraphicsBackendType,
}
