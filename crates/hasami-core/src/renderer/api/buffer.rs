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

//! Descriptors for GPU buffers and the vertex layouts they carry.

use super::enums::IndexFormat;

/// The memory format of a single vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexFormat {
    /// One 32-bit float component.
    Float32,
    /// Two 32-bit float components.
    Float32x2,
    /// Three 32-bit float components.
    Float32x3,
    /// Four 32-bit float components.
    Float32x4,
}

impl VertexFormat {
    /// Number of components in this format.
    pub const fn components(self) -> u32 {
        match self {
            VertexFormat::Float32 => 1,
            VertexFormat::Float32x2 => 2,
            VertexFormat::Float32x3 => 3,
            VertexFormat::Float32x4 => 4,
        }
    }

    /// Returns the size in bytes of this vertex format.
    pub const fn size(self) -> u32 {
        self.components() * 4
    }
}

/// One attribute inside an interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// The shader input location.
    pub location: u32,
    /// The data format of the attribute.
    pub format: VertexFormat,
    /// Byte offset from the start of the vertex.
    pub offset: u32,
}

/// The layout of an interleaved vertex buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    /// Distance in bytes between two consecutive vertices.
    pub stride: u32,
    /// The attributes making up one vertex.
    pub attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Builds a tightly packed layout, assigning locations and offsets in order.
    pub fn packed(formats: &[VertexFormat]) -> Self {
        let mut offset = 0;
        let attributes = formats
            .iter()
            .enumerate()
            .map(|(location, &format)| {
                let attribute = VertexAttribute {
                    location: location as u32,
                    format,
                    offset,
                };
                offset += format.size();
                attribute
            })
            .collect();
        Self {
            stride: offset,
            attributes,
        }
    }
}

/// What a buffer holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferKind {
    /// Interleaved vertices described by a layout.
    Vertex(VertexLayout),
    /// Indices of the given format.
    Index(IndexFormat),
}

/// How often the buffer contents are expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BufferUsage {
    /// Uploaded once, drawn many times.
    #[default]
    Static,
    /// Updated occasionally.
    Dynamic,
    /// Updated every frame.
    Stream,
}

/// Describes the data handed to a [`Buffer`](crate::renderer::Buffer) upload.
#[derive(Debug, Clone)]
pub struct BufferDescriptor<'a> {
    /// A debug label.
    pub label: Option<&'a str>,
    /// What the buffer holds.
    pub kind: BufferKind,
    /// The expected update frequency.
    pub usage: BufferUsage,
}

impl BufferDescriptor<'_> {
    /// Size in bytes of one element (a vertex or an index).
    pub fn element_size(&self) -> u32 {
        match &self.kind {
            BufferKind::Vertex(layout) => layout.stride,
            BufferKind::Index(format) => format.size(),
        }
    }

    /// Number of whole elements in `byte_len` bytes, or `None` if
    /// `byte_len` is not a multiple of the element size.
    pub fn element_count(&self, byte_len: usize) -> Option<u32> {
        let size = self.element_size() as usize;
        if size == 0 || byte_len % size != 0 {
            return None;
        }
        Some((byte_len / size) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_layout_assigns_offsets_in_order() {
        let layout = VertexLayout::packed(&[
            VertexFormat::Float32x3,
            VertexFormat::Float32x3,
            VertexFormat::Float32x2,
        ]);
        assert_eq!(layout.stride, 32);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[2].offset, 24);
        assert_eq!(layout.attributes[2].location, 2);
    }

    #[test]
    fn element_count_checks_alignment() {
        let descriptor = BufferDescriptor {
            label: None,
            kind: BufferKind::Index(IndexFormat::Uint16),
            usage: BufferUsage::Static,
        };
        assert_eq!(descriptor.element_count(12), Some(6));
        assert_eq!(descriptor.element_count(7), None);
    }
}
