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

use std::rc::Rc;

use hasami_core::renderer::{Buffer, BufferDescriptor, BufferKind, ResourceError, VertexLayout};

use super::api::GlApi;
use super::conversions::{GlVertexFormat, IntoGl};

/// A GPU buffer. Vertex buffers own a vertex array object recording their
/// attribute layout, so binding one restores the whole vertex setup.
///
/// Native objects are created on first upload and deleted on drop.
#[derive(Debug)]
pub struct GlBuffer<G: GlApi> {
    gl: Rc<G>,
    buffer: Option<G::Buffer>,
    vertex_array: Option<G::VertexArray>,
    target: u32,
    size: usize,
    element_count: u32,
}

impl<G: GlApi> GlBuffer<G> {
    pub(crate) fn new(gl: Rc<G>) -> Self {
        Self {
            gl,
            buffer: None,
            vertex_array: None,
            target: glow::ARRAY_BUFFER,
            size: 0,
            element_count: 0,
        }
    }

    fn native_buffer(&mut self) -> Result<G::Buffer, ResourceError> {
        match self.buffer {
            Some(buffer) => Ok(buffer),
            None => {
                let buffer = self
                    .gl
                    .create_buffer()
                    .map_err(ResourceError::CreationFailed)?;
                self.buffer = Some(buffer);
                Ok(buffer)
            }
        }
    }

    fn native_vertex_array(&mut self) -> Result<G::VertexArray, ResourceError> {
        match self.vertex_array {
            Some(vertex_array) => Ok(vertex_array),
            None => {
                let vertex_array = self
                    .gl
                    .create_vertex_array()
                    .map_err(ResourceError::CreationFailed)?;
                self.vertex_array = Some(vertex_array);
                Ok(vertex_array)
            }
        }
    }

    fn describe_attributes(&self, layout: &VertexLayout) {
        for attribute in &layout.attributes {
            let format: GlVertexFormat = attribute.format.into_gl();
            self.gl.enable_vertex_attrib_array(attribute.location);
            self.gl.vertex_attrib_pointer_f32(
                attribute.location,
                format.components,
                format.data_type,
                false,
                layout.stride as i32,
                attribute.offset as i32,
            );
        }
    }
}

impl<G: GlApi> Buffer for GlBuffer<G> {
    fn upload(&mut self, descriptor: &BufferDescriptor, data: &[u8]) -> Result<(), ResourceError> {
        let label = descriptor.label.unwrap_or("unnamed");
        let element_count = descriptor.element_count(data.len()).ok_or_else(|| {
            ResourceError::InvalidData(format!(
                "buffer '{label}': {} bytes is not a whole number of {}-byte elements",
                data.len(),
                descriptor.element_size()
            ))
        })?;

        let buffer = self.native_buffer()?;
        let target: u32 = (&descriptor.kind).into_gl();
        let usage: u32 = descriptor.usage.into_gl();

        match &descriptor.kind {
            BufferKind::Vertex(layout) => {
                let vertex_array = self.native_vertex_array()?;
                self.gl.bind_vertex_array(Some(vertex_array));
                self.gl.bind_buffer(target, Some(buffer));
                self.gl.buffer_data_u8_slice(target, data, usage);
                self.describe_attributes(layout);
                self.gl.bind_vertex_array(None);
            }
            BufferKind::Index(_) => {
                if let Some(vertex_array) = self.vertex_array.take() {
                    self.gl.delete_vertex_array(vertex_array);
                }
                self.gl.bind_buffer(target, Some(buffer));
                self.gl.buffer_data_u8_slice(target, data, usage);
            }
        }

        self.target = target;
        self.size = data.len();
        self.element_count = element_count;
        log::trace!("Uploaded {} bytes ({element_count} elements) to buffer '{label}'.", data.len());
        Ok(())
    }

    fn bind(&self) {
        match (self.vertex_array, self.buffer) {
            (Some(vertex_array), _) => self.gl.bind_vertex_array(Some(vertex_array)),
            (None, Some(buffer)) => self.gl.bind_buffer(self.target, Some(buffer)),
            (None, None) => log::warn!("Binding a buffer that was never uploaded."),
        }
    }

    fn size(&self) -> usize {
        self.size
    }

    fn element_count(&self) -> u32 {
        self.element_count
    }
}

impl<G: GlApi> Drop for GlBuffer<G> {
    fn drop(&mut self) {
        if let Some(vertex_array) = self.vertex_array.take() {
            self.gl.delete_vertex_array(vertex_array);
        }
        if let Some(buffer) = self.buffer.take() {
            self.gl.delete_buffer(buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::gl::recording::{GlCall, RecordingGl};
    use hasami_core::renderer::{BufferUsage, IndexFormat, VertexFormat};

    fn vertex_descriptor() -> BufferDescriptor<'static> {
        BufferDescriptor {
            label: Some("positions"),
            kind: BufferKind::Vertex(VertexLayout::packed(&[
                VertexFormat::Float32x3,
                VertexFormat::Float32x2,
            ])),
            usage: BufferUsage::Static,
        }
    }

    #[test]
    fn vertex_upload_records_the_attribute_layout() {
        let gl = Rc::new(RecordingGl::default());
        let mut buffer = GlBuffer::new(gl.clone());
        buffer.upload(&vertex_descriptor(), &[0u8; 60]).unwrap();

        assert_eq!(buffer.size(), 60);
        assert_eq!(buffer.element_count(), 3);
        assert_eq!(
            gl.take_calls(),
            vec![
                GlCall::CreateBuffer(1),
                GlCall::CreateVertexArray(2),
                GlCall::BindVertexArray(Some(2)),
                GlCall::BindBuffer(glow::ARRAY_BUFFER, Some(1)),
                GlCall::BufferData {
                    target: glow::ARRAY_BUFFER,
                    len: 60,
                    usage: glow::STATIC_DRAW
                },
                GlCall::EnableVertexAttribArray(0),
                GlCall::VertexAttribPointer {
                    index: 0,
                    size: 3,
                    data_type: glow::FLOAT,
                    stride: 20,
                    offset: 0
                },
                GlCall::EnableVertexAttribArray(1),
                GlCall::VertexAttribPointer {
                    index: 1,
                    size: 2,
                    data_type: glow::FLOAT,
                    stride: 20,
                    offset: 12
                },
                GlCall::BindVertexArray(None),
            ]
        );

        buffer.bind();
        assert_eq!(gl.take_calls(), vec![GlCall::BindVertexArray(Some(2))]);
    }

    #[test]
    fn index_buffers_bind_the_element_target() {
        let gl = Rc::new(RecordingGl::default());
        let mut buffer = GlBuffer::new(gl.clone());
        let descriptor = BufferDescriptor {
            label: None,
            kind: BufferKind::Index(IndexFormat::Uint16),
            usage: BufferUsage::Dynamic,
        };
        buffer.upload(&descriptor, &[0u8; 12]).unwrap();
        assert_eq!(buffer.element_count(), 6);
        gl.take_calls();

        buffer.bind();
        assert_eq!(
            gl.take_calls(),
            vec![GlCall::BindBuffer(glow::ELEMENT_ARRAY_BUFFER, Some(1))]
        );
    }

    #[test]
    fn partial_elements_are_rejected_before_allocation() {
        let gl = Rc::new(RecordingGl::default());
        let mut buffer = GlBuffer::new(gl.clone());
        let err = buffer.upload(&vertex_descriptor(), &[0u8; 61]).unwrap_err();

        assert!(matches!(err, ResourceError::InvalidData(_)));
        assert!(gl.take_calls().is_empty());
        assert_eq!(buffer.size(), 0);
    }

    #[test]
    fn reupload_reuses_native_objects_and_drop_releases_them() {
        let gl = Rc::new(RecordingGl::default());
        let mut buffer = GlBuffer::new(gl.clone());
        buffer.upload(&vertex_descriptor(), &[0u8; 20]).unwrap();
        buffer.upload(&vertex_descriptor(), &[0u8; 40]).unwrap();

        let calls = gl.take_calls();
        assert_eq!(
            calls
                .iter()
                .filter(|c| matches!(c, GlCall::CreateBuffer(_) | GlCall::CreateVertexArray(_)))
                .count(),
            2
        );
        assert_eq!(buffer.element_count(), 2);

        drop(buffer);
        assert_eq!(
            gl.take_calls(),
            vec![GlCall::DeleteVertexArray(2), GlCall::DeleteBuffer(1)]
        );
    }
}
