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

use crate::math::{Mat4, Vec4};
use crate::renderer::api::{BufferDescriptor, ShaderDescriptor, TextureDescriptor};
use crate::renderer::error::ResourceError;
use std::fmt::Debug;

/// A shader program owned by its creator.
pub trait Shader: Debug {
    /// Compiles and links the program described by `descriptor`, replacing any
    /// previously built program.
    /// ## Errors
    /// * `ResourceError::Shader` - If a stage fails to compile or the program fails to link.
    fn build(&mut self, descriptor: &ShaderDescriptor) -> Result<(), ResourceError>;

    /// Returns `true` once a program has been successfully built.
    fn is_built(&self) -> bool;

    /// Makes this program current.
    fn bind(&self);

    /// Sets a `mat4` uniform. Unknown names are ignored.
    fn set_mat4(&self, name: &str, value: &Mat4);

    /// Sets a `vec4` uniform. Unknown names are ignored.
    fn set_vec4(&self, name: &str, value: Vec4);

    /// Sets an `int` (or sampler) uniform. Unknown names are ignored.
    fn set_int(&self, name: &str, value: i32);
}

/// A GPU buffer owned by its creator.
pub trait Buffer: Debug {
    /// Replaces the buffer contents with `data`.
    /// ## Errors
    /// * `ResourceError::InvalidData` - If `data` is not a whole number of elements.
    fn upload(&mut self, descriptor: &BufferDescriptor, data: &[u8]) -> Result<(), ResourceError>;

    /// Binds the buffer (and, for vertex buffers, its attribute layout).
    fn bind(&self);

    /// Size of the uploaded data in bytes.
    fn size(&self) -> usize;

    /// Number of vertices or indices uploaded.
    fn element_count(&self) -> u32;
}

/// A 2D texture owned by its creator.
pub trait Texture: Debug {
    /// Replaces the texture image with `data`.
    /// ## Errors
    /// * `ResourceError::InvalidData` - If `data` does not match the descriptor's dimensions.
    fn upload(&mut self, descriptor: &TextureDescriptor, data: &[u8]) -> Result<(), ResourceError>;

    /// Binds the texture to the given texture unit.
    fn bind(&self, unit: u32);

    /// Width and height of the uploaded image.
    fn size(&self) -> (u32, u32);
}
