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

use crate::renderer::api::{IndexFormat, PrimitiveType, RendererAdapterInfo};
use crate::renderer::traits::{Buffer, Shader, StateManager, Texture};
use std::fmt::Debug;

/// The immediate-mode interface a graphics backend exposes to the scene.
///
/// All calls act on the native context that was current when the backend was
/// initialized and must be issued from the thread owning that context.
pub trait Renderer: Debug {
    /// Creates a new, empty shader program object.
    ///
    /// The caller owns the returned object; dropping it releases the native program.
    fn create_shader(&self) -> Box<dyn Shader>;

    /// Creates a new, empty buffer object.
    ///
    /// The caller owns the returned object; dropping it releases the native buffer.
    fn create_buffer(&self) -> Box<dyn Buffer>;

    /// Creates a new, empty texture object.
    ///
    /// The caller owns the returned object; dropping it releases the native texture.
    fn create_texture(&self) -> Box<dyn Texture>;

    /// Issues a non-indexed draw of `count` vertices starting at `start`
    /// from the currently bound vertex state.
    ///
    /// No bounds checking is performed; the range is the caller's responsibility.
    fn draw_arrays(&self, primitive: PrimitiveType, start: u32, count: u32);

    /// Issues an indexed draw of `count` indices starting at index `start`
    /// of the currently bound index buffer.
    ///
    /// `start` is converted to a byte offset of `start * index_format.size()`.
    /// The caller must ensure the index buffer is bound and large enough.
    /// Offsets beyond `i32::MAX` bytes cannot be addressed; such draws are
    /// logged and skipped.
    fn draw_indexed(
        &self,
        primitive: PrimitiveType,
        start: u32,
        count: u32,
        index_format: IndexFormat,
    );

    /// Clears the color and/or depth buffer of the current framebuffer.
    /// Clearing neither is a no-op.
    fn clear(&self, color: bool, depth: bool);

    /// Returns the state manager bound to this renderer's context.
    fn state_manager(&self) -> &dyn StateManager;

    /// Returns information about the driver behind this renderer.
    fn adapter_info(&self) -> RendererAdapterInfo;
}
