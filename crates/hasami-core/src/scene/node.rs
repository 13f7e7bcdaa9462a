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

use crate::math::Mat4;
use crate::renderer::{Renderer, ResourceError, Shader};
use std::fmt::Debug;

/// A scene node that owns a mesh and knows how to draw it.
pub trait ModelNode: Debug {
    /// Draws the node with `shader` under the given camera transforms.
    ///
    /// Uploads the node's geometry through `renderer` on first use.
    /// ## Errors
    /// * `ResourceError` - If the geometry upload fails.
    fn draw(
        &mut self,
        renderer: &dyn Renderer,
        shader: &dyn Shader,
        projection: &Mat4,
        view: &Mat4,
    ) -> Result<(), ResourceError>;

    /// Number of vertices the node currently holds.
    fn vertex_count(&self) -> usize;
}
