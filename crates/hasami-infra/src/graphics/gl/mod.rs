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

//! OpenGL backend.
//!
//! [`GlRenderer`] implements the core [`Renderer`](hasami_core::Renderer)
//! contract over any [`GlApi`]; in production that is a `glow::Context`
//! loaded by [`GlRenderer::initialize`].

mod api;
mod buffer;
pub mod conversions;
mod debug;
mod loader;
mod renderer;
mod shader;
mod state;
mod texture;

#[cfg(test)]
pub(crate) mod recording;

pub use self::api::GlApi;
pub use self::buffer::GlBuffer;
pub use self::renderer::GlRenderer;
pub use self::shader::GlShader;
pub use self::state::GlStateManager;
pub use self::texture::GlTexture;
