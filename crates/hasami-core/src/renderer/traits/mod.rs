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

//! Defines the core architectural traits for the rendering subsystem.
//!
//! - [`Renderer`]: creates resources and issues draw and clear commands.
//! - [`StateManager`]: applies [`RenderState`](crate::renderer::RenderState) changes.
//! - [`Shader`], [`Buffer`], [`Texture`]: backend objects owned by the caller.

mod renderer;
mod resource;
mod state_manager;

pub use self::renderer::Renderer;
pub use self::resource::{Buffer, Shader, Texture};
pub use self::state_manager::StateManager;
