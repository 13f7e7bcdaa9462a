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

//! Backend-agnostic rendering API.
//!
//! - **[`enums`]**: closed primitive/index enumerations and backend identity.
//! - **[`state`]**: the [`RenderState`] sum type applied by a state manager.
//! - **[`buffer`]**, **[`shader`]**, **[`texture`]**: resource descriptors.
//! - **[`settings`]**: renderer configuration.

pub mod buffer;
pub mod enums;
pub mod settings;
pub mod shader;
pub mod state;
pub mod texture;

pub use self::buffer::*;
pub use self::enums::*;
pub use self::settings::*;
pub use self::shader::*;
pub use self::state::*;
pub use self::texture::*;
