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

//! Shader program descriptors.

use std::borrow::Cow;

/// Defines the programmable stage a shader source is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// The vertex shader stage.
    Vertex,
    /// The fragment (or pixel) shader stage.
    Fragment,
}

impl ShaderStage {
    /// Lowercase stage name, used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// Describes a GLSL program to be built by a [`Shader`](crate::renderer::Shader).
#[derive(Debug, Clone)]
pub struct ShaderDescriptor<'a> {
    /// A debug label, reported in compile and link errors.
    pub label: Option<&'a str>,
    /// Vertex stage source.
    pub vertex_source: Cow<'a, str>,
    /// Fragment stage source.
    pub fragment_source: Cow<'a, str>,
}

impl<'a> ShaderDescriptor<'a> {
    /// Returns the source for the given stage.
    pub fn source(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex_source,
            ShaderStage::Fragment => &self.fragment_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_descriptor_source_by_stage() {
        let descriptor = ShaderDescriptor {
            label: Some("test_shader"),
            vertex_source: Cow::Borrowed("void main() { gl_Position = vec4(0.0); }"),
            fragment_source: Cow::Owned("void main() {}".to_string()),
        };

        assert_eq!(descriptor.label, Some("test_shader"));
        assert!(descriptor.source(ShaderStage::Vertex).contains("gl_Position"));
        assert_eq!(descriptor.source(ShaderStage::Fragment), "void main() {}");
        assert_eq!(ShaderStage::Fragment.name(), "fragment");
    }
}
