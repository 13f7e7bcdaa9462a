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

//! Defines the hierarchy of error types for the rendering subsystem.

use std::fmt;

/// An error related to compiling or linking a shader program.
#[derive(Debug)]
pub enum ShaderError {
    /// A shader stage failed to compile.
    CompilationFailed {
        /// A descriptive label for the shader, if available.
        label: String,
        /// The stage that failed (e.g. "vertex").
        stage: &'static str,
        /// The driver's info log.
        details: String,
    },
    /// The compiled stages failed to link into a program.
    LinkFailed {
        /// A descriptive label for the shader, if available.
        label: String,
        /// The driver's info log.
        details: String,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::CompilationFailed {
                label,
                stage,
                details,
            } => {
                write!(f, "Shader compilation failed for '{label}' ({stage} stage): {details}")
            }
            ShaderError::LinkFailed { label, details } => {
                write!(f, "Shader program link failed for '{label}': {details}")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// An error related to the creation or use of a GPU resource (shaders, buffers, textures).
#[derive(Debug)]
pub enum ResourceError {
    /// A shader-specific error occurred.
    Shader(ShaderError),
    /// The backend could not allocate the native object.
    CreationFailed(String),
    /// The data handed to the resource does not match its descriptor.
    InvalidData(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Shader(err) => write!(f, "Shader resource error: {err}"),
            ResourceError::CreationFailed(msg) => {
                write!(f, "Failed to create native resource: {msg}")
            }
            ResourceError::InvalidData(msg) => write!(f, "Invalid resource data: {msg}"),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Shader(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShaderError> for ResourceError {
    fn from(err: ShaderError) -> Self {
        ResourceError::Shader(err)
    }
}

/// A high-level error raised by the renderer itself.
#[derive(Debug)]
pub enum RenderError {
    /// The native function table could not be loaded.
    InitializationFailed(String),
    /// An error occurred while managing a GPU resource.
    Resource(ResourceError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InitializationFailed(msg) => {
                write!(f, "Failed to initialize graphics backend: {msg}")
            }
            RenderError::Resource(err) => {
                write!(f, "Graphics resource operation failed: {err}")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Resource(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResourceError> for RenderError {
    fn from(err: ResourceError) -> Self {
        RenderError::Resource(err)
    }
}
