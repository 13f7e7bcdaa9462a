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

//! Descriptors for 2D textures.

/// Defines the memory format of pixels in a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// One 8-bit unsigned normalized component.
    R8Unorm,
    /// Four 8-bit unsigned normalized components (RGBA).
    Rgba8Unorm,
}

impl TextureFormat {
    /// Returns the size in bytes of a single pixel for this format.
    pub const fn bytes_per_pixel(self) -> u32 {
        match self {
            TextureFormat::R8Unorm => 1,
            TextureFormat::Rgba8Unorm => 4,
        }
    }
}

/// Texel filtering used for both minification and magnification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// Nearest texel.
    Nearest,
    /// Linear interpolation between texels.
    #[default]
    Linear,
}

/// How texture coordinates outside [0, 1] are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// Tile the texture.
    #[default]
    Repeat,
    /// Clamp to the edge texel.
    ClampToEdge,
    /// Tile the texture, mirroring every other repetition.
    MirrorRepeat,
}

/// Describes the pixels handed to a [`Texture`](crate::renderer::Texture) upload.
#[derive(Debug, Clone)]
pub struct TextureDescriptor<'a> {
    /// A debug label.
    pub label: Option<&'a str>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel format of the data.
    pub format: TextureFormat,
    /// Sampling filter.
    pub filter: FilterMode,
    /// Wrapping behavior on both axes.
    pub address_mode: AddressMode,
}

impl TextureDescriptor<'_> {
    /// Number of bytes a full upload must contain.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.format.bytes_per_pixel() as usize
    }
}
