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

use hasami_core::renderer::{ResourceError, Texture, TextureDescriptor, TextureFormat};

use super::api::GlApi;
use super::conversions::{GlTextureFormat, IntoGl};

/// A 2D texture, created on first upload and deleted on drop.
#[derive(Debug)]
pub struct GlTexture<G: GlApi> {
    gl: Rc<G>,
    texture: Option<G::Texture>,
    width: u32,
    height: u32,
}

impl<G: GlApi> GlTexture<G> {
    pub(crate) fn new(gl: Rc<G>) -> Self {
        Self {
            gl,
            texture: None,
            width: 0,
            height: 0,
        }
    }
}

impl<G: GlApi> Texture for GlTexture<G> {
    fn upload(&mut self, descriptor: &TextureDescriptor, data: &[u8]) -> Result<(), ResourceError> {
        let label = descriptor.label.unwrap_or("unnamed");
        let expected = descriptor.expected_len();
        if descriptor.width == 0 || descriptor.height == 0 {
            return Err(ResourceError::InvalidData(format!(
                "texture '{label}' has an empty extent"
            )));
        }
        if data.len() != expected {
            return Err(ResourceError::InvalidData(format!(
                "texture '{label}': expected {expected} bytes for {}x{} {:?}, got {}",
                descriptor.width,
                descriptor.height,
                descriptor.format,
                data.len()
            )));
        }

        let texture = match self.texture {
            Some(texture) => texture,
            None => {
                let texture = self
                    .gl
                    .create_texture()
                    .map_err(ResourceError::CreationFailed)?;
                self.texture = Some(texture);
                texture
            }
        };

        let format: GlTextureFormat = descriptor.format.into_gl();
        let filter: i32 = descriptor.filter.into_gl();
        let wrap: i32 = descriptor.address_mode.into_gl();

        self.gl.bind_texture(glow::TEXTURE_2D, Some(texture));
        self.gl
            .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, filter);
        self.gl
            .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, filter);
        self.gl
            .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, wrap);
        self.gl
            .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, wrap);
        // Single-channel rows are rarely 4-byte aligned.
        let alignment = match descriptor.format {
            TextureFormat::R8Unorm => 1,
            TextureFormat::Rgba8Unorm => 4,
        };
        self.gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, alignment);
        self.gl.tex_image_2d(
            glow::TEXTURE_2D,
            format.internal_format as i32,
            descriptor.width as i32,
            descriptor.height as i32,
            format.format,
            format.data_type,
            data,
        );

        self.width = descriptor.width;
        self.height = descriptor.height;
        log::trace!(
            "Uploaded {}x{} texture '{label}'.",
            descriptor.width,
            descriptor.height
        );
        Ok(())
    }

    fn bind(&self, unit: u32) {
        self.gl.active_texture(glow::TEXTURE0 + unit);
        self.gl.bind_texture(glow::TEXTURE_2D, self.texture);
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl<G: GlApi> Drop for GlTexture<G> {
    fn drop(&mut self) {
        if let Some(texture) = self.texture.take() {
            self.gl.delete_texture(texture);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::gl::recording::{GlCall, RecordingGl};
    use hasami_core::renderer::{AddressMode, FilterMode};

    fn descriptor(format: TextureFormat) -> TextureDescriptor<'static> {
        TextureDescriptor {
            label: Some("heightmap"),
            width: 3,
            height: 2,
            format,
            filter: FilterMode::Nearest,
            address_mode: AddressMode::ClampToEdge,
        }
    }

    #[test]
    fn upload_configures_sampling_and_pixels() {
        let gl = Rc::new(RecordingGl::default());
        let mut texture = GlTexture::new(gl.clone());
        texture
            .upload(&descriptor(TextureFormat::R8Unorm), &[0u8; 6])
            .unwrap();

        assert_eq!(texture.size(), (3, 2));
        let nearest = glow::NEAREST as i32;
        let clamp = glow::CLAMP_TO_EDGE as i32;
        assert_eq!(
            gl.take_calls(),
            vec![
                GlCall::CreateTexture(1),
                GlCall::BindTexture(glow::TEXTURE_2D, Some(1)),
                GlCall::TexParameter(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, nearest),
                GlCall::TexParameter(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, nearest),
                GlCall::TexParameter(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, clamp),
                GlCall::TexParameter(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, clamp),
                GlCall::PixelStore(glow::UNPACK_ALIGNMENT, 1),
                GlCall::TexImage2D {
                    internal_format: glow::R8 as i32,
                    width: 3,
                    height: 2,
                    format: glow::RED,
                    data_type: glow::UNSIGNED_BYTE,
                    len: 6
                },
            ]
        );
    }

    #[test]
    fn mismatched_pixel_data_is_rejected() {
        let gl = Rc::new(RecordingGl::default());
        let mut texture = GlTexture::new(gl.clone());
        let err = texture
            .upload(&descriptor(TextureFormat::Rgba8Unorm), &[0u8; 6])
            .unwrap_err();

        assert!(matches!(err, ResourceError::InvalidData(_)));
        assert!(gl.take_calls().is_empty());
        assert_eq!(texture.size(), (0, 0));
    }

    #[test]
    fn bind_selects_the_unit_first() {
        let gl = Rc::new(RecordingGl::default());
        let mut texture = GlTexture::new(gl.clone());
        texture
            .upload(&descriptor(TextureFormat::Rgba8Unorm), &[0u8; 24])
            .unwrap();
        gl.take_calls();

        texture.bind(2);
        drop(texture);
        assert_eq!(
            gl.take_calls(),
            vec![
                GlCall::ActiveTexture(glow::TEXTURE0 + 2),
                GlCall::BindTexture(glow::TEXTURE_2D, Some(1)),
                GlCall::DeleteTexture(1),
            ]
        );
    }
}
