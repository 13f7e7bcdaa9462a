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

//! The OpenGL implementation of [`Renderer`].

use std::ffi::c_void;
use std::rc::Rc;

use anyhow::Context as _;
use hasami_core::renderer::{
    Buffer, DebugSeverity, GraphicsBackendType, IndexFormat, PrimitiveType, RenderError,
    Renderer, RendererAdapterInfo, RendererSettings, Shader, StateManager, Texture,
};

use super::api::GlApi;
use super::buffer::GlBuffer;
use super::conversions::IntoGl;
use super::debug;
use super::loader;
use super::shader::GlShader;
use super::state::GlStateManager;
use super::texture::GlTexture;

/// Renders through an OpenGL context.
///
/// The renderer shares its context with every resource it creates, so those
/// resources stay valid for as long as they are alive. All of them are tied
/// to the thread the context is current on.
#[derive(Debug)]
pub struct GlRenderer<G: GlApi = glow::Context> {
    gl: Rc<G>,
    state_manager: GlStateManager<G>,
    adapter_info: RendererAdapterInfo,
}

impl GlRenderer<glow::Context> {
    /// Loads the OpenGL function table through `loader` and sets up the renderer.
    ///
    /// `loader` maps a symbol name such as `"glDrawArrays"` to its address,
    /// or null when the symbol is unavailable.
    ///
    /// # Safety
    /// The context `loader` resolves against must be current on the calling
    /// thread, and must stay current wherever the renderer or its resources
    /// are used.
    ///
    /// # Errors
    /// `RenderError::InitializationFailed` if an entry point the renderer
    /// depends on cannot be resolved.
    pub unsafe fn try_initialize<F>(
        loader: F,
        settings: &RendererSettings,
    ) -> Result<Self, RenderError>
    where
        F: FnMut(&str) -> *const c_void,
    {
        let context = loader::load_context(loader)
            .context("OpenGL function table could not be loaded")
            .map_err(|err| RenderError::InitializationFailed(format!("{err:#}")))?;
        Ok(Self::from_api(context, settings))
    }

    /// Like [`GlRenderer::try_initialize`], but a failure to load is fatal.
    ///
    /// # Safety
    /// See [`GlRenderer::try_initialize`].
    ///
    /// # Panics
    /// If the function table cannot be loaded. The cause is logged first.
    pub unsafe fn initialize<F>(loader: F, settings: &RendererSettings) -> Self
    where
        F: FnMut(&str) -> *const c_void,
    {
        match Self::try_initialize(loader, settings) {
            Ok(renderer) => renderer,
            Err(err) => {
                log::error!("{err}");
                panic!("{err}");
            }
        }
    }
}

impl<G: GlApi> GlRenderer<G> {
    /// Wraps an already loaded API.
    pub fn from_api(mut api: G, settings: &RendererSettings) -> Self {
        if settings.debug_output {
            install_debug_output(&mut api, settings.debug_min_severity);
        }

        let adapter_info = query_adapter_info(&api);
        log::info!(
            "OpenGL renderer ready: {} / {} ({}, {:?})",
            adapter_info.vendor,
            adapter_info.name,
            adapter_info.version,
            adapter_info.backend_type
        );

        let gl = Rc::new(api);
        Self {
            state_manager: GlStateManager::new(gl.clone()),
            gl,
            adapter_info,
        }
    }

    /// The underlying API.
    pub fn api(&self) -> &G {
        &self.gl
    }
}

fn install_debug_output<G: GlApi>(api: &mut G, min_severity: DebugSeverity) {
    if !api.supports_debug() {
        log::warn!("Debug output requested, but the context does not support it.");
        return;
    }
    api.enable(glow::DEBUG_OUTPUT);
    api.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
    api.debug_message_callback(move |source, kind, id, severity, message| {
        debug::report(min_severity, source, kind, id, severity, message)
    });
    log::debug!("Driver debug output enabled at {min_severity:?} and above.");
}

fn query_adapter_info<G: GlApi>(api: &G) -> RendererAdapterInfo {
    let version = api.get_parameter_string(glow::VERSION);
    let backend_type = if version.is_empty() {
        GraphicsBackendType::Unknown
    } else if version.starts_with("OpenGL ES") || version.starts_with("WebGL") {
        GraphicsBackendType::OpenGLEs
    } else {
        GraphicsBackendType::OpenGL
    };
    RendererAdapterInfo {
        name: api.get_parameter_string(glow::RENDERER),
        vendor: api.get_parameter_string(glow::VENDOR),
        version,
        backend_type,
    }
}

fn clear_mask(color: bool, depth: bool) -> u32 {
    let mut mask = 0;
    if color {
        mask |= glow::COLOR_BUFFER_BIT;
    }
    if depth {
        mask |= glow::DEPTH_BUFFER_BIT;
    }
    mask
}

impl<G: GlApi> Renderer for GlRenderer<G> {
    fn create_shader(&self) -> Box<dyn Shader> {
        Box::new(GlShader::new(self.gl.clone()))
    }

    fn create_buffer(&self) -> Box<dyn Buffer> {
        Box::new(GlBuffer::new(self.gl.clone()))
    }

    fn create_texture(&self) -> Box<dyn Texture> {
        Box::new(GlTexture::new(self.gl.clone()))
    }

    fn draw_arrays(&self, primitive: PrimitiveType, start: u32, count: u32) {
        self.gl
            .draw_arrays(primitive.into_gl(), start as i32, count as i32);
    }

    fn draw_indexed(
        &self,
        primitive: PrimitiveType,
        start: u32,
        count: u32,
        index_format: IndexFormat,
    ) {
        let Some(offset) = index_format
            .byte_offset(start)
            .and_then(|offset| i32::try_from(offset).ok())
        else {
            log::error!(
                "Index offset {start} ({index_format:?}) is beyond the addressable range, draw skipped."
            );
            return;
        };
        self.gl.draw_elements(
            primitive.into_gl(),
            count as i32,
            index_format.into_gl(),
            offset,
        );
    }

    fn clear(&self, color: bool, depth: bool) {
        let mask = clear_mask(color, depth);
        if mask != 0 {
            self.gl.clear(mask);
        }
    }

    fn state_manager(&self) -> &dyn StateManager {
        &self.state_manager
    }

    fn adapter_info(&self) -> RendererAdapterInfo {
        self.adapter_info.clone()
    }
}
