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

//! A [`GlApi`] that records every call instead of talking to a driver.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;

use super::api::GlApi;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GlCall {
    Enable(u32),
    Disable(u32),
    BlendFunc(u32, u32),
    ClearColor([f32; 4]),
    PolygonMode(u32, u32),
    Clear(u32),
    DrawArrays {
        mode: u32,
        first: i32,
        count: i32,
    },
    DrawElements {
        mode: u32,
        count: i32,
        element_type: u32,
        offset: i32,
    },
    CreateShader(u32, u32),
    ShaderSource(u32, String),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    UniformMat4(String, [f32; 16]),
    UniformVec4(String, [f32; 4]),
    UniformInt(String, i32),
    CreateBuffer(u32),
    BindBuffer(u32, Option<u32>),
    BufferData {
        target: u32,
        len: usize,
        usage: u32,
    },
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    EnableVertexAttribArray(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        stride: i32,
        offset: i32,
    },
    CreateTexture(u32),
    BindTexture(u32, Option<u32>),
    ActiveTexture(u32),
    TexParameter(u32, u32, i32),
    PixelStore(u32, i32),
    TexImage2D {
        internal_format: i32,
        width: i32,
        height: i32,
        format: u32,
        data_type: u32,
        len: usize,
    },
    DeleteTexture(u32),
    EnableDebugCallback,
}

type DebugCallback = Box<dyn Fn(u32, u32, u32, u32, &str) -> bool>;

pub(crate) struct RecordingGl {
    calls: RefCell<Vec<GlCall>>,
    next_id: Cell<u32>,
    shader_stages: RefCell<HashMap<u32, u32>>,
    debug_callback: Option<DebugCallback>,
    /// Stage whose compilation reports failure.
    failing_stage: Option<u32>,
    link_fails: bool,
    debug_supported: bool,
    version: &'static str,
    /// Uniform names the "linked program" does not declare.
    unknown_uniforms: Vec<&'static str>,
}

impl Default for RecordingGl {
    fn default() -> Self {
        Self {
            calls: RefCell::default(),
            next_id: Cell::new(0),
            shader_stages: RefCell::default(),
            debug_callback: None,
            failing_stage: None,
            link_fails: false,
            debug_supported: true,
            version: "4.6.0 Recording",
            unknown_uniforms: Vec::new(),
        }
    }
}

impl fmt::Debug for RecordingGl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingGl")
            .field("calls", &self.calls.borrow().len())
            .field("debug_callback", &self.debug_callback.is_some())
            .finish_non_exhaustive()
    }
}

impl RecordingGl {
    pub fn with_failing_stage(mut self, stage: u32) -> Self {
        self.failing_stage = Some(stage);
        self
    }

    pub fn with_failing_link(mut self) -> Self {
        self.link_fails = true;
        self
    }

    pub fn without_debug_support(mut self) -> Self {
        self.debug_supported = false;
        self
    }

    pub fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    pub fn with_unknown_uniforms(mut self, names: &[&'static str]) -> Self {
        self.unknown_uniforms.extend_from_slice(names);
        self
    }

    pub fn take_calls(&self) -> Vec<GlCall> {
        std::mem::take(&mut self.calls.borrow_mut())
    }

    pub fn has_debug_callback(&self) -> bool {
        self.debug_callback.is_some()
    }

    /// Delivers a message as the driver would. Returns whether the
    /// registered callback reported it.
    pub fn emit_debug(
        &self,
        source: u32,
        kind: u32,
        id: u32,
        severity: u32,
        message: &str,
    ) -> bool {
        self.debug_callback
            .as_ref()
            .is_some_and(|callback| callback(source, kind, id, severity, message))
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl GlApi for RecordingGl {
    type Program = u32;
    type Shader = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type Texture = u32;
    type UniformLocation = String;

    fn enable(&self, capability: u32) {
        self.record(GlCall::Enable(capability));
    }

    fn disable(&self, capability: u32) {
        self.record(GlCall::Disable(capability));
    }

    fn blend_func(&self, src: u32, dst: u32) {
        self.record(GlCall::BlendFunc(src, dst));
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(GlCall::ClearColor([red, green, blue, alpha]));
    }

    fn polygon_mode(&self, face: u32, mode: u32) {
        self.record(GlCall::PolygonMode(face, mode));
    }

    fn clear(&self, mask: u32) {
        self.record(GlCall::Clear(mask));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(GlCall::DrawArrays { mode, first, count });
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        self.record(GlCall::DrawElements {
            mode,
            count,
            element_type,
            offset,
        });
    }

    fn create_shader(&self, stage: u32) -> Result<u32, String> {
        let id = self.allocate();
        self.shader_stages.borrow_mut().insert(id, stage);
        self.record(GlCall::CreateShader(id, stage));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record(GlCall::ShaderSource(shader, source.to_owned()));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(GlCall::CompileShader(shader));
    }

    fn get_shader_compile_status(&self, shader: u32) -> bool {
        let stage = self.shader_stages.borrow().get(&shader).copied();
        self.failing_stage.is_none() || stage != self.failing_stage
    }

    fn get_shader_info_log(&self, shader: u32) -> String {
        format!("0:1(1): error: shader {shader} is broken")
    }

    fn delete_shader(&self, shader: u32) {
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.allocate();
        self.record(GlCall::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(GlCall::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(GlCall::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(GlCall::LinkProgram(program));
    }

    fn get_program_link_status(&self, _program: u32) -> bool {
        !self.link_fails
    }

    fn get_program_info_log(&self, _program: u32) -> String {
        "error: unresolved varying".to_owned()
    }

    fn delete_program(&self, program: u32) {
        self.record(GlCall::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn get_uniform_location(&self, _program: u32, name: &str) -> Option<String> {
        (!self.unknown_uniforms.iter().any(|unknown| *unknown == name)).then(|| name.to_owned())
    }

    fn uniform_matrix_4_f32_slice(&self, location: &String, values: &[f32; 16]) {
        self.record(GlCall::UniformMat4(location.clone(), *values));
    }

    fn uniform_4_f32(&self, location: &String, values: [f32; 4]) {
        self.record(GlCall::UniformVec4(location.clone(), values));
    }

    fn uniform_1_i32(&self, location: &String, value: i32) {
        self.record(GlCall::UniformInt(location.clone(), value));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let id = self.allocate();
        self.record(GlCall::CreateBuffer(id));
        Ok(id)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(GlCall::BindBuffer(target, buffer));
    }

    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        self.record(GlCall::BufferData {
            target,
            len: data.len(),
            usage,
        });
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.allocate();
        self.record(GlCall::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(GlCall::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(GlCall::DeleteVertexArray(vertex_array));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        _normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(GlCall::VertexAttribPointer {
            index,
            size,
            data_type,
            stride,
            offset,
        });
    }

    fn create_texture(&self) -> Result<u32, String> {
        let id = self.allocate();
        self.record(GlCall::CreateTexture(id));
        Ok(id)
    }

    fn bind_texture(&self, target: u32, texture: Option<u32>) {
        self.record(GlCall::BindTexture(target, texture));
    }

    fn active_texture(&self, unit: u32) {
        self.record(GlCall::ActiveTexture(unit));
    }

    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32) {
        self.record(GlCall::TexParameter(target, parameter, value));
    }

    fn pixel_store_i32(&self, parameter: u32, value: i32) {
        self.record(GlCall::PixelStore(parameter, value));
    }

    fn tex_image_2d(
        &self,
        _target: u32,
        internal_format: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: &[u8],
    ) {
        self.record(GlCall::TexImage2D {
            internal_format,
            width,
            height,
            format,
            data_type: ty,
            len: pixels.len(),
        });
    }

    fn delete_texture(&self, texture: u32) {
        self.record(GlCall::DeleteTexture(texture));
    }

    fn supports_debug(&self) -> bool {
        self.debug_supported
    }

    fn debug_message_callback<F>(&mut self, callback: F)
    where
        F: Fn(u32, u32, u32, u32, &str) -> bool + Send + Sync + 'static,
    {
        self.record(GlCall::EnableDebugCallback);
        self.debug_callback = Some(Box::new(callback));
    }

    fn get_parameter_string(&self, parameter: u32) -> String {
        match parameter {
            glow::VERSION => self.version,
            glow::RENDERER => "Recording Device",
            glow::VENDOR => "Hasami",
            _ => "",
        }
        .to_owned()
    }
}
