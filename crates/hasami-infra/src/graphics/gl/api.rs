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

//! The slice of the OpenGL API the backend issues commands through.

use std::fmt::Debug;

use glow::HasContext;

/// The OpenGL entry points used by the backend.
///
/// Every method maps one-to-one onto a native call. Implementors assume the
/// context they wrap is current on the calling thread; that precondition is
/// established once, by the `unsafe` constructors of
/// [`GlRenderer`](super::GlRenderer).
pub trait GlApi: Debug + 'static {
    /// Linked program object.
    type Program: Copy + Debug;
    /// Shader stage object.
    type Shader: Copy + Debug;
    /// Buffer object.
    type Buffer: Copy + Debug;
    /// Vertex array object.
    type VertexArray: Copy + Debug;
    /// Texture object.
    type Texture: Copy + Debug;
    /// Resolved uniform location.
    type UniformLocation: Debug;

    fn enable(&self, capability: u32);
    fn disable(&self, capability: u32);
    fn blend_func(&self, src: u32, dst: u32);
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn polygon_mode(&self, face: u32, mode: u32);
    fn clear(&self, mask: u32);
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32);

    fn create_shader(&self, stage: u32) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn get_shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn get_shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);
    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn get_program_link_status(&self, program: Self::Program) -> bool;
    fn get_program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<Self::Program>);
    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    fn uniform_matrix_4_f32_slice(&self, location: &Self::UniformLocation, values: &[f32; 16]);
    fn uniform_4_f32(&self, location: &Self::UniformLocation, values: [f32; 4]);
    fn uniform_1_i32(&self, location: &Self::UniformLocation, value: i32);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32);
    fn delete_buffer(&self, buffer: Self::Buffer);
    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    fn create_texture(&self) -> Result<Self::Texture, String>;
    fn bind_texture(&self, target: u32, texture: Option<Self::Texture>);
    fn active_texture(&self, unit: u32);
    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32);
    fn pixel_store_i32(&self, parameter: u32, value: i32);
    #[allow(clippy::too_many_arguments)]
    fn tex_image_2d(
        &self,
        target: u32,
        internal_format: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: &[u8],
    );
    fn delete_texture(&self, texture: Self::Texture);

    /// Whether `KHR_debug` (or core 4.3 debug output) is available.
    fn supports_debug(&self) -> bool;
    /// Registers the driver message callback. The callback returns whether
    /// it reported the message; native drivers ignore the result.
    fn debug_message_callback<F>(&mut self, callback: F)
    where
        F: Fn(u32, u32, u32, u32, &str) -> bool + Send + Sync + 'static;
    fn get_parameter_string(&self, parameter: u32) -> String;
}

// SAFETY (all blocks below): the context is current on this thread, which
// the renderer's constructors require of their callers. Handles passed in
// were created by this same context.
impl GlApi for glow::Context {
    type Program = glow::Program;
    type Shader = glow::Shader;
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;
    type Texture = glow::Texture;
    type UniformLocation = glow::UniformLocation;

    fn enable(&self, capability: u32) {
        unsafe { HasContext::enable(self, capability) }
    }

    fn disable(&self, capability: u32) {
        unsafe { HasContext::disable(self, capability) }
    }

    fn blend_func(&self, src: u32, dst: u32) {
        unsafe { HasContext::blend_func(self, src, dst) }
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { HasContext::clear_color(self, red, green, blue, alpha) }
    }

    fn polygon_mode(&self, face: u32, mode: u32) {
        unsafe { HasContext::polygon_mode(self, face, mode) }
    }

    fn clear(&self, mask: u32) {
        unsafe { HasContext::clear(self, mask) }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, mode, first, count) }
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        unsafe { HasContext::draw_elements(self, mode, count, element_type, offset) }
    }

    fn create_shader(&self, stage: u32) -> Result<Self::Shader, String> {
        unsafe { HasContext::create_shader(self, stage) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn get_shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { HasContext::get_shader_compile_status(self, shader) }
    }

    fn get_shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { HasContext::get_shader_info_log(self, shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn get_program_link_status(&self, program: Self::Program) -> bool {
        unsafe { HasContext::get_program_link_status(self, program) }
    }

    fn get_program_info_log(&self, program: Self::Program) -> String {
        unsafe { HasContext::get_program_info_log(self, program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        unsafe { HasContext::get_uniform_location(self, program, name) }
    }

    fn uniform_matrix_4_f32_slice(&self, location: &Self::UniformLocation, values: &[f32; 16]) {
        unsafe { HasContext::uniform_matrix_4_f32_slice(self, Some(location), false, values) }
    }

    fn uniform_4_f32(&self, location: &Self::UniformLocation, values: [f32; 4]) {
        let [x, y, z, w] = values;
        unsafe { HasContext::uniform_4_f32(self, Some(location), x, y, z, w) }
    }

    fn uniform_1_i32(&self, location: &Self::UniformLocation, value: i32) {
        unsafe { HasContext::uniform_1_i32(self, Some(location), value) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>) {
        unsafe { HasContext::bind_buffer(self, target, buffer) }
    }

    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        unsafe { HasContext::buffer_data_u8_slice(self, target, data, usage) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array) }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vertex_array) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self, index, size, data_type, normalized, stride, offset,
            )
        }
    }

    fn create_texture(&self) -> Result<Self::Texture, String> {
        unsafe { HasContext::create_texture(self) }
    }

    fn bind_texture(&self, target: u32, texture: Option<Self::Texture>) {
        unsafe { HasContext::bind_texture(self, target, texture) }
    }

    fn active_texture(&self, unit: u32) {
        unsafe { HasContext::active_texture(self, unit) }
    }

    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32) {
        unsafe { HasContext::tex_parameter_i32(self, target, parameter, value) }
    }

    fn pixel_store_i32(&self, parameter: u32, value: i32) {
        unsafe { HasContext::pixel_store_i32(self, parameter, value) }
    }

    fn tex_image_2d(
        &self,
        target: u32,
        internal_format: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: &[u8],
    ) {
        unsafe {
            HasContext::tex_image_2d(
                self,
                target,
                0,
                internal_format,
                width,
                height,
                0,
                format,
                ty,
                Some(pixels),
            )
        }
    }

    fn delete_texture(&self, texture: Self::Texture) {
        unsafe { HasContext::delete_texture(self, texture) }
    }

    fn supports_debug(&self) -> bool {
        HasContext::supports_debug(self)
    }

    fn debug_message_callback<F>(&mut self, callback: F)
    where
        F: Fn(u32, u32, u32, u32, &str) -> bool + Send + Sync + 'static,
    {
        unsafe {
            HasContext::debug_message_callback(self, move |source, kind, id, severity, message| {
                callback(source, kind, id, severity, message);
            })
        }
    }

    fn get_parameter_string(&self, parameter: u32) -> String {
        unsafe { HasContext::get_parameter_string(self, parameter) }
    }
}
