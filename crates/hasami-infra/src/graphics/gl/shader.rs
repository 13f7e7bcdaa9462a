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

use hasami_core::math::{Mat4, Vec4};
use hasami_core::renderer::{ResourceError, Shader, ShaderDescriptor, ShaderError, ShaderStage};

use super::api::GlApi;
use super::conversions::IntoGl;

/// A GLSL program. The native program is deleted on drop.
#[derive(Debug)]
pub struct GlShader<G: GlApi> {
    gl: Rc<G>,
    program: Option<G::Program>,
}

impl<G: GlApi> GlShader<G> {
    pub(crate) fn new(gl: Rc<G>) -> Self {
        Self { gl, program: None }
    }

    fn compile_stage(
        &self,
        label: &str,
        stage: ShaderStage,
        descriptor: &ShaderDescriptor,
    ) -> Result<G::Shader, ResourceError> {
        let shader = self
            .gl
            .create_shader(stage.into_gl())
            .map_err(ResourceError::CreationFailed)?;
        self.gl.shader_source(shader, descriptor.source(stage));
        self.gl.compile_shader(shader);

        if !self.gl.get_shader_compile_status(shader) {
            let details = self.gl.get_shader_info_log(shader);
            self.gl.delete_shader(shader);
            log::error!("{} shader of '{label}' failed to compile:\n{details}", stage.name());
            return Err(ShaderError::CompilationFailed {
                label: label.to_owned(),
                stage: stage.name(),
                details,
            }
            .into());
        }
        Ok(shader)
    }

    fn link(
        &self,
        label: &str,
        vertex: G::Shader,
        fragment: G::Shader,
    ) -> Result<G::Program, ResourceError> {
        let program = self
            .gl
            .create_program()
            .map_err(ResourceError::CreationFailed)?;
        self.gl.attach_shader(program, vertex);
        self.gl.attach_shader(program, fragment);
        self.gl.link_program(program);
        self.gl.detach_shader(program, vertex);
        self.gl.detach_shader(program, fragment);

        if !self.gl.get_program_link_status(program) {
            let details = self.gl.get_program_info_log(program);
            self.gl.delete_program(program);
            log::error!("Program '{label}' failed to link:\n{details}");
            return Err(ShaderError::LinkFailed {
                label: label.to_owned(),
                details,
            }
            .into());
        }
        Ok(program)
    }

    fn uniform_location(&self, name: &str) -> Option<G::UniformLocation> {
        let program = self.program?;
        let location = self.gl.get_uniform_location(program, name);
        if location.is_none() {
            log::trace!("Uniform '{name}' is not active, ignoring.");
        }
        location
    }
}

impl<G: GlApi> Shader for GlShader<G> {
    fn build(&mut self, descriptor: &ShaderDescriptor) -> Result<(), ResourceError> {
        let label = descriptor.label.unwrap_or("unnamed");
        let vertex = self.compile_stage(label, ShaderStage::Vertex, descriptor)?;
        let fragment = match self.compile_stage(label, ShaderStage::Fragment, descriptor) {
            Ok(fragment) => fragment,
            Err(err) => {
                self.gl.delete_shader(vertex);
                return Err(err);
            }
        };

        let linked = self.link(label, vertex, fragment);
        self.gl.delete_shader(vertex);
        self.gl.delete_shader(fragment);
        let program = linked?;

        if let Some(previous) = self.program.replace(program) {
            self.gl.delete_program(previous);
        }
        log::debug!("Built shader program '{label}'.");
        Ok(())
    }

    fn is_built(&self) -> bool {
        self.program.is_some()
    }

    fn bind(&self) {
        self.gl.use_program(self.program);
    }

    fn set_mat4(&self, name: &str, value: &Mat4) {
        if let Some(location) = self.uniform_location(name) {
            self.gl
                .uniform_matrix_4_f32_slice(&location, &value.to_cols_array());
        }
    }

    fn set_vec4(&self, name: &str, value: Vec4) {
        if let Some(location) = self.uniform_location(name) {
            self.gl
                .uniform_4_f32(&location, [value.x, value.y, value.z, value.w]);
        }
    }

    fn set_int(&self, name: &str, value: i32) {
        if let Some(location) = self.uniform_location(name) {
            self.gl.uniform_1_i32(&location, value);
        }
    }
}

impl<G: GlApi> Drop for GlShader<G> {
    fn drop(&mut self) {
        if let Some(program) = self.program.take() {
            self.gl.delete_program(program);
        }
    }
}
