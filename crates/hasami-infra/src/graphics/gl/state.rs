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

use hasami_core::renderer::{RenderState, StateManager};

use super::api::GlApi;
use super::conversions::IntoGl;

/// Applies [`RenderState`] changes to an OpenGL context.
///
/// Nothing is cached: every call reaches the driver, so state changed
/// behind the manager's back is overwritten on the next apply.
#[derive(Debug)]
pub struct GlStateManager<G: GlApi> {
    gl: Rc<G>,
}

impl<G: GlApi> GlStateManager<G> {
    pub(crate) fn new(gl: Rc<G>) -> Self {
        Self { gl }
    }

    fn set_capability(&self, capability: u32, enabled: bool) {
        if enabled {
            self.gl.enable(capability);
        } else {
            self.gl.disable(capability);
        }
    }
}

impl<G: GlApi> StateManager for GlStateManager<G> {
    fn apply_state(&self, state: &RenderState) {
        log::trace!("Applying render state {state:?}");
        match *state {
            RenderState::DepthTest(enabled) => self.set_capability(glow::DEPTH_TEST, enabled),
            RenderState::CullFace(enabled) => self.set_capability(glow::CULL_FACE, enabled),
            RenderState::ClearColor(color) => {
                self.gl.clear_color(color.r, color.g, color.b, color.a)
            }
            RenderState::PolygonMode(mode) => {
                self.gl.polygon_mode(glow::FRONT_AND_BACK, mode.into_gl())
            }
            RenderState::AlphaBlend(enabled) => {
                self.set_capability(glow::BLEND, enabled);
                if enabled {
                    self.gl
                        .blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::gl::recording::{GlCall, RecordingGl};
    use hasami_core::math::LinearRgba;
    use hasami_core::renderer::PolygonMode;

    fn manager() -> (Rc<RecordingGl>, GlStateManager<RecordingGl>) {
        let gl = Rc::new(RecordingGl::default());
        (gl.clone(), GlStateManager::new(gl))
    }

    #[test]
    fn depth_test_and_culling_toggle_capabilities() {
        let (gl, manager) = manager();
        manager.apply_state(&RenderState::DepthTest(true));
        manager.apply_state(&RenderState::CullFace(false));
        assert_eq!(
            gl.take_calls(),
            vec![
                GlCall::Enable(glow::DEPTH_TEST),
                GlCall::Disable(glow::CULL_FACE)
            ]
        );
    }

    #[test]
    fn clear_color_passes_components_through() {
        let (gl, manager) = manager();
        manager.apply_state(&RenderState::ClearColor(LinearRgba::new(0.1, 0.2, 0.3, 1.0)));
        assert_eq!(gl.take_calls(), vec![GlCall::ClearColor([0.1, 0.2, 0.3, 1.0])]);
    }

    #[test]
    fn polygon_mode_applies_to_both_faces() {
        let (gl, manager) = manager();
        manager.apply_state(&RenderState::PolygonMode(PolygonMode::Line));
        assert_eq!(
            gl.take_calls(),
            vec![GlCall::PolygonMode(glow::FRONT_AND_BACK, glow::LINE)]
        );
    }

    #[test]
    fn enabling_alpha_blend_sets_the_blend_function() {
        let (gl, manager) = manager();
        manager.apply_state(&RenderState::AlphaBlend(true));
        assert_eq!(
            gl.take_calls(),
            vec![
                GlCall::Enable(glow::BLEND),
                GlCall::BlendFunc(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA)
            ]
        );

        manager.apply_state(&RenderState::AlphaBlend(false));
        assert_eq!(gl.take_calls(), vec![GlCall::Disable(glow::BLEND)]);
    }

    #[test]
    fn repeated_states_are_reissued() {
        let (gl, manager) = manager();
        manager.apply_states(&[RenderState::DepthTest(true), RenderState::DepthTest(true)]);
        assert_eq!(
            gl.take_calls(),
            vec![
                GlCall::Enable(glow::DEPTH_TEST),
                GlCall::Enable(glow::DEPTH_TEST)
            ]
        );
    }
}
