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

//! Fixed-function render state changes.

use crate::math::LinearRgba;
use serde::{Deserialize, Serialize};

/// Rasterization fill mode for polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PolygonMode {
    /// Only the vertices are rasterized.
    Point,
    /// Only the edges are rasterized (wireframe).
    Line,
    /// The whole polygon is filled.
    #[default]
    Fill,
}

impl PolygonMode {
    /// All supported polygon modes.
    pub const ALL: [PolygonMode; 3] = [PolygonMode::Point, PolygonMode::Line, PolygonMode::Fill];
}

/// A single render state change, applied by a [`StateManager`](crate::renderer::StateManager).
///
/// The payload is tied to the variant, so a state can never carry the wrong
/// kind of value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RenderState {
    /// Enables or disables depth testing.
    DepthTest(bool),
    /// Enables or disables back-face culling.
    CullFace(bool),
    /// Sets the color used by the next color clear.
    ClearColor(LinearRgba),
    /// Sets the fill mode for front and back faces.
    PolygonMode(PolygonMode),
    /// Enables or disables standard (source-alpha, one-minus-source-alpha) blending.
    AlphaBlend(bool),
}

/// Payload-free discriminant of a [`RenderState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStateKind {
    /// See [`RenderState::DepthTest`].
    DepthTest,
    /// See [`RenderState::CullFace`].
    CullFace,
    /// See [`RenderState::ClearColor`].
    ClearColor,
    /// See [`RenderState::PolygonMode`].
    PolygonMode,
    /// See [`RenderState::AlphaBlend`].
    AlphaBlend,
}

impl RenderState {
    /// Returns which state this value changes.
    pub fn kind(&self) -> RenderStateKind {
        match self {
            RenderState::DepthTest(_) => RenderStateKind::DepthTest,
            RenderState::CullFace(_) => RenderStateKind::CullFace,
            RenderState::ClearColor(_) => RenderStateKind::ClearColor,
            RenderState::PolygonMode(_) => RenderStateKind::PolygonMode,
            RenderState::AlphaBlend(_) => RenderStateKind::AlphaBlend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(RenderState::DepthTest(true).kind(), RenderStateKind::DepthTest);
        assert_eq!(RenderState::CullFace(false).kind(), RenderStateKind::CullFace);
        assert_eq!(
            RenderState::ClearColor(LinearRgba::WHITE).kind(),
            RenderStateKind::ClearColor
        );
        assert_eq!(
            RenderState::PolygonMode(PolygonMode::Line).kind(),
            RenderStateKind::PolygonMode
        );
        assert_eq!(RenderState::AlphaBlend(true).kind(), RenderStateKind::AlphaBlend);
    }

    #[test]
    fn render_state_deserializes_from_tagged_json() {
        let state: RenderState = serde_json::from_str(r#"{"PolygonMode":"Line"}"#).unwrap();
        assert_eq!(state, RenderState::PolygonMode(PolygonMode::Line));

        let state: RenderState = serde_json::from_str(r#"{"AlphaBlend":true}"#).unwrap();
        assert_eq!(state, RenderState::AlphaBlend(true));

        assert!(serde_json::from_str::<RenderState>(r#"{"Stencil":true}"#).is_err());
    }
}
