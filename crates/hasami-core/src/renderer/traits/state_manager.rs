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

use crate::renderer::api::RenderState;
use std::fmt::Debug;

/// Applies [`RenderState`] changes to a native graphics context.
///
/// Implementations hold no cached GPU state: every call reissues the native
/// command, even when the value did not change.
pub trait StateManager: Debug {
    /// Applies a single state change.
    fn apply_state(&self, state: &RenderState);

    /// Applies a sequence of state changes, in order.
    fn apply_states(&self, states: &[RenderState]) {
        for state in states {
            self.apply_state(state);
        }
    }
}
