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

//! Settings consumed by a renderer at initialization.

use serde::{Deserialize, Serialize};

/// Severity of a driver diagnostic message, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DebugSeverity {
    /// Informational chatter (resource allocation notes and the like).
    Notification,
    /// Minor issues, e.g. redundant state changes.
    Low,
    /// Performance warnings or deprecated usage.
    Medium,
    /// Errors and undefined behavior.
    High,
}

/// A collection of settings that affect how the renderer is brought up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    /// Registers a driver debug-message callback during initialization.
    /// Defaults to on in debug builds and off in release builds.
    pub debug_output: bool,
    /// Driver messages below this severity are ignored.
    pub debug_min_severity: DebugSeverity,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            debug_output: cfg!(debug_assertions),
            debug_min_severity: DebugSeverity::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(DebugSeverity::High > DebugSeverity::Medium);
        assert!(DebugSeverity::Medium > DebugSeverity::Low);
        assert!(DebugSeverity::Low > DebugSeverity::Notification);
    }

    #[test]
    fn default_settings_follow_build_profile() {
        let settings = RendererSettings::default();
        assert_eq!(settings.debug_output, cfg!(debug_assertions));
        assert_eq!(settings.debug_min_severity, DebugSeverity::High);
    }

    #[test]
    fn partial_settings_fill_in_defaults() {
        let settings: RendererSettings =
            serde_json::from_str(r#"{ "debug_min_severity": "Medium" }"#).unwrap();
        assert_eq!(settings.debug_min_severity, DebugSeverity::Medium);
        assert_eq!(settings.debug_output, cfg!(debug_assertions));
    }
}
