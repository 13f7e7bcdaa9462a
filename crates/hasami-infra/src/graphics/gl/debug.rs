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

//! Routing of driver debug messages into the `log` facade.

use hasami_core::renderer::DebugSeverity;
use log::Level;

/// Classifies a native `GL_DEBUG_SEVERITY_*` value. Values outside the four
/// defined severities are not classified.
pub(crate) fn severity_from_gl(severity: u32) -> Option<DebugSeverity> {
    match severity {
        glow::DEBUG_SEVERITY_HIGH => Some(DebugSeverity::High),
        glow::DEBUG_SEVERITY_MEDIUM => Some(DebugSeverity::Medium),
        glow::DEBUG_SEVERITY_LOW => Some(DebugSeverity::Low),
        glow::DEBUG_SEVERITY_NOTIFICATION => Some(DebugSeverity::Notification),
        _ => None,
    }
}

pub(crate) fn log_level(severity: DebugSeverity) -> Level {
    match severity {
        DebugSeverity::High => Level::Error,
        DebugSeverity::Medium => Level::Warn,
        DebugSeverity::Low => Level::Info,
        DebugSeverity::Notification => Level::Debug,
    }
}

fn source_name(source: u32) -> &'static str {
    match source {
        glow::DEBUG_SOURCE_API => "api",
        glow::DEBUG_SOURCE_WINDOW_SYSTEM => "window system",
        glow::DEBUG_SOURCE_SHADER_COMPILER => "shader compiler",
        glow::DEBUG_SOURCE_THIRD_PARTY => "third party",
        glow::DEBUG_SOURCE_APPLICATION => "application",
        _ => "other",
    }
}

fn type_name(kind: u32) -> &'static str {
    match kind {
        glow::DEBUG_TYPE_ERROR => "error",
        glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "deprecated behavior",
        glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "undefined behavior",
        glow::DEBUG_TYPE_PORTABILITY => "portability",
        glow::DEBUG_TYPE_PERFORMANCE => "performance",
        glow::DEBUG_TYPE_MARKER => "marker",
        _ => "other",
    }
}

/// Logs a driver message if its severity is at least `min_severity`.
///
/// Returns whether the message was reported.
pub(crate) fn report(
    min_severity: DebugSeverity,
    source: u32,
    kind: u32,
    id: u32,
    severity: u32,
    message: &str,
) -> bool {
    let Some(severity) = severity_from_gl(severity) else {
        return false;
    };
    if severity < min_severity {
        return false;
    }
    log::log!(
        log_level(severity),
        "GL debug [{} / {}] #{id}: {message}",
        source_name(source),
        type_name(kind)
    );
    true
}
