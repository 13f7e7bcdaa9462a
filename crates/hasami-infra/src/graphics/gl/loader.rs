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

//! Function table loading.

use std::ffi::c_void;

use anyhow::{bail, Result};

/// Entry points the backend cannot run without. `glPolygonMode` is absent
/// from GLES, so it is not listed.
pub(crate) const REQUIRED_SYMBOLS: &[&str] = &[
    "glClear",
    "glDrawArrays",
    "glDrawElements",
    "glEnable",
    "glDisable",
    "glBlendFunc",
    "glClearColor",
    "glCreateProgram",
    "glGenBuffers",
    "glGenTextures",
];

/// Returns the required symbols `loader` cannot resolve.
pub(crate) fn missing_symbols<F>(loader: &mut F) -> Vec<&'static str>
where
    F: FnMut(&str) -> *const c_void,
{
    REQUIRED_SYMBOLS
        .iter()
        .copied()
        .filter(|symbol| loader(*symbol).is_null())
        .collect()
}

/// Resolves the function table through `loader`.
///
/// The required symbols are probed first: a context built over null
/// entries would only fail later, at the first call.
///
/// # Safety
/// The context `loader` resolves against must be current on this thread.
pub(crate) unsafe fn load_context<F>(mut loader: F) -> Result<glow::Context>
where
    F: FnMut(&str) -> *const c_void,
{
    let missing = missing_symbols(&mut loader);
    if !missing.is_empty() {
        bail!("unresolved entry points: {}", missing.join(", "));
    }
    Ok(glow::Context::from_loader_function(loader))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_without(absent: &'static [&'static str]) -> impl FnMut(&str) -> *const c_void {
        move |symbol: &str| {
            if absent.iter().any(|name| *name == symbol) {
                std::ptr::null()
            } else {
                // Never called, only checked for null.
                std::ptr::NonNull::<c_void>::dangling().as_ptr()
            }
        }
    }

    #[test]
    fn complete_table_has_no_missing_symbols() {
        let mut loader = loader_without(&[]);
        assert!(missing_symbols(&mut loader).is_empty());
    }

    #[test]
    fn every_unresolved_required_symbol_is_listed() {
        let mut loader = loader_without(&["glDrawElements", "glGenTextures", "glUnrelated"]);
        assert_eq!(
            missing_symbols(&mut loader),
            vec!["glDrawElements", "glGenTextures"]
        );
    }

    #[test]
    fn loading_fails_before_touching_the_driver() {
        let err = unsafe { load_context(|_: &str| std::ptr::null()) }.unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("unresolved entry points: glClear, "));
        assert!(message.contains("glCreateProgram"));
    }
}
