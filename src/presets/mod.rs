// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in formats and locale messages.
//!
//! These are what a form layer usually registers at startup: common formats
//! (email, url, ip addresses, numbers, ...) and matching error messages in
//! English and Simplified Chinese.

mod formats;
mod locales;

pub use formats::{builtin_format_names, builtin_formats};
pub use locales::builtin_locales;

use crate::registry::Registry;

/// Register the built-in formats and locales.
pub fn install(registry: &mut Registry) {
    registry.register_formats(builtin_formats());
    registry.register_locale(builtin_locales());
    tracing::debug!("Installed built-in formats and locales");
}
