// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Nested message tree utilities.
//!
//! Locale messages are stored as JSON trees. This module provides path
//! lookup and the right-biased deep merge used when locales are registered.

mod merge;
mod path;

pub use merge::deep_merge;
pub use path::{get_in, parse_path};
