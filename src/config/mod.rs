// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for vreg.
//!
//! This module handles locating, parsing and validating `vreg.toml`, and
//! turning it into a seeded [`Registry`](crate::registry::Registry).

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{find_config_file, find_config_file_from, load_config, load_config_from, parse_config};
pub use schema::*;
