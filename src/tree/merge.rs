// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Structural merge of nested message trees.

use serde_json::Value;

/// Merge `source` into `target`, right-biased.
///
/// Objects merge key by key, recursing where both sides hold an object.
/// Any other value in `source` (strings, arrays, numbers) replaces the value
/// in `target`. Keys new to `target` are appended in `source` order.
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, incoming) in source_map {
                match target_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, incoming),
                    None => {
                        target_map.insert(key, incoming);
                    }
                }
            }
        }
        (slot, incoming) => *slot = incoming,
    }
}
