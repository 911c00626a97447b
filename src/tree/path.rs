// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Dotted/bracket path access into nested message trees.

use serde_json::Value;

/// Split a path such as `a.b[0]["c.d"]` into its segments.
///
/// Quoted bracket segments may contain dots. An empty path has no segments
/// and addresses the root.
pub fn parse_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }

                let quote = match chars.peek() {
                    Some(&q) if q == '"' || q == '\'' => {
                        chars.next();
                        Some(q)
                    }
                    _ => None,
                };

                let mut inner = String::new();
                while let Some(c) = chars.next() {
                    match quote {
                        Some(q) if c == q => {
                            // Skip to the closing bracket
                            for rest in chars.by_ref() {
                                if rest == ']' {
                                    break;
                                }
                            }
                            break;
                        }
                        None if c == ']' => break,
                        _ => inner.push(c),
                    }
                }

                let inner = if quote.is_some() {
                    inner
                } else {
                    inner.trim().to_string()
                };
                if !inner.is_empty() {
                    segments.push(inner);
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Read the value at `path` inside `tree`.
///
/// Objects are walked by key and arrays by numeric index. Returns `None` as
/// soon as a segment is missing.
pub fn get_in<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    parse_path(path)
        .iter()
        .try_fold(tree, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}
