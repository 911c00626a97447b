// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in formats.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Built-in format patterns.
    static ref BUILTIN_FORMATS: Vec<(&'static str, Regex)> = vec![
        (
            "url",
            Regex::new(r"(?i)^(?:(?:https?|ftp):)?//(?:\S+(?::\S*)?@)?(?:(?:\d{1,3}\.){3}\d{1,3}|(?:[a-z\x{00a1}-\x{ffff}0-9]-*)*[a-z\x{00a1}-\x{ffff}0-9]+(?:\.(?:[a-z\x{00a1}-\x{ffff}0-9]-*)*[a-z\x{00a1}-\x{ffff}0-9]+)*\.[a-z\x{00a1}-\x{ffff}]{2,})(?::\d{2,5})?(?:[/?#]\S*)?$").unwrap()
        ),
        (
            "email",
            Regex::new(r"^\w+(?:[-+.]\w+)*@\w+(?:[-.]\w+)*\.\w+(?:[-.]\w+)*$").unwrap()
        ),
        (
            "ipv6",
            Regex::new(r"^(?:(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}|(?:[0-9a-fA-F]{1,4}:){1,7}:|(?:[0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}|(?:[0-9a-fA-F]{1,4}:){1,5}(?::[0-9a-fA-F]{1,4}){1,2}|(?:[0-9a-fA-F]{1,4}:){1,4}(?::[0-9a-fA-F]{1,4}){1,3}|(?:[0-9a-fA-F]{1,4}:){1,3}(?::[0-9a-fA-F]{1,4}){1,4}|(?:[0-9a-fA-F]{1,4}:){1,2}(?::[0-9a-fA-F]{1,4}){1,5}|[0-9a-fA-F]{1,4}:(?::[0-9a-fA-F]{1,4}){1,6}|:(?:(?::[0-9a-fA-F]{1,4}){1,7}|:))$").unwrap()
        ),
        (
            "ipv4",
            Regex::new(r"^(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)$").unwrap()
        ),
        (
            "number",
            Regex::new(r"^[+-]?\d+(?:\.\d+)?$").unwrap()
        ),
        (
            "integer",
            Regex::new(r"^[+-]?\d+$").unwrap()
        ),
        (
            "qq",
            Regex::new(r"^(?:\+?[1-9]\d*|0)$").unwrap()
        ),
        (
            "phone",
            Regex::new(r"^\d{3}-\d{8}$|^\d{4}-\d{7}$|^\d{11}$").unwrap()
        ),
        (
            "idcard",
            Regex::new(r"^\d{15}$|^\d{17}[\dxX]$").unwrap()
        ),
        (
            "money",
            Regex::new(r"^[\x{0024}\x{00A2}\x{00A3}\x{00A4}\x{20AC}\x{00A5}\x{20B1}\x{20B9}\x{FFE5}]\s*(?:\d+,?)+(?:\.\d+)?\s*$").unwrap()
        ),
        (
            "zh",
            Regex::new(r"^[\x{4e00}-\x{9fa5}]+$").unwrap()
        ),
        (
            "date",
            Regex::new(r"^[0-9]+[./-][0-9]+[./-][0-9]+\s*(?:[0-9]+\s*:\s*[0-9]+\s*:\s*[0-9]+)?$").unwrap()
        ),
        (
            "zip",
            Regex::new(r"^[0-9]{6}$").unwrap()
        ),
    ];
}

/// Get the built-in formats.
pub fn builtin_formats() -> Vec<(&'static str, Regex)> {
    BUILTIN_FORMATS.clone()
}

/// Names of the built-in formats.
pub fn builtin_format_names() -> Vec<&'static str> {
    BUILTIN_FORMATS.iter().map(|(name, _)| *name).collect()
}
