// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default-language providers.

use std::sync::Arc;
use sys_locale::get_locale;

/// Supplies the initial language for a new registry.
///
/// Returning `None` (or an empty string) falls back to `"en"`.
pub type LanguageProvider = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Probe the host system locale for a language code.
///
/// Asks the operating system through `sys_locale` and normalizes the answer,
/// so POSIX values such as `zh_CN.UTF-8` come back as `zh-CN`.
pub fn system_language() -> Option<String> {
    let raw = get_locale()?;
    let language = normalize_locale(&raw);
    match language {
        Some(ref language) => tracing::debug!("Detected system language '{}'", language),
        None => tracing::debug!("System locale '{}' carries no language", raw),
    }
    language
}

/// Turn a POSIX locale such as `zh_CN.UTF-8@latin` into `zh-CN`.
///
/// `C`, `POSIX` and empty values carry no language and yield `None`.
pub fn normalize_locale(raw: &str) -> Option<String> {
    let base = raw
        .split(|c: char| c == '.' || c == '@')
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
        return None;
    }

    Some(base.replace('_', "-"))
}

/// A provider that probes the host system locale.
pub fn env_provider() -> LanguageProvider {
    Arc::new(system_language)
}

/// A provider that always returns `language`.
pub fn fixed_provider(language: impl Into<String>) -> LanguageProvider {
    let language = language.into();
    Arc::new(move || Some(language.clone()))
}
