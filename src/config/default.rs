// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::VregConfig;

/// Get the default configuration.
pub fn default_config() -> VregConfig {
    VregConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# vreg configuration file
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Initial validation language. Leave unset to use "en", or set
# detect_language = true to read it from the system locale.
language = "en"
detect_language = false

# Seed the registry with the built-in formats and en / zh-CN messages.
presets = true

# Message rendering: "placeholder" substitutes {{ key }} from the context,
# "handlebars" renders messages as Handlebars templates.
[template]
engine = "placeholder"

# Extra formats, name = regular expression.
[formats]
slug = "^[a-z0-9]+(?:-[a-z0-9]+)*$"
semver = '^\d+\.\d+\.\d+$'

# Extra or overriding messages, merged into the built-in locales.
[locales.en]
required = "{{ title }} is required"
slug = "{{ title }} may only contain lowercase letters, digits and dashes"

[locales.zh-CN]
required = "{{ title }}是必填字段"
slug = "{{ title }}只能包含小写字母、数字和连字符"
"#
}
