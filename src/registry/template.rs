// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Message template rendering.

use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::Arc;

use super::response::ValidatorResponse;
use crate::tree::get_in;

lazy_static! {
    /// Matches `{{ path }}` placeholders, where path is anything `parse_path` reads.
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{\{\s*([^{}]+?)\s*\}\}").unwrap();
}

/// A message template engine: `(response, context) -> rendered message`.
pub type MessageTemplateEngine = Arc<dyn Fn(&ValidatorResponse, &Value) -> String + Send + Sync>;

/// Substitute `{{ path }}` placeholders with values read from `context`.
///
/// Paths use the `a.b[0]["c.d"]` grammar. Missing values render as empty
/// strings. Strings are inserted verbatim, other JSON values in their JSON form.
pub fn render_placeholders(template: &str, context: &Value) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            let path = caps[1].trim();
            if path.is_empty() {
                return caps[0].to_string();
            }
            placeholder_text(get_in(context, path))
        })
        .into_owned()
}

fn placeholder_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Render `response` with the built-in placeholder substitution.
pub fn render_default(response: &ValidatorResponse, context: &Value) -> String {
    response
        .message()
        .map(|message| render_placeholders(message, context))
        .unwrap_or_default()
}

/// An engine backed by Handlebars.
///
/// HTML escaping is disabled since messages are plain text. Templates that
/// fail to render fall back to the raw message.
///
/// The built-in `len` helper is replaced so that a bare `{{len}}` reads the
/// `len` context value, which the preset messages rely on.
pub fn handlebars_engine() -> MessageTemplateEngine {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.register_helper("len", Box::new(len_helper));

    Arc::new(move |response: &ValidatorResponse, context: &Value| {
        let Some(message) = response.message() else {
            return String::new();
        };

        match handlebars.render_template(message, context) {
            Ok(rendered) => rendered,
            Err(e) => {
                tracing::warn!("Failed to render message template '{}': {}", message, e);
                message.to_string()
            }
        }
    })
}

/// `{{len items}}` counts entries, a bare `{{len}}` renders the `len` value.
fn len_helper(
    h: &Helper,
    _: &Handlebars,
    ctx: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let text = match h.param(0).map(|param| param.value()) {
        Some(Value::Array(items)) => items.len().to_string(),
        Some(Value::Object(map)) => map.len().to_string(),
        Some(Value::String(s)) => s.chars().count().to_string(),
        Some(_) => "0".to_string(),
        None => placeholder_text(ctx.data().get("len")),
    };
    out.write(&text)?;
    Ok(())
}
