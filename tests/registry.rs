// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Registry behaviour through the public API.

use serde_json::{json, Value};
use std::sync::Arc;
use vreg::presets::builtin_locales;
use vreg::registry::{
    fixed_provider, handlebars_engine, render_placeholders, validator, Registry, RuleCandidate,
    ValidatorResponse,
};

fn message_rule(message: &'static str) -> vreg::registry::ValidatorFunction {
    validator(move |_, _, _| ValidatorResponse::from(message))
}

fn run_rule(registry: &Registry, name: &str) -> Option<ValidatorResponse> {
    registry
        .rule(name)
        .map(|rule| rule(&json!("value"), &json!({}), &json!({})))
}

#[test]
fn locale_registrations_merge_right_biased() {
    let mut registry = Registry::new();
    registry.register_locale(json!({
        "en": { "required": "A required", "nested": { "x": "A x", "y": "A y" } }
    }));
    registry.register_locale(json!({
        "en": { "nested": { "y": "B y" }, "extra": "B extra" }
    }));

    assert_eq!(
        registry.locale_by_path("required", None),
        Some(&json!("A required"))
    );
    assert_eq!(registry.locale_by_path("nested.x", None), Some(&json!("A x")));
    assert_eq!(registry.locale_by_path("nested.y", None), Some(&json!("B y")));
    assert_eq!(registry.locale_by_path("extra", None), Some(&json!("B extra")));
}

#[test]
fn resolve_locale_code_substring_and_fallback() {
    let mut registry = Registry::new();
    registry.register_locale(json!({ "zh": { "pattern": "格式不正确" } }));

    assert_eq!(registry.resolve_locale_code("zh-CN"), "zh");
    assert_eq!(registry.resolve_locale_code("fr"), "en");
}

#[test]
fn validation_message_fallback_chain() {
    let mut registry = Registry::new();
    registry.set_language("zh");
    assert_eq!(registry.validation_message("required"), None);

    registry.register_locale(json!({ "en": { "pattern": "Invalid format" } }));
    assert_eq!(registry.validation_message("required"), Some("Invalid format"));

    registry.register_locale(json!({ "zh": { "pattern": "格式不正确" } }));
    assert_eq!(registry.validation_message("required"), Some("格式不正确"));

    registry.register_locale(json!({ "zh": { "required": "必填" } }));
    assert_eq!(registry.validation_message("required"), Some("必填"));
}

#[test]
fn non_function_rules_are_ignored() {
    let mut registry = Registry::new();
    registry.register_rules([("x", json!(123))]);
    registry.register_merge_rules([("y", json!("not a function"))]);

    assert!(registry.rule("x").is_none());
    assert!(registry.rule("y").is_none());
    assert!(registry.rules().is_empty());
}

#[test]
fn merge_rules_override_global_rules() {
    let mut registry = Registry::new();
    registry.register_rules([("a", message_rule("f1"))]);
    registry.register_merge_rules([("a", message_rule("f2"))]);

    assert_eq!(
        run_rule(&registry, "a"),
        Some(ValidatorResponse::Error("f2".to_string()))
    );

    // Later global registrations still lose to the merge tier
    registry.register_rules([("a", message_rule("f3"))]);
    assert_eq!(
        run_rule(&registry, "a"),
        Some(ValidatorResponse::Error("f2".to_string()))
    );
}

#[test]
fn mixed_rule_batch_keeps_only_functions() {
    let mut registry = Registry::new();
    registry.register_rules([
        ("ok", RuleCandidate::Function(message_rule("ok"))),
        ("bad", RuleCandidate::Value(json!({ "required": true }))),
    ]);

    let rules = registry.rules();
    assert_eq!(rules.len(), 1);
    assert!(rules.contains_key("ok"));
}

#[test]
fn rules_receive_value_rule_and_context() {
    let mut registry = Registry::new();
    registry.register_rules([(
        "max",
        validator(|value: &Value, rule: &Value, _context: &Value| {
            let max = rule["max"].as_u64().unwrap_or(u64::MAX);
            let len = value.as_str().map(|s| s.chars().count() as u64).unwrap_or(0);
            (len <= max).into()
        }),
    )]);

    let rule = registry.rule("max").unwrap();
    assert_eq!(
        rule(&json!("abc"), &json!({ "max": 5 }), &json!({})),
        ValidatorResponse::Valid
    );
    assert!(rule(&json!("abcdef"), &json!({ "max": 5 }), &json!({})).is_error());
}

#[test]
fn formats_compile_on_registration() {
    let mut registry = Registry::new();
    registry.register_formats([("email", "^.+@.+$")]);

    let email = registry.format("email").unwrap();
    assert_eq!(email.as_str(), "^.+@.+$");
    assert!(email.is_match("someone@example.com"));
    assert!(registry.formats().contains_key("email"));
}

#[test]
fn unsupported_formats_are_ignored() {
    let mut registry = Registry::new();
    registry.register_formats([
        ("n", json!(1)),
        ("b", json!(true)),
        ("bad", json!("[unterminated")),
    ]);
    assert!(registry.formats().is_empty());
}

#[test]
fn set_language_empty_resets_to_default() {
    let mut registry = Registry::builder()
        .language_provider(fixed_provider("ja"))
        .build();
    assert_eq!(registry.language(), "ja");

    registry.set_language("");
    assert_eq!(registry.language(), "en");
}

#[test]
fn identical_locale_registration_is_idempotent() {
    let tree = json!({ "en": { "required": "Required", "min": { "string": "Short" } } });

    let mut once = Registry::new();
    once.register_locale(tree.clone());

    let mut twice = Registry::new();
    twice.register_locale(tree.clone());
    twice.register_locale(tree);

    assert_eq!(once.locales().messages(), twice.locales().messages());
    assert_eq!(
        once.validation_message("min.string"),
        twice.validation_message("min.string")
    );
}

#[test]
fn template_engine_slot() {
    let mut registry = Registry::with_presets();
    assert!(registry.message_template_engine().is_none());

    registry.register_message_template_engine(handlebars_engine());
    let template = registry.validation_message("len").unwrap().to_string();
    let rendered = registry.render_message(
        &ValidatorResponse::Error(template),
        &json!({ "len": 8 }),
    );
    assert_eq!(rendered, "The length or number of entries must be 8");

    registry.register_message_template_engine(Arc::new(
        |response: &ValidatorResponse, _: &Value| format!("[{}]", response.message().unwrap_or("")),
    ));
    let rendered = registry.render_message(&ValidatorResponse::Warning("w".to_string()), &json!({}));
    assert_eq!(rendered, "[w]");
}

#[test]
fn presets_resolve_chinese_messages() {
    let mut registry = Registry::with_presets();
    registry.set_language("zh-cn");

    assert_eq!(registry.resolve_locale_code(""), "zh-CN");
    assert_eq!(registry.validation_message("email"), Some("该字段不是合法的邮箱格式"));
    assert_eq!(
        registry.locale_by_path("email", Some("en")),
        Some(&json!("This field must be a valid email address"))
    );
}

#[test]
fn handlebars_renders_every_preset_message() {
    let engine = handlebars_engine();
    let locales = builtin_locales();

    for (language, messages) in locales.as_object().unwrap() {
        let messages = messages.as_object().unwrap();
        let context = Value::Object(
            messages
                .keys()
                .map(|key| (key.clone(), json!(42)))
                .collect(),
        );

        for (key, template) in messages {
            let template = template.as_str().unwrap();
            let rendered = engine(&ValidatorResponse::Error(template.to_string()), &context);

            assert!(
                !rendered.contains("{{"),
                "{} message '{}' left a placeholder: {}",
                language,
                key,
                rendered
            );
            assert_eq!(rendered, render_placeholders(template, &context));
            if template.contains("{{") {
                assert!(rendered.contains("42"), "{} message '{}' not filled", language, key);
            }
        }
    }
}
