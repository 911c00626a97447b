// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in locale messages.

use serde_json::{json, Value};

/// English messages.
fn en() -> Value {
    json!({
        "pattern": "This field does not match the expected pattern",
        "invalid": "This field is invalid",
        "required": "This field is required",
        "number": "This field must be a number",
        "integer": "This field must be an integer",
        "url": "This field must be a valid URL",
        "email": "This field must be a valid email address",
        "ipv6": "This field must be a valid IPv6 address",
        "ipv4": "This field must be a valid IPv4 address",
        "idcard": "This field must be a valid ID card number",
        "qq": "This field must be a valid QQ number",
        "phone": "This field must be a valid phone number",
        "money": "This field must be a valid currency amount",
        "zh": "This field must contain only Chinese characters",
        "date": "This field must be a valid date",
        "zip": "This field must be a valid postal code",
        "len": "The length or number of entries must be {{len}}",
        "min": "The length or number of entries must be at least {{min}}",
        "max": "The length or number of entries must be at most {{max}}",
        "minLength": "The length must be at least {{minLength}}",
        "maxLength": "The length must be at most {{maxLength}}",
        "minItems": "There must be at least {{minItems}} entries",
        "maxItems": "There must be at most {{maxItems}} entries",
        "minimum": "The value cannot be less than {{minimum}}",
        "maximum": "The value cannot be greater than {{maximum}}",
        "exclusiveMinimum": "The value must be greater than {{exclusiveMinimum}}",
        "exclusiveMaximum": "The value must be less than {{exclusiveMaximum}}",
        "minProperties": "There must be at least {{minProperties}} properties",
        "maxProperties": "There must be at most {{maxProperties}} properties",
        "multipleOf": "The value must be a multiple of {{multipleOf}}",
        "uniqueItems": "The entries must be unique",
        "const": "The value must be {{const}}",
        "enum": "The value must be one of {{enum}}",
        "whitespace": "This field cannot be blank"
    })
}

/// Simplified Chinese messages.
fn zh_cn() -> Value {
    json!({
        "pattern": "该字段不符合预期格式",
        "invalid": "该字段不合法",
        "required": "该字段是必填字段",
        "number": "该字段不是合法的数字",
        "integer": "该字段不是合法的整数",
        "url": "该字段不是合法的URL",
        "email": "该字段不是合法的邮箱格式",
        "ipv6": "该字段不是合法的ipv6格式",
        "ipv4": "该字段不是合法的ipv4格式",
        "idcard": "该字段不是合法的身份证格式",
        "qq": "该字段不符合QQ号格式",
        "phone": "该字段不是有效的手机号",
        "money": "该字段不是有效的货币格式",
        "zh": "该字段不是合法的中文字符串",
        "date": "该字段不是合法的日期格式",
        "zip": "该字段不是合法的邮编格式",
        "len": "长度或条目数必须为{{len}}",
        "min": "长度或条目数不能小于{{min}}",
        "max": "长度或条目数不能大于{{max}}",
        "minLength": "长度不能小于{{minLength}}",
        "maxLength": "长度不能大于{{maxLength}}",
        "minItems": "条目数不能小于{{minItems}}",
        "maxItems": "条目数不能大于{{maxItems}}",
        "minimum": "数值不能小于{{minimum}}",
        "maximum": "数值不能大于{{maximum}}",
        "exclusiveMinimum": "数值必须大于{{exclusiveMinimum}}",
        "exclusiveMaximum": "数值必须小于{{exclusiveMaximum}}",
        "minProperties": "属性数不能小于{{minProperties}}",
        "maxProperties": "属性数不能大于{{maxProperties}}",
        "multipleOf": "数值必须是{{multipleOf}}的整数倍",
        "uniqueItems": "条目不能重复",
        "const": "字段值必须等于{{const}}",
        "enum": "字段值必须为{{enum}}之一",
        "whitespace": "该字段不能为空白字符串"
    })
}

/// Get the built-in locale tree, `{ language: { key: message } }`.
pub fn builtin_locales() -> Value {
    json!({
        "en": en(),
        "zh-CN": zh_cn(),
    })
}
