//! Fixtures for sample template generation and placement.
//!
//! Provides the canonical till-payment template used across integration
//! tests, matching value maps, and helpers to place template files into
//! temporary test environments.

use anyhow::Result;
use qrsmith_codec::ValueMap;
use qrsmith_types::{Subtag, Tag, TagCode, Template, ValueFormat};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

fn tag(code: &str) -> TagCode {
    TagCode::new(code).expect("fixture tag code")
}

/// Till-payment template with a composite merchant-account tag.
///
/// Encodes to `0002 01 | 26(00 "GD", 01 tillNumber) | 5204 0000 |
/// 54 amount | 5802 KE | 59 merchantName` given [`sample_values`].
pub fn till_template() -> Template {
    Template {
        id: 1,
        name: "Till Payment".to_string(),
        journey_id: "01".to_string(),
        tags: vec![
            Tag {
                code: tag("00"),
                content_desc: "Payload Format Indicator".to_string(),
                json_key: String::new(),
                content_value: Some("01".to_string()),
                format: ValueFormat::Text,
                min_length: 0,
                max_length: 2,
                is_static: true,
                is_dynamic: false,
                required: true,
                subtags: Vec::new(),
            },
            Tag {
                code: tag("26"),
                content_desc: "Merchant Account Information".to_string(),
                json_key: String::new(),
                content_value: None,
                format: ValueFormat::Text,
                min_length: 0,
                max_length: 0,
                is_static: false,
                is_dynamic: false,
                required: false,
                subtags: vec![
                    Subtag {
                        code: tag("00"),
                        content_desc: "Globally Unique Identifier".to_string(),
                        json_key: String::new(),
                        content_value: Some("GD".to_string()),
                        format: ValueFormat::Text,
                        min_length: 0,
                        max_length: 0,
                        is_static: true,
                        is_dynamic: false,
                        required: true,
                        subtags: Vec::new(),
                    },
                    Subtag {
                        code: tag("01"),
                        content_desc: "Till Number".to_string(),
                        json_key: "tillNumber".to_string(),
                        content_value: None,
                        format: ValueFormat::Numeric,
                        min_length: 0,
                        max_length: 0,
                        is_static: false,
                        is_dynamic: true,
                        required: true,
                        subtags: Vec::new(),
                    },
                ],
            },
            Tag {
                code: tag("52"),
                content_desc: "Merchant Category Code".to_string(),
                json_key: String::new(),
                content_value: Some("0000".to_string()),
                format: ValueFormat::Text,
                min_length: 0,
                max_length: 4,
                is_static: true,
                is_dynamic: false,
                required: true,
                subtags: Vec::new(),
            },
            Tag {
                code: tag("54"),
                content_desc: "Transaction Amount".to_string(),
                json_key: "amount".to_string(),
                content_value: None,
                format: ValueFormat::Numeric,
                min_length: 0,
                max_length: 13,
                is_static: false,
                is_dynamic: true,
                required: true,
                subtags: Vec::new(),
            },
            Tag {
                code: tag("58"),
                content_desc: "Country Code".to_string(),
                json_key: String::new(),
                content_value: Some("KE".to_string()),
                format: ValueFormat::Text,
                min_length: 2,
                max_length: 2,
                is_static: true,
                is_dynamic: false,
                required: true,
                subtags: Vec::new(),
            },
            Tag {
                code: tag("59"),
                content_desc: "Merchant Name".to_string(),
                json_key: "merchantName".to_string(),
                content_value: None,
                format: ValueFormat::Text,
                min_length: 0,
                max_length: 25,
                is_static: false,
                is_dynamic: true,
                required: true,
                subtags: Vec::new(),
            },
        ],
    }
}

/// Value map filling every dynamic key of [`till_template`].
pub fn sample_values() -> ValueMap {
    let mut values = ValueMap::new();
    values.insert("tillNumber".to_string(), json!("123456"));
    values.insert("amount".to_string(), json!("1250.00"));
    values.insert("merchantName".to_string(), json!("Acme Stores"));
    values
}

/// Write a template as pretty JSON into `dir`, returning the file path.
pub fn write_template_file(dir: &Path, template: &Template) -> Result<PathBuf> {
    let path = dir.join(format!("template-{}.json", template.id));
    let body = serde_json::to_string_pretty(template)?;
    fs::write(&path, body)?;
    Ok(path)
}
