//! Sample payload preview: tag tree + optional sample data -> JSON object
//! and TLV string, as shown side by side in the template views.

use qrsmith_types::{Subtag, Tag, Template};
use serde_json::{Map, Value};

use crate::encode::{MissingValuePolicy, ValueMap, encode_template};
use crate::error::Result;

/// The two derived representations of a template's sample payload
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePreview {
    /// Flat jsonKey -> value object covering every leaf tag/subtag
    pub json: Value,
    /// TLV string over the same values
    pub tlv: String,
}

impl TemplatePreview {
    pub fn json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.json).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Build both preview representations for a template.
///
/// Pure and idempotent: the tag tree is never mutated, and the same inputs
/// always produce the same preview. Required leaves with no supplied value
/// fall back to a format-appropriate placeholder rather than failing.
pub fn build_preview(template: &Template, sample: Option<&ValueMap>) -> Result<TemplatePreview> {
    let empty = ValueMap::new();
    let values = sample.unwrap_or(&empty);

    let mut object = Map::new();
    for tag in &template.tags {
        collect_tag(tag, values, &mut object);
    }

    let tlv = encode_template(template, values, MissingValuePolicy::Placeholder)?;

    Ok(TemplatePreview {
        json: Value::Object(object),
        tlv,
    })
}

fn collect_tag(tag: &Tag, values: &ValueMap, out: &mut Map<String, Value>) {
    if tag.has_child() {
        for subtag in &tag.subtags {
            collect_subtag(subtag, values, out);
        }
        return;
    }
    insert_leaf(
        &tag.json_key,
        tag.is_static,
        tag.content_value.as_deref(),
        tag.required,
        tag.format.placeholder(),
        values,
        out,
    );
}

fn collect_subtag(subtag: &Subtag, values: &ValueMap, out: &mut Map<String, Value>) {
    if subtag.has_child() {
        for child in &subtag.subtags {
            collect_subtag(child, values, out);
        }
        return;
    }
    insert_leaf(
        &subtag.json_key,
        subtag.is_static,
        subtag.content_value.as_deref(),
        subtag.required,
        subtag.format.placeholder(),
        values,
        out,
    );
}

fn insert_leaf(
    json_key: &str,
    is_static: bool,
    content_value: Option<&str>,
    required: bool,
    placeholder: &str,
    values: &ValueMap,
    out: &mut Map<String, Value>,
) {
    if json_key.is_empty() {
        return;
    }
    let value = if is_static {
        Value::String(content_value.unwrap_or_default().to_string())
    } else {
        match values.get(json_key) {
            Some(Value::Null) | None => {
                if required {
                    Value::String(placeholder.to_string())
                } else {
                    Value::String(String::new())
                }
            }
            Some(v) => v.clone(),
        }
    };
    out.insert(json_key.to_string(), value);
}
