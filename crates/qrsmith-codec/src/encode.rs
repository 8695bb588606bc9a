//! TLV encoding: tag tree + value source -> linear wire string.
//!
//! Each node encodes as `tag(2) length(2, zero-padded decimal) value`, with
//! composite nodes embedding their children's concatenated encoding as the
//! value. Encoding is all-or-nothing: a truncated payload is unsafe to
//! transmit, so no partial string is ever returned on error.

use qrsmith_types::{Subtag, Tag, TagCode, Template, ValueFormat};
use serde_json::Value;

use crate::error::{Error, Result};

/// Flat sample-data object keyed by jsonKey
pub type ValueMap = serde_json::Map<String, Value>;

/// Maximum value length representable by the 2-digit decimal length field
const MAX_FIELD_LEN: usize = 99;

/// What to do when a required tag resolves to no value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingValuePolicy {
    /// Fail the whole encode; used for real payload submission
    #[default]
    Strict,
    /// Substitute a format-appropriate placeholder; used for previews
    Placeholder,
}

/// Encode a template's full tag tree
pub fn encode_template(
    template: &Template,
    values: &ValueMap,
    policy: MissingValuePolicy,
) -> Result<String> {
    encode_tags(&template.tags, values, policy)
}

/// Encode an ordered tag list (e.g. an in-progress wizard tree)
pub fn encode_tags(tags: &[Tag], values: &ValueMap, policy: MissingValuePolicy) -> Result<String> {
    let mut out = String::new();
    for tag in tags {
        out.push_str(&encode_tag(tag, values, policy)?);
    }
    Ok(out)
}

fn encode_tag(tag: &Tag, values: &ValueMap, policy: MissingValuePolicy) -> Result<String> {
    let value = if tag.has_child() {
        let mut block = String::new();
        for subtag in &tag.subtags {
            block.push_str(&encode_subtag(subtag, values, policy)?);
        }
        block
    } else {
        resolve_value(
            &tag.code,
            tag.is_static,
            tag.content_value.as_deref(),
            &tag.json_key,
            tag.required,
            tag.format,
            values,
            policy,
        )?
    };
    frame(&tag.code, &value, tag.max_length)
}

fn encode_subtag(subtag: &Subtag, values: &ValueMap, policy: MissingValuePolicy) -> Result<String> {
    let value = if subtag.has_child() {
        let mut block = String::new();
        for child in &subtag.subtags {
            block.push_str(&encode_subtag(child, values, policy)?);
        }
        block
    } else {
        resolve_value(
            &subtag.code,
            subtag.is_static,
            subtag.content_value.as_deref(),
            &subtag.json_key,
            subtag.required,
            subtag.format,
            values,
            policy,
        )?
    };
    frame(&subtag.code, &value, subtag.max_length)
}

/// Resolve a leaf node's value: static content, supplied sample data, or
/// (for required fields) the policy's answer to a missing value.
#[allow(clippy::too_many_arguments)]
fn resolve_value(
    code: &TagCode,
    is_static: bool,
    content_value: Option<&str>,
    json_key: &str,
    required: bool,
    format: ValueFormat,
    values: &ValueMap,
    policy: MissingValuePolicy,
) -> Result<String> {
    if is_static {
        return Ok(content_value.unwrap_or_default().to_string());
    }

    match values.get(json_key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => {
            if required {
                match policy {
                    MissingValuePolicy::Strict => Err(Error::MissingRequiredValue {
                        tag: code.clone(),
                        json_key: json_key.to_string(),
                    }),
                    MissingValuePolicy::Placeholder => Ok(format.placeholder().to_string()),
                }
            } else {
                Ok(String::new())
            }
        }
        // Numbers and booleans render in their canonical JSON form
        Some(other) => Ok(other.to_string()),
    }
}

/// Frame a resolved value: tag code, 2-digit byte length, value.
fn frame(code: &TagCode, value: &str, max_length: u32) -> Result<String> {
    let length = value.len();
    // A declared max of 0 means unconstrained
    if max_length > 0 && length > max_length as usize {
        return Err(Error::ValueTooLong {
            tag: code.clone(),
            length,
            max: max_length as usize,
        });
    }
    if length > MAX_FIELD_LEN {
        return Err(Error::ValueTooLong {
            tag: code.clone(),
            length,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(format!("{}{:02}{}", code, length, value))
}
