use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Two-digit tag identifier ("00" through "99") as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCode(String);

impl TagCode {
    /// Create a TagCode, validating the two-decimal-digit form
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if code.len() == 2 && code.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(code))
        } else {
            Err(Error::InvalidTagCode(code))
        }
    }

    /// Create a TagCode from a numeric identifier (0..=99), zero-padded
    pub fn from_number(n: u8) -> Result<Self> {
        if n > 99 {
            return Err(Error::InvalidTagCode(n.to_string()));
        }
        Ok(Self(format!("{:02}", n)))
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TagCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for TagCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Declared content format of a tag value
///
/// Serialized as the original single-letter codes ("S"/"N"/"A").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueFormat {
    #[default]
    #[serde(rename = "S")]
    Text,
    #[serde(rename = "N")]
    Numeric,
    #[serde(rename = "A")]
    Alphanumeric,
}

impl ValueFormat {
    /// Placeholder value substituted for required fields with no data
    pub fn placeholder(&self) -> &'static str {
        match self {
            ValueFormat::Numeric => "0",
            ValueFormat::Text | ValueFormat::Alphanumeric => "",
        }
    }
}

/// Top-level node of a template's tag tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(rename = "tagId")]
    pub code: TagCode,
    pub content_desc: String,
    #[serde(default)]
    pub json_key: String,
    #[serde(default)]
    pub content_value: Option<String>,
    #[serde(default)]
    pub format: ValueFormat,
    #[serde(default)]
    pub min_length: u32,
    #[serde(default)]
    pub max_length: u32,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_dynamic: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub subtags: Vec<Subtag>,
}

impl Tag {
    /// Whether this tag is a composite (encodes its children as its value)
    pub fn has_child(&self) -> bool {
        !self.subtags.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.min_length > self.max_length && self.max_length != 0 {
            return Err(Error::LengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        validate_siblings(&self.subtags)
    }
}

/// Nested node beneath a tag, nestable to arbitrary depth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtag {
    #[serde(rename = "subTagId")]
    pub code: TagCode,
    pub content_desc: String,
    #[serde(default)]
    pub json_key: String,
    #[serde(default)]
    pub content_value: Option<String>,
    #[serde(default)]
    pub format: ValueFormat,
    #[serde(default)]
    pub min_length: u32,
    #[serde(default)]
    pub max_length: u32,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_dynamic: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub subtags: Vec<Subtag>,
}

impl Subtag {
    pub fn has_child(&self) -> bool {
        !self.subtags.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.min_length > self.max_length && self.max_length != 0 {
            return Err(Error::LengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        validate_siblings(&self.subtags)
    }
}

fn validate_siblings(subtags: &[Subtag]) -> Result<()> {
    for (i, subtag) in subtags.iter().enumerate() {
        if subtags[..i].iter().any(|s| s.code == subtag.code) {
            return Err(Error::DuplicateTag(subtag.code.to_string()));
        }
        subtag.validate()?;
    }
    Ok(())
}

/// A named, ordered tag tree describing a QR payload's structure for one journey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: u32,
    pub name: String,
    pub journey_id: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Template {
    /// Check structural invariants: unique sibling codes, sane length ranges
    pub fn validate(&self) -> Result<()> {
        for (i, tag) in self.tags.iter().enumerate() {
            if self.tags[..i].iter().any(|t| t.code == tag.code) {
                return Err(Error::DuplicateTag(tag.code.to_string()));
            }
            tag.validate()?;
        }
        Ok(())
    }
}
