//! Schema-less TLV decoding: wire string -> depth-annotated entry list.
//!
//! The decoder never discards work: everything parsed before a failure is
//! returned alongside the error, so a viewer can show the valid prefix and
//! flag the rest.

use qrsmith_types::TagCode;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// One decoded tag/length/value record annotated with nesting depth
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlvEntry {
    pub tag: String,
    pub length: String,
    pub value: String,
    pub depth: usize,
}

/// A raw top-level frame borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Byte offset of the frame's tag within the scanned string
    pub offset: usize,
    pub tag: &'a str,
    pub length: &'a str,
    pub value: &'a str,
}

/// Restartable cursor over one nesting level of a TLV string.
///
/// Yields frames until the input is exhausted or a frame is malformed; after
/// an error the scanner is fused. Scanning the same string twice yields
/// identical results: there is no state beyond the cursor.
#[derive(Debug, Clone)]
pub struct TlvScanner<'a> {
    input: &'a str,
    cursor: usize,
    failed: bool,
}

impl<'a> TlvScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: 0,
            failed: false,
        }
    }

    fn read_frame(&mut self) -> Result<Frame<'a>> {
        let offset = self.cursor;
        let tag = Self::take(self, offset, 2, "tag identifier")?;

        let length_field = Self::take(self, offset + 2, 2, "length field")?;
        let bytes = length_field.as_bytes();
        if !bytes.iter().all(|b| b.is_ascii_digit()) {
            return Err(Error::Malformed {
                offset: offset + 2,
                reason: format!("length field {:?} is not numeric", length_field),
            });
        }
        let length = usize::from(bytes[0] - b'0') * 10 + usize::from(bytes[1] - b'0');

        let value = Self::take(self, offset + 4, length, "value")?;
        self.cursor = offset + 4 + length;
        Ok(Frame {
            offset,
            tag,
            length: length_field,
            value,
        })
    }

    /// Slice `len` bytes starting at `start`, reporting the failing field's
    /// offset when the input runs out
    fn take(&self, start: usize, len: usize, what: &str) -> Result<&'a str> {
        let remaining = self.input.len().saturating_sub(start);
        if remaining < len {
            return Err(Error::Malformed {
                offset: start,
                reason: format!("{} requires {} characters, {} remain", what, len, remaining),
            });
        }
        self.input.get(start..start + len).ok_or_else(|| Error::Malformed {
            offset: start,
            reason: format!("{} ends inside a multi-byte character", what),
        })
    }
}

impl<'a> Iterator for TlvScanner<'a> {
    type Item = Result<Frame<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.input.len() {
            return None;
        }
        match self.read_frame() {
            Ok(frame) => Some(Ok(frame)),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Controls the composite-vs-leaf decision for nested display
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Tags known to carry embedded TLV blocks. `None` falls back to the
    /// shape heuristic: a value nests when it strictly reparses as TLV with
    /// no empty-valued frames. An explicit set only requires a clean reparse.
    pub composite_tags: Option<BTreeSet<TagCode>>,
}

impl DecodeOptions {
    /// Restrict nesting to an explicit set of composite tags
    pub fn with_composite_tags(tags: impl IntoIterator<Item = TagCode>) -> Self {
        Self {
            composite_tags: Some(tags.into_iter().collect()),
        }
    }
}

/// Decode outcome: every successfully parsed entry, plus the error that
/// stopped parsing, if any
#[derive(Debug, Clone, PartialEq)]
pub struct TlvDecode {
    pub entries: Vec<TlvEntry>,
    pub error: Option<Error>,
}

impl TlvDecode {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Parse a TLV string into a flat, depth-annotated entry sequence.
///
/// Entries appear in depth-first order: each composite frame is followed by
/// its children one depth deeper. Malformed input stops parsing at the point
/// of failure; the prefix parsed so far is preserved in `entries`.
pub fn decode(input: &str, options: &DecodeOptions) -> TlvDecode {
    let mut entries = Vec::new();
    let error = walk(input, 0, options, &mut entries).err();
    TlvDecode { entries, error }
}

fn walk(
    input: &str,
    depth: usize,
    options: &DecodeOptions,
    out: &mut Vec<TlvEntry>,
) -> Result<()> {
    for frame in TlvScanner::new(input) {
        let frame = frame?;
        out.push(TlvEntry {
            tag: frame.tag.to_string(),
            length: frame.length.to_string(),
            value: frame.value.to_string(),
            depth,
        });
        if should_nest(&frame, options) {
            // A nested walk cannot fail: should_nest verified the block scans
            // cleanly at this level, and deeper levels re-apply the check.
            walk(frame.value, depth + 1, options, out)?;
        }
    }
    Ok(())
}

fn should_nest(frame: &Frame<'_>, options: &DecodeOptions) -> bool {
    if frame.value.is_empty() {
        return false;
    }
    match &options.composite_tags {
        Some(set) => {
            set.iter().any(|code| code.as_str() == frame.tag) && scans_fully(frame.value)
        }
        // Shape heuristic. Requiring non-empty child values keeps short leaf
        // strings like "0000" (which happens to frame as tag "00", length 00)
        // from being misread as composites.
        None => {
            let mut frames = 0usize;
            for result in TlvScanner::new(frame.value) {
                match result {
                    Ok(child) if !child.value.is_empty() => frames += 1,
                    _ => return false,
                }
            }
            frames > 0
        }
    }
}

fn scans_fully(input: &str) -> bool {
    TlvScanner::new(input).all(|result| result.is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tag: &str, length: &str, value: &str, depth: usize) -> TlvEntry {
        TlvEntry {
            tag: tag.to_string(),
            length: length.to_string(),
            value: value.to_string(),
            depth,
        }
    }

    #[test]
    fn test_single_flat_entry() {
        let result = decode("52040000", &DecodeOptions::default());
        assert!(result.is_complete());
        assert_eq!(result.entries, vec![entry("52", "04", "0000", 0)]);
    }

    #[test]
    fn test_composite_nests_one_level_deeper() {
        let result = decode("26150002GD010512345", &DecodeOptions::default());
        assert!(result.is_complete());
        assert_eq!(
            result.entries,
            vec![
                entry("26", "15", "0002GD010512345", 0),
                entry("00", "02", "GD", 1),
                entry("01", "05", "12345", 1),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let result = decode("", &DecodeOptions::default());
        assert!(result.is_complete());
        assert!(result.entries.is_empty());
    }

    #[test]
    fn test_zero_length_value() {
        let result = decode("5900", &DecodeOptions::default());
        assert!(result.is_complete());
        assert_eq!(result.entries, vec![entry("59", "00", "", 0)]);
    }

    #[test]
    fn test_missing_length_field_offset() {
        let result = decode("01", &DecodeOptions::default());
        assert!(result.entries.is_empty());
        assert!(matches!(
            result.error,
            Some(Error::Malformed { offset: 2, .. })
        ));
    }

    #[test]
    fn test_truncated_value_offset() {
        let result = decode("0105999", &DecodeOptions::default());
        assert!(result.entries.is_empty());
        assert!(matches!(
            result.error,
            Some(Error::Malformed { offset: 4, .. })
        ));
    }

    #[test]
    fn test_exact_value_length_succeeds() {
        let result = decode("010599999", &DecodeOptions::default());
        assert!(result.is_complete());
        assert_eq!(result.entries, vec![entry("01", "05", "99999", 0)]);
    }

    #[test]
    fn test_non_numeric_length() {
        let result = decode("01xy", &DecodeOptions::default());
        assert!(matches!(
            result.error,
            Some(Error::Malformed { offset: 2, .. })
        ));
    }

    #[test]
    fn test_prefix_preserved_on_failure() {
        // First frame is valid, second is truncated
        let result = decode("52040000", &DecodeOptions::default());
        assert!(result.is_complete());

        let result = decode("5204000001", &DecodeOptions::default());
        assert_eq!(result.entries, vec![entry("52", "04", "0000", 0)]);
        assert!(matches!(
            result.error,
            Some(Error::Malformed { offset: 10, .. })
        ));
    }

    #[test]
    fn test_decode_is_idempotent() {
        let input = "26150002GD010512345";
        let first = decode(input, &DecodeOptions::default());
        let second = decode(input, &DecodeOptions::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_explicit_composite_set_pins_leaves_flat() {
        // An explicit empty set disables nesting even for values that
        // reparse cleanly as TLV.
        let options = DecodeOptions::with_composite_tags(Vec::new());
        let result = decode("26150002GD010512345", &options);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].depth, 0);
    }

    #[test]
    fn test_explicit_composite_set_enables_listed_tag() {
        let options =
            DecodeOptions::with_composite_tags(vec![TagCode::new("26").unwrap()]);
        let result = decode("26150002GD010512345", &options);
        assert_eq!(result.entries.len(), 3);
        assert_eq!(result.entries[1].depth, 1);
    }

    #[test]
    fn test_scanner_is_restartable() {
        let scanner = TlvScanner::new("52040000");
        let first: Vec<_> = scanner.clone().collect();
        let second: Vec<_> = scanner.collect();
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].as_ref().unwrap().tag, "52");
    }
}
