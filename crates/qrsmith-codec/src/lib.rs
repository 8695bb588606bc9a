pub mod decode;
pub mod encode;
pub mod error;
pub mod preview;

pub use decode::{DecodeOptions, TlvDecode, TlvEntry, TlvScanner, decode};
pub use encode::{MissingValuePolicy, ValueMap, encode_tags, encode_template};
pub use error::{Error, Result};
pub use preview::{TemplatePreview, build_preview};
