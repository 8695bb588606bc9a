pub mod arena;
pub mod error;
pub mod journey;
pub mod template;

pub use arena::{NodeId, TagSpec, TemplateArena};
pub use error::{Error, Result};
pub use journey::*;
pub use template::*;
