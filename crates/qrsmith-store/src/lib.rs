pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use traits::{ConfigStore, JourneyStore, LogoStore, TemplateStore};
