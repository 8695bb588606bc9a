//! Repository interfaces the rest of the system depends on.
//!
//! The original tooling kept its backend simulation in module-level mutable
//! arrays; here every consumer receives an injected store instead, so a real
//! backend can replace [`crate::MemoryStore`] without touching callers.

use qrsmith_types::{JourneyType, LogoTemplate, QrConfig, Template};

use crate::error::Result;

/// Journey catalog access
pub trait JourneyStore: Send + Sync {
    fn list_journeys(&self) -> Result<Vec<JourneyType>>;

    fn find_journey(&self, journey_id: &str) -> Result<JourneyType>;

    fn add_journey(&mut self, journey: JourneyType) -> Result<()>;
}

/// Per-journey QR config state
pub trait ConfigStore: Send + Sync {
    fn configs_for_journey(&self, journey_id: &str) -> Result<Vec<QrConfig>>;

    /// Toggle a config's active/default flags.
    ///
    /// Setting either flag first clears it on every other config in the
    /// journey: at most one config is active and one is default at a time.
    fn set_status(
        &mut self,
        journey_id: &str,
        template_id: u32,
        active: bool,
        default: bool,
    ) -> Result<QrConfig>;
}

/// Logo asset catalog per journey
pub trait LogoStore: Send + Sync {
    fn logos_for_journey(&self, journey_id: &str) -> Result<Vec<LogoTemplate>>;

    /// Register a logo, assigning the next template id across all journeys
    fn add_logo(
        &mut self,
        journey_id: &str,
        template_name: &str,
        image_url: String,
    ) -> Result<LogoTemplate>;
}

/// Template catalog access
pub trait TemplateStore: Send + Sync {
    fn list_templates(&self) -> Result<Vec<Template>>;

    fn find_template(&self, template_id: u32) -> Result<Template>;

    /// Store a template, assigning an id when the template carries id 0.
    /// Returns the effective id.
    fn save_template(&mut self, template: Template) -> Result<u32>;
}
