//! In-memory store with the seed catalog used by the CLI and tests.

use chrono::Utc;
use qrsmith_types::{
    JourneyType, LogoTemplate, QrConfig, Subtag, Tag, TagCode, Template, ValueFormat,
};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::traits::{ConfigStore, JourneyStore, LogoStore, TemplateStore};

/// All four stores in one seedable struct
#[derive(Debug, Default)]
pub struct MemoryStore {
    journeys: Vec<JourneyType>,
    configs: HashMap<String, Vec<QrConfig>>,
    logos: HashMap<String, Vec<LogoTemplate>>,
    templates: Vec<Template>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the standard journey/config/logo/template catalog
    pub fn seeded() -> Self {
        let now = Utc::now();

        let journeys = vec![
            JourneyType {
                journey_id: "01".to_string(),
                journey_name: "cooptill".to_string(),
                created_at: now,
                updated_at: now,
            },
            JourneyType {
                journey_id: "02".to_string(),
                journey_name: "coopduka".to_string(),
                created_at: now,
                updated_at: now,
            },
            JourneyType {
                journey_id: "03".to_string(),
                journey_name: "mpesa".to_string(),
                created_at: now,
                updated_at: now,
            },
        ];

        let mut configs = HashMap::new();
        configs.insert(
            "01".to_string(),
            vec![
                QrConfig {
                    config_id: 1,
                    journey_id: "01".to_string(),
                    template_id: 1,
                    channel_id: 13,
                    config_desc: "First template for cooptill".to_string(),
                    is_active: true,
                    is_default: true,
                    created_at: now,
                    updated_at: now,
                },
                QrConfig {
                    config_id: 2,
                    journey_id: "01".to_string(),
                    template_id: 2,
                    channel_id: 13,
                    config_desc: "Second template for cooptill".to_string(),
                    is_active: false,
                    is_default: false,
                    created_at: now,
                    updated_at: now,
                },
            ],
        );
        configs.insert(
            "02".to_string(),
            vec![QrConfig {
                config_id: 3,
                journey_id: "02".to_string(),
                template_id: 3,
                channel_id: 14,
                config_desc: "First template for coopduka".to_string(),
                is_active: true,
                is_default: true,
                created_at: now,
                updated_at: now,
            }],
        );
        configs.insert("03".to_string(), Vec::new());

        let mut logos = HashMap::new();
        logos.insert(
            "01".to_string(),
            vec![LogoTemplate {
                template_id: 1,
                journey_id: "01".to_string(),
                template_name: "Coop Till Logo".to_string(),
                image_url: "assets/logos/coop-till.svg".to_string(),
                created_at: now,
                updated_at: now,
            }],
        );
        logos.insert(
            "02".to_string(),
            vec![LogoTemplate {
                template_id: 2,
                journey_id: "02".to_string(),
                template_name: "Coop Duka Logo".to_string(),
                image_url: "assets/logos/coop-duka.svg".to_string(),
                created_at: now,
                updated_at: now,
            }],
        );
        logos.insert("03".to_string(), Vec::new());

        let templates = vec![
            till_payment_template(),
            till_lite_template(),
            duka_payment_template(),
        ];

        Self {
            journeys,
            configs,
            logos,
            templates,
        }
    }

    fn require_journey(&self, journey_id: &str) -> Result<()> {
        if self.journeys.iter().any(|j| j.journey_id == journey_id) {
            Ok(())
        } else {
            Err(Error::JourneyNotFound(journey_id.to_string()))
        }
    }
}

impl JourneyStore for MemoryStore {
    fn list_journeys(&self) -> Result<Vec<JourneyType>> {
        Ok(self.journeys.clone())
    }

    fn find_journey(&self, journey_id: &str) -> Result<JourneyType> {
        self.journeys
            .iter()
            .find(|j| j.journey_id == journey_id)
            .cloned()
            .ok_or_else(|| Error::JourneyNotFound(journey_id.to_string()))
    }

    fn add_journey(&mut self, journey: JourneyType) -> Result<()> {
        if self
            .journeys
            .iter()
            .any(|j| j.journey_id == journey.journey_id)
        {
            return Err(Error::Duplicate(journey.journey_id));
        }
        self.configs.entry(journey.journey_id.clone()).or_default();
        self.logos.entry(journey.journey_id.clone()).or_default();
        self.journeys.push(journey);
        Ok(())
    }
}

impl ConfigStore for MemoryStore {
    fn configs_for_journey(&self, journey_id: &str) -> Result<Vec<QrConfig>> {
        self.require_journey(journey_id)?;
        Ok(self.configs.get(journey_id).cloned().unwrap_or_default())
    }

    fn set_status(
        &mut self,
        journey_id: &str,
        template_id: u32,
        active: bool,
        default: bool,
    ) -> Result<QrConfig> {
        self.require_journey(journey_id)?;
        let configs = self
            .configs
            .get_mut(journey_id)
            .ok_or_else(|| Error::JourneyNotFound(journey_id.to_string()))?;

        if !configs.iter().any(|c| c.template_id == template_id) {
            return Err(Error::ConfigNotFound {
                journey_id: journey_id.to_string(),
                template_id,
            });
        }

        let now = Utc::now();
        if active {
            for config in configs.iter_mut() {
                config.is_active = false;
            }
        }
        if default {
            for config in configs.iter_mut() {
                config.is_default = false;
            }
        }

        let config = configs
            .iter_mut()
            .find(|c| c.template_id == template_id)
            .ok_or_else(|| Error::ConfigNotFound {
                journey_id: journey_id.to_string(),
                template_id,
            })?;
        config.is_active = active;
        config.is_default = default;
        config.updated_at = now;
        Ok(config.clone())
    }
}

impl LogoStore for MemoryStore {
    fn logos_for_journey(&self, journey_id: &str) -> Result<Vec<LogoTemplate>> {
        self.require_journey(journey_id)?;
        Ok(self.logos.get(journey_id).cloned().unwrap_or_default())
    }

    fn add_logo(
        &mut self,
        journey_id: &str,
        template_name: &str,
        image_url: String,
    ) -> Result<LogoTemplate> {
        self.require_journey(journey_id)?;

        // Ids are unique across journeys, not per journey
        let next_id = self
            .logos
            .values()
            .flatten()
            .map(|l| l.template_id)
            .max()
            .unwrap_or(0)
            + 1;

        let now = Utc::now();
        let logo = LogoTemplate {
            template_id: next_id,
            journey_id: journey_id.to_string(),
            template_name: template_name.to_string(),
            image_url,
            created_at: now,
            updated_at: now,
        };
        self.logos
            .entry(journey_id.to_string())
            .or_default()
            .push(logo.clone());
        Ok(logo)
    }
}

impl TemplateStore for MemoryStore {
    fn list_templates(&self) -> Result<Vec<Template>> {
        Ok(self.templates.clone())
    }

    fn find_template(&self, template_id: u32) -> Result<Template> {
        self.templates
            .iter()
            .find(|t| t.id == template_id)
            .cloned()
            .ok_or(Error::TemplateNotFound(template_id))
    }

    fn save_template(&mut self, mut template: Template) -> Result<u32> {
        if template.id == 0 {
            template.id = self.templates.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        } else if let Some(existing) =
            self.templates.iter_mut().find(|t| t.id == template.id)
        {
            *existing = template;
            return Ok(existing.id);
        }
        let id = template.id;
        self.templates.push(template);
        Ok(id)
    }
}

// --- Seed templates ---

fn static_tag(code: &str, desc: &str, json_key: &str, value: &str, max: u32) -> Tag {
    Tag {
        code: TagCode::new(code).expect("seed tag code"),
        content_desc: desc.to_string(),
        json_key: json_key.to_string(),
        content_value: Some(value.to_string()),
        format: ValueFormat::Text,
        min_length: 0,
        max_length: max,
        is_static: true,
        is_dynamic: false,
        required: true,
        subtags: Vec::new(),
    }
}

fn dynamic_tag(code: &str, desc: &str, json_key: &str, format: ValueFormat, max: u32) -> Tag {
    Tag {
        code: TagCode::new(code).expect("seed tag code"),
        content_desc: desc.to_string(),
        json_key: json_key.to_string(),
        content_value: None,
        format,
        min_length: 0,
        max_length: max,
        is_static: false,
        is_dynamic: true,
        required: true,
        subtags: Vec::new(),
    }
}

fn static_subtag(code: &str, desc: &str, value: &str) -> Subtag {
    Subtag {
        code: TagCode::new(code).expect("seed subtag code"),
        content_desc: desc.to_string(),
        json_key: String::new(),
        content_value: Some(value.to_string()),
        format: ValueFormat::Text,
        min_length: 0,
        max_length: 0,
        is_static: true,
        is_dynamic: false,
        required: true,
        subtags: Vec::new(),
    }
}

fn dynamic_subtag(code: &str, desc: &str, json_key: &str, format: ValueFormat) -> Subtag {
    Subtag {
        code: TagCode::new(code).expect("seed subtag code"),
        content_desc: desc.to_string(),
        json_key: json_key.to_string(),
        content_value: None,
        format,
        min_length: 0,
        max_length: 0,
        is_static: false,
        is_dynamic: true,
        required: true,
        subtags: Vec::new(),
    }
}

fn till_payment_template() -> Template {
    let mut merchant_account = dynamic_tag("26", "Merchant Account Information", "", ValueFormat::Text, 0);
    merchant_account.is_dynamic = false;
    merchant_account.required = false;
    merchant_account.subtags = vec![
        static_subtag("00", "Globally Unique Identifier", "GD"),
        dynamic_subtag("01", "Till Number", "tillNumber", ValueFormat::Numeric),
    ];

    Template {
        id: 1,
        name: "Coop Till Payment".to_string(),
        journey_id: "01".to_string(),
        tags: vec![
            static_tag("00", "Payload Format Indicator", "", "01", 2),
            merchant_account,
            static_tag("52", "Merchant Category Code", "", "0000", 4),
            dynamic_tag("54", "Transaction Amount", "amount", ValueFormat::Numeric, 13),
            static_tag("58", "Country Code", "", "KE", 2),
            dynamic_tag("59", "Merchant Name", "merchantName", ValueFormat::Text, 25),
        ],
    }
}

fn till_lite_template() -> Template {
    Template {
        id: 2,
        name: "Coop Till Lite".to_string(),
        journey_id: "01".to_string(),
        tags: vec![
            static_tag("00", "Payload Format Indicator", "", "01", 2),
            dynamic_tag("54", "Transaction Amount", "amount", ValueFormat::Numeric, 13),
        ],
    }
}

fn duka_payment_template() -> Template {
    let mut merchant_account = dynamic_tag("26", "Merchant Account Information", "", ValueFormat::Text, 0);
    merchant_account.is_dynamic = false;
    merchant_account.required = false;
    merchant_account.subtags = vec![
        static_subtag("00", "Globally Unique Identifier", "GD"),
        dynamic_subtag("01", "Duka Number", "dukaNumber", ValueFormat::Numeric),
    ];

    Template {
        id: 3,
        name: "Coop Duka Payment".to_string(),
        journey_id: "02".to_string(),
        tags: vec![
            static_tag("00", "Payload Format Indicator", "", "01", 2),
            merchant_account,
            dynamic_tag("54", "Transaction Amount", "amount", ValueFormat::Numeric, 13),
            dynamic_tag("59", "Merchant Name", "merchantName", ValueFormat::Text, 25),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_is_valid() {
        let store = MemoryStore::seeded();
        for template in store.list_templates().unwrap() {
            template.validate().unwrap();
        }
        assert_eq!(store.list_journeys().unwrap().len(), 3);
    }

    #[test]
    fn test_active_and_default_are_exclusive_per_journey() {
        let mut store = MemoryStore::seeded();

        let updated = store.set_status("01", 2, true, true).unwrap();
        assert!(updated.is_active);
        assert!(updated.is_default);

        let configs = store.configs_for_journey("01").unwrap();
        let other = configs.iter().find(|c| c.template_id == 1).unwrap();
        assert!(!other.is_active);
        assert!(!other.is_default);

        // Journey 02 is untouched
        let duka = store.configs_for_journey("02").unwrap();
        assert!(duka[0].is_active);
    }

    #[test]
    fn test_set_status_unknown_template() {
        let mut store = MemoryStore::seeded();
        assert!(matches!(
            store.set_status("01", 99, true, false),
            Err(Error::ConfigNotFound { template_id: 99, .. })
        ));
    }

    #[test]
    fn test_add_logo_assigns_global_next_id() {
        let mut store = MemoryStore::seeded();
        // Seed ids 1 and 2 exist across journeys 01/02
        let logo = store
            .add_logo("03", "Mpesa Logo", "assets/logos/mpesa.svg".to_string())
            .unwrap();
        assert_eq!(logo.template_id, 3);
        assert_eq!(store.logos_for_journey("03").unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_journey_rejected() {
        let store = MemoryStore::seeded();
        assert!(matches!(
            store.configs_for_journey("09"),
            Err(Error::JourneyNotFound(_))
        ));
    }

    #[test]
    fn test_save_template_assigns_and_updates() {
        let mut store = MemoryStore::seeded();

        let mut fresh = till_lite_template();
        fresh.id = 0;
        fresh.name = "New".to_string();
        let id = store.save_template(fresh).unwrap();
        assert_eq!(id, 4);

        let mut existing = store.find_template(1).unwrap();
        existing.name = "Renamed".to_string();
        store.save_template(existing).unwrap();
        assert_eq!(store.find_template(1).unwrap().name, "Renamed");
    }

    #[test]
    fn test_add_journey_registers_empty_catalogs() {
        let mut store = MemoryStore::seeded();
        let now = Utc::now();
        store
            .add_journey(JourneyType {
                journey_id: "04".to_string(),
                journey_name: "airtime".to_string(),
                created_at: now,
                updated_at: now,
            })
            .unwrap();
        assert!(store.configs_for_journey("04").unwrap().is_empty());
        assert!(store.logos_for_journey("04").unwrap().is_empty());
        assert!(matches!(
            store.add_journey(JourneyType {
                journey_id: "04".to_string(),
                journey_name: "dup".to_string(),
                created_at: now,
                updated_at: now,
            }),
            Err(Error::Duplicate(_))
        ));
    }
}
