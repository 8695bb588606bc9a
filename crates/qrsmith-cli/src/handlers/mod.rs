pub mod config;
pub mod decode;
pub mod encode;
pub mod journey;
pub mod logo;
pub mod preview;
pub mod template;

use anyhow::{Context, Result};
use qrsmith_codec::ValueMap;
use qrsmith_store::TemplateStore;
use qrsmith_types::Template;
use std::path::Path;

/// Resolve a template from `--file` or `--id`
pub fn load_template(
    file: Option<&Path>,
    id: Option<u32>,
    store: &impl TemplateStore,
) -> Result<Template> {
    let template = match (file, id) {
        (Some(path), _) => {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read template file {}", path.display()))?;
            serde_json::from_str(&body)
                .with_context(|| format!("invalid template JSON in {}", path.display()))?
        }
        (None, Some(id)) => store.find_template(id)?,
        (None, None) => anyhow::bail!("specify a template with --file or --id"),
    };
    template.validate()?;
    Ok(template)
}

/// Parse `--data` as a JSON object keyed by jsonKey
pub fn parse_values(data: Option<&str>) -> Result<ValueMap> {
    let Some(raw) = data else {
        return Ok(ValueMap::new());
    };
    let value: serde_json::Value =
        serde_json::from_str(raw).context("--data is not valid JSON")?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => anyhow::bail!("--data must be a JSON object"),
    }
}
