use crate::types::OutputFormat;
use anyhow::Result;
use qrsmith_store::ConfigStore;
use qrsmith_types::QrConfig;

pub fn list(store: &impl ConfigStore, journey: &str, format: OutputFormat) -> Result<()> {
    let configs = store.configs_for_journey(journey)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&configs)?),
        OutputFormat::Plain => {
            for config in &configs {
                println!("{}", line(config));
            }
        }
    }
    Ok(())
}

pub fn set(
    store: &mut impl ConfigStore,
    journey: &str,
    template: u32,
    active: bool,
    default: bool,
    format: OutputFormat,
) -> Result<()> {
    let updated = store.set_status(journey, template, active, default)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&updated)?),
        OutputFormat::Plain => println!("{}", line(&updated)),
    }
    Ok(())
}

fn line(config: &QrConfig) -> String {
    let mut flags = Vec::new();
    if config.is_active {
        flags.push("active");
    }
    if config.is_default {
        flags.push("default");
    }
    format!(
        "config {}  template {}  channel {}  {}  [{}]",
        config.config_id,
        config.template_id,
        config.channel_id,
        config.config_desc,
        flags.join(", ")
    )
}
