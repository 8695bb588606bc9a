use crate::types::OutputFormat;
use anyhow::Result;
use qrsmith_store::LogoStore;

pub fn list(store: &impl LogoStore, journey: &str, format: OutputFormat) -> Result<()> {
    let logos = store.logos_for_journey(journey)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&logos)?),
        OutputFormat::Plain => {
            for logo in &logos {
                println!(
                    "{:>4}  {}  {}",
                    logo.template_id, logo.template_name, logo.image_url
                );
            }
        }
    }
    Ok(())
}

pub fn add(
    store: &mut impl LogoStore,
    journey: &str,
    name: &str,
    image_url: String,
    format: OutputFormat,
) -> Result<()> {
    let logo = store.add_logo(journey, name, image_url)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&logo)?),
        OutputFormat::Plain => println!(
            "added logo {} ({}) to journey {}",
            logo.template_id, logo.template_name, logo.journey_id
        ),
    }
    Ok(())
}
