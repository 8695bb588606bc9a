use crate::types::OutputFormat;
use anyhow::Result;
use qrsmith_store::JourneyStore;

pub fn list(store: &impl JourneyStore, format: OutputFormat) -> Result<()> {
    let journeys = store.list_journeys()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&journeys)?),
        OutputFormat::Plain => {
            for journey in &journeys {
                println!("{}  {}", journey.journey_id, journey.journey_name);
            }
        }
    }
    Ok(())
}
