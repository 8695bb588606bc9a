use crate::config::Config;
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use qrsmith_codec::{DecodeOptions, decode};
use qrsmith_types::TagCode;
use std::collections::BTreeSet;

pub fn handle(
    tlv: &str,
    composite: Option<&str>,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let options = decode_options(composite, config)?;
    let result = decode(tlv, &options);

    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({
                "entries": result.entries,
                "error": result.error.as_ref().map(|e| e.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Plain => {
            let colored = std::io::stdout().is_terminal();
            for entry in &result.entries {
                let indent = "  ".repeat(entry.depth);
                if colored {
                    println!(
                        "{}{} {} {}",
                        indent,
                        entry.tag.cyan(),
                        entry.length.dimmed(),
                        entry.value
                    );
                } else {
                    println!("{}{} {} {}", indent, entry.tag, entry.length, entry.value);
                }
            }
        }
    }

    // The prefix above is still shown; the exit code reports the failure
    if let Some(error) = result.error {
        return Err(error.into());
    }
    Ok(())
}

/// Flag beats config file; neither means the shape heuristic decides
fn decode_options(composite: Option<&str>, config: &Config) -> Result<DecodeOptions> {
    let listed: Option<Vec<&str>> = match composite {
        Some(raw) => Some(raw.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()),
        None if !config.composite_tags.is_empty() => {
            Some(config.composite_tags.iter().map(String::as_str).collect())
        }
        None => None,
    };

    match listed {
        Some(codes) => {
            let tags = codes
                .into_iter()
                .map(TagCode::new)
                .collect::<qrsmith_types::Result<BTreeSet<_>>>()?;
            Ok(DecodeOptions::with_composite_tags(tags))
        }
        None => Ok(DecodeOptions::default()),
    }
}
