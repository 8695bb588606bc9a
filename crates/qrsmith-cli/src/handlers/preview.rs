use crate::handlers::parse_values;
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use qrsmith_codec::build_preview;
use qrsmith_types::Template;

pub fn handle(template: &Template, data: Option<&str>, format: OutputFormat) -> Result<()> {
    let values = parse_values(data)?;
    let sample = if values.is_empty() { None } else { Some(&values) };
    let preview = build_preview(template, sample)?;

    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({
                "templateId": template.id,
                "preview": preview.json,
                "tlv": preview.tlv,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Plain => {
            let colored = std::io::stdout().is_terminal();
            if colored {
                println!("{}", "Preview".bold());
            } else {
                println!("Preview");
            }
            println!("{}", preview.json_pretty());
            println!();
            if colored {
                println!("{} {}", "TLV".bold(), preview.tlv.green());
            } else {
                println!("TLV {}", preview.tlv);
            }
        }
    }
    Ok(())
}
