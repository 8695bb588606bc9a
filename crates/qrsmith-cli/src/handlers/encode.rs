use crate::handlers::parse_values;
use crate::types::OutputFormat;
use anyhow::Result;
use qrsmith_codec::{MissingValuePolicy, encode_template};
use qrsmith_types::Template;

pub fn handle(
    template: &Template,
    data: Option<&str>,
    strict: bool,
    format: OutputFormat,
) -> Result<()> {
    let values = parse_values(data)?;
    let policy = if strict {
        MissingValuePolicy::Strict
    } else {
        MissingValuePolicy::Placeholder
    };

    let tlv = encode_template(template, &values, policy)?;

    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({
                "templateId": template.id,
                "tlv": tlv,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Plain => println!("{}", tlv),
    }
    Ok(())
}
