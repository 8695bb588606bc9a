use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use qrsmith_store::TemplateStore;
use qrsmith_types::{Subtag, Tag, Template};

pub fn list(store: &impl TemplateStore, journey: Option<&str>, format: OutputFormat) -> Result<()> {
    let templates: Vec<Template> = store
        .list_templates()?
        .into_iter()
        .filter(|t| journey.is_none_or(|j| t.journey_id == j))
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&templates)?),
        OutputFormat::Plain => {
            for template in &templates {
                println!(
                    "{:>4}  journey {}  {} ({} tags)",
                    template.id,
                    template.journey_id,
                    template.name,
                    template.tags.len()
                );
            }
        }
    }
    Ok(())
}

pub fn show(store: &impl TemplateStore, id: u32, format: OutputFormat) -> Result<()> {
    let template = store.find_template(id)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&template)?),
        OutputFormat::Plain => {
            let colored = std::io::stdout().is_terminal();
            println!("Template {}: {} (journey {})", template.id, template.name, template.journey_id);
            for tag in &template.tags {
                print_tag(tag, colored);
                for subtag in &tag.subtags {
                    print_subtag(subtag, 2, colored);
                }
            }
        }
    }
    Ok(())
}

fn describe(is_static: bool, value: Option<&str>, json_key: &str) -> String {
    if is_static {
        format!("static {:?}", value.unwrap_or(""))
    } else if json_key.is_empty() {
        "dynamic".to_string()
    } else {
        format!("dynamic <- {}", json_key)
    }
}

fn print_tag(tag: &Tag, colored: bool) {
    let source = describe(tag.is_static, tag.content_value.as_deref(), &tag.json_key);
    if colored {
        println!("  {}  {}  {}", tag.code.as_str().cyan(), tag.content_desc, source.dimmed());
    } else {
        println!("  {}  {}  {}", tag.code, tag.content_desc, source);
    }
}

fn print_subtag(subtag: &Subtag, depth: usize, colored: bool) {
    let indent = "  ".repeat(depth);
    let source = describe(
        subtag.is_static,
        subtag.content_value.as_deref(),
        &subtag.json_key,
    );
    if colored {
        println!(
            "{}{}  {}  {}",
            indent,
            subtag.code.as_str().cyan(),
            subtag.content_desc,
            source.dimmed()
        );
    } else {
        println!("{}{}  {}  {}", indent, subtag.code, subtag.content_desc, source);
    }
    for child in &subtag.subtags {
        print_subtag(child, depth + 1, colored);
    }
}
