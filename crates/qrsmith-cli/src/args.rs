use crate::types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qrsmith")]
#[command(about = "Build, encode, decode and preview TLV QR templates", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file path (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a TLV string into its tag/length/value entries
    Decode {
        tlv: String,

        /// Comma-separated tags to treat as composite (overrides config;
        /// omit to use the shape heuristic)
        #[arg(long)]
        composite: Option<String>,
    },

    /// Encode a template into its TLV wire string
    Encode {
        /// Template JSON file
        #[arg(long, conflicts_with = "id")]
        file: Option<String>,

        /// Template id from the catalog
        #[arg(long)]
        id: Option<u32>,

        /// Dynamic values as a JSON object, keyed by jsonKey
        #[arg(long)]
        data: Option<String>,

        /// Fail on missing required values instead of emitting placeholders
        #[arg(long)]
        strict: bool,
    },

    /// Render a template preview: flat JSON map plus the TLV string
    Preview {
        #[arg(long, conflicts_with = "id")]
        file: Option<String>,

        #[arg(long)]
        id: Option<u32>,

        #[arg(long)]
        data: Option<String>,
    },

    Template {
        #[command(subcommand)]
        command: TemplateCommand,
    },

    Journey {
        #[command(subcommand)]
        command: JourneyCommand,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    Logo {
        #[command(subcommand)]
        command: LogoCommand,
    },
}

#[derive(Subcommand)]
pub enum TemplateCommand {
    List {
        /// Restrict to one journey
        #[arg(long)]
        journey: Option<String>,
    },

    Show {
        id: u32,
    },
}

#[derive(Subcommand)]
pub enum JourneyCommand {
    List,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    List {
        journey: String,
    },

    /// Set a template's config status within a journey. Activating or
    /// defaulting one config clears the flag on the journey's others.
    Set {
        journey: String,

        template: u32,

        #[arg(long)]
        active: bool,

        #[arg(long)]
        default: bool,
    },
}

#[derive(Subcommand)]
pub enum LogoCommand {
    List {
        journey: String,
    },

    Add {
        journey: String,

        name: String,

        /// Logo image location (file path or URL)
        #[arg(long)]
        image_url: String,
    },
}
