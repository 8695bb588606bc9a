use super::args::{Cli, Commands, ConfigCommand, JourneyCommand, LogoCommand, TemplateCommand};
use super::handlers;
use crate::config::{Config, expand_tilde};
use anyhow::Result;
use qrsmith_store::MemoryStore;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => expand_tilde(&path),
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)?;
    let format = cli.format;

    let mut store = MemoryStore::seeded();

    match cli.command {
        Commands::Decode { tlv, composite } => {
            handlers::decode::handle(&tlv, composite.as_deref(), &config, format)
        }

        Commands::Encode {
            file,
            id,
            data,
            strict,
        } => {
            let file = file.map(|f| expand_tilde(&f));
            let template = handlers::load_template(file.as_deref(), id, &store)?;
            handlers::encode::handle(&template, data.as_deref(), strict, format)
        }

        Commands::Preview { file, id, data } => {
            let file = file.map(|f| expand_tilde(&f));
            let template = handlers::load_template(file.as_deref(), id, &store)?;
            handlers::preview::handle(&template, data.as_deref(), format)
        }

        Commands::Template { command } => match command {
            TemplateCommand::List { journey } => {
                let journey = journey.or_else(|| config.default_journey.clone());
                handlers::template::list(&store, journey.as_deref(), format)
            }
            TemplateCommand::Show { id } => handlers::template::show(&store, id, format),
        },

        Commands::Journey { command } => match command {
            JourneyCommand::List => handlers::journey::list(&store, format),
        },

        Commands::Config { command } => match command {
            ConfigCommand::List { journey } => handlers::config::list(&store, &journey, format),
            ConfigCommand::Set {
                journey,
                template,
                active,
                default,
            } => handlers::config::set(&mut store, &journey, template, active, default, format),
        },

        Commands::Logo { command } => match command {
            LogoCommand::List { journey } => handlers::logo::list(&store, &journey, format),
            LogoCommand::Add {
                journey,
                name,
                image_url,
            } => handlers::logo::add(&mut store, &journey, &name, image_url, format),
        },
    }
}
