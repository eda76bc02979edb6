mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Configure {
            language,
            weapons,
            areas,
            clear,
            show,
        } => {
            let changes = commands::configure::Changes {
                language,
                weapons,
                areas,
                clear,
            };
            commands::configure::handle(changes, show)?;
        }

        Commands::Recommend {
            weapon,
            lenient,
            json,
            catalogue,
        } => {
            let config = Config::load()?;
            let db = config.catalogue(&catalogue)?;
            commands::recommend::handle(
                &db,
                &weapon.join(" "),
                config.language(cli.lang),
                lenient,
                json,
            )?;
        }

        Commands::Filter {
            main,
            stat,
            skill,
            rarity,
            weapon_type,
            json,
            catalogue,
        } => {
            let config = Config::load()?;
            let db = config.catalogue(&catalogue)?;
            let query = commands::filter::query(&db, main, stat, skill);
            let browse = commands::filter::browse(rarity, weapon_type);
            commands::filter::handle(&db, &query, &browse, config.language(cli.lang), json)?;
        }

        Commands::List { command, catalogue } => {
            let config = Config::load()?;
            let db = config.catalogue(&catalogue)?;
            commands::list::handle(command, &db, config.language(cli.lang))?;
        }
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` is honoured unless `-v` asks for debug output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("essence=debug,essence_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
