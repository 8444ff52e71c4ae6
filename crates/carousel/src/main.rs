use anyhow::Context;
use carousel::config;
use carousel::gui::app::AppModel;
use carousel::gui::deck::Deck;
use carousel::sys::runtime;
use clap::{Parser, Subcommand};
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "carousel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to load and watch (defaults to the user config directory)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Write the default config file if missing and print its path.
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = config::resolve_config_path(cli.config)?;

    if let Some(Commands::Init) = cli.command {
        let path = config::write_default_config(&config_path)
            .with_context(|| format!("writing {}", config_path.display()))?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);
    let deck = Deck::from_config(&config).context("building carousel from config")?;

    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(config_path.clone(), tx);

    let app = RelmApp::new("org.carousel.carousel");

    app.run::<AppModel>((deck, config_path, rx));
    Ok(())
}
