use chrono::Local;
use clap::Parser;
use tracing::{error, info};

use chatdesk::cli::{self, Cli, Command};
use chatdesk::event::EventHandler;
use chatdesk::i18n::{Catalog, Msg};
use chatdesk::util::{database::Database, log};
use chatdesk::error::describe_chain;
use chatdesk::{App, AppConfig, FailureCategory};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The catalog is needed for the failure message even when the config is broken.
    let config = AppConfig::load(&cli.config);
    let catalog = config
        .as_ref()
        .map(|c| Catalog::new(c.language()))
        .unwrap_or_default();

    let result = match config {
        Ok(config) => run(config, catalog, cli.command).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => {
            info!("{}", catalog.text(Msg::ProgramFinished));
            println!("{}", catalog.text(Msg::ProgramFinished));
            std::process::exit(0);
        }
        Err(report) => {
            let category = FailureCategory::classify(report.chain());
            error!("Start-up failed ({:?}): {}", category, describe_chain(report.chain()));
            eprintln!("{}", catalog.text(category.message()));
            eprintln!("{:?}", report);
            std::process::exit(1);
        }
    }
}

async fn run(config: AppConfig, catalog: Catalog, command: Option<Command>) -> color_eyre::Result<()> {
    color_eyre::install()?;
    let created_data_dir = config.prepare_directories(&catalog)?;
    log::init(&config.paths.data_dir)?;
    config.report_environment(&catalog, created_data_dir);

    match command {
        Some(Command::Ask { text }) => Ok(cli::run_ask(&config, &catalog, &text).await?),
        Some(Command::Exercise { number }) => Ok(cli::run_exercise(&config, &catalog, number).await?),
        None => run_ui(config).await,
    }
}

async fn run_ui(config: AppConfig) -> color_eyre::Result<()> {
    let path = Database::run_path(&config.paths.data_dir, &Local::now());
    let database = Database::open(&path)?;
    info!("Session store {}", path.display());

    let app = App::new(config, database, EventHandler::new())?;

    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
