mod crawler;
mod error;

use clap::Parser;
use crawl_dumper::{logging, DumperConfiguration, DumperExtension, Signals, TomlSettings};
use crawler::CrawlerBuilder;
use error::Error;
use std::path::PathBuf;

/// Fetch URLs one by one, dumping every request and response to disk.
#[derive(Debug, Parser)]
#[command(name = "dump-crawl", version)]
struct Cli {
    /// TOML settings file (DEBUG_DUMP_REQUESTS_RESPONSES, DUMP_DATA_DIR).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Directory that receives `_requests` and `_responses`.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable dumping regardless of the settings file.
    #[arg(long)]
    enable: bool,

    /// URLs to crawl.
    #[arg(required = true)]
    urls: Vec<String>,
}

fn configuration(cli: &Cli) -> Result<DumperConfiguration, Error> {
    let mut configuration = match &cli.settings {
        Some(path) => DumperConfiguration::from_settings(&TomlSettings::load(path)?)?,
        None => DumperConfiguration::default(),
    };

    if cli.enable {
        configuration.set_enabled(true);
    }
    if let Some(data_dir) = &cli.data_dir {
        configuration.set_data_dir(data_dir);
    }

    Ok(configuration)
}

fn run(cli: Cli) -> Result<(), Error> {
    let configuration = configuration(&cli)?;
    let mut signals = Signals::new();

    match DumperExtension::install(&configuration, &mut signals) {
        Ok(_) => {}
        Err(crawl_dumper::Error::NotConfigured) => {
            tracing::info!("Dumper disabled, crawling without dumps")
        }
        Err(e) => return Err(e.into()),
    }

    let crawler = CrawlerBuilder::new().with_signals(signals).build();
    for url in &cli.urls {
        crawler.crawl(url);
    }

    Ok(())
}

fn main() {
    logging::init_logging();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
