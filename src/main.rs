use std::path::PathBuf;

use clap::Parser;
use folio::app::App;
use folio::catalog::{Catalog, load_catalog_file, sample_catalog};
use folio::config::Config;
use folio::error::AppResult;
use folio::logging::init_logging;

#[derive(Debug, Parser)]
#[command(name = "folio", about = "Terminal portfolio with swipe navigation")]
struct Cli {
    /// Config file. Defaults to $FOLIO_CONFIG_PATH or the XDG config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Project catalog (.toml or .json). Overrides `[catalog].path`.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Route to open on start, e.g. `/projects`.
    #[arg(long)]
    page: Option<String>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, &cli);
    init_logging(&config.log)?;

    let catalog = load_catalog(&config)?;
    let mut app = App::new_with_config(config, catalog)?;
    app.run().await
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.clone());
    }
    if let Some(page) = cli.page.as_deref().map(str::trim).filter(|page| !page.is_empty()) {
        config.ui.start_page = page.to_string();
    }
}

fn load_catalog(config: &Config) -> AppResult<Catalog> {
    match &config.catalog.path {
        Some(path) => load_catalog_file(path),
        None => Ok(sample_catalog()),
    }
}
