mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use catalog::server;
use catalog::service::{ItemService, NewItem, Upload};
use catalog_core::config::Config;
use catalog_core::ItemId;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise pick defaults from the verbose flag.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "catalog=trace,catalog_db=debug,catalog_core=debug,tower_http=debug".to_string()
        } else {
            "catalog=debug,catalog_db=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let mut config = Config::load_or_default(cli.config.as_deref());
    config.apply_env();

    match cli.command {
        Commands::Start { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(server::start(config))
        }
        Commands::AddItem {
            name,
            category,
            image,
        } => add_item(&config, name, category, &image),
        Commands::List => {
            let service = open_service(&config)?;
            print_json(&service.list_items()?)
        }
        Commands::Search { keyword } => {
            let service = open_service(&config)?;
            print_json(&service.search(&keyword)?)
        }
        Commands::Show { id } => {
            let service = open_service(&config)?;
            print_json(&service.get_item(ItemId::new(id))?)
        }
        Commands::Validate => validate_config(&config, cli.config.as_deref()),
        Commands::Version => {
            println!("catalog {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn open_service(config: &Config) -> Result<ItemService> {
    let repo = server::open_repository(config)?;
    Ok(ItemService::from_config(config, repo))
}

fn add_item(config: &Config, name: String, category: String, image: &Path) -> Result<()> {
    let bytes =
        std::fs::read(image).with_context(|| format!("Failed to read {}", image.display()))?;
    let filename = image
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", image.display()))?;

    let service = open_service(config)?;
    let added = service.add_item(NewItem {
        name,
        category,
        upload: Upload { filename, bytes },
    })?;
    print_json(&added)
}

fn validate_config(config: &Config, path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => println!("Config: {}", p.display()),
        None => println!("Config: defaults"),
    }

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("Configuration is valid");
    } else {
        for warning in &warnings {
            println!("warning: {warning}");
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
