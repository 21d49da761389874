mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use hxtodo_core::config::Config;
use std::path::Path;

fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load_or_default(path).with_context(|| match path {
        Some(p) => format!("Failed to load config file: {}", p.display()),
        None => "Failed to load config".to_string(),
    })
}

fn apply_overrides(config: &mut Config, host: Option<String>, port: Option<u16>) {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let warnings = config.validate();

    println!(
        "Configuration OK: listening on {}:{}, database at {}",
        config.server.host,
        config.server.port,
        config.server.db_path.display()
    );
    for warning in &warnings {
        println!("warning: {warning}");
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise pick defaults based on the verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "hxtodo=trace,hxtodo_server=trace,hxtodo_db=debug,hxtodo_core=debug,tower_http=debug"
                .to_string()
        } else {
            "hxtodo=info,hxtodo_server=info,hxtodo_db=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt().with_env_filter(&env_filter).init();

    match cli.command {
        Commands::Start { host, port, db } => {
            let mut config = load_config(cli.config.as_deref())?;
            apply_overrides(&mut config, host, port);
            if let Some(db) = db {
                config.server.db_path = db;
            }

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(hxtodo_server::start(config))?;
            Ok(())
        }
        Commands::Hello { host, port } => {
            let mut config = load_config(cli.config.as_deref())?;
            apply_overrides(&mut config, host, port);

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(hxtodo_server::start_hello(config))?;
            Ok(())
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("hxtodo {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
