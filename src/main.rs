use asxpulse::cli::commands::{Cli, Commands};
use asxpulse::config::Config;
use asxpulse::domain::entities::company::SymbolCatalog;
use asxpulse::domain::values::movement::MovementResult;
use asxpulse::domain::values::threshold::NotableThreshold;
use asxpulse::infrastructure::catalog::{bundled_catalog, load_catalog};
use asxpulse::{AsxPulse, Markup};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("asxpulse=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run_command(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog_override = cli.catalog.map(PathBuf::from);

    // Catalog-only commands work without API keys.
    match &cli.command {
        Commands::Lookup { symbol } => {
            let catalog = catalog_only(catalog_override)?;
            match catalog.lookup(symbol) {
                Some(name) => println!("{symbol}: {name}"),
                None => println!("{symbol}: not in catalog"),
            }
            return Ok(());
        }
        Commands::Symbols => {
            let catalog = catalog_only(catalog_override)?;
            for record in catalog.records() {
                println!("{}\t{}", record.symbol, record.company_name);
            }
            return Ok(());
        }
        _ => {}
    }

    let mut config = Config::from_env()?;
    if let Some(t) = cli.threshold {
        config.threshold = NotableThreshold::new(t)?;
    }
    if catalog_override.is_some() {
        config.catalog_path = catalog_override;
    }

    let markup = match cli.command {
        Commands::Run { html: true } => Markup::Html,
        _ => Markup::Plain,
    };
    let pulse = AsxPulse::new(&config, markup)?;

    match cli.command {
        Commands::Run { .. } => {
            let dashboard = pulse.run().await;
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        }
        Commands::Ticker => {
            let dashboard = pulse.run().await;
            for point in &dashboard.ticker_points {
                println!("{point}");
            }
        }
        Commands::Headlines => {
            let dashboard = pulse.run().await;
            for headline in &dashboard.headlines {
                println!("{headline}");
            }
            match dashboard.anchor_date {
                Some(anchor) => println!("\n{} news (session {anchor}):", config.index_query),
                None => println!("\n{} news: no session data", config.index_query),
            }
            for article in &dashboard.index_digest {
                println!("- {} {}", article.title, article.url);
            }
        }
        Commands::Movement { symbol } => match pulse.movement(&symbol).await {
            MovementResult::Known(m) => println!(
                "{symbol}: {} {:.1}% on {}",
                m.direction.glyph(),
                m.magnitude(),
                m.session_date
            ),
            MovementResult::Unknown => println!("{symbol}: no market data"),
        },
        Commands::Lookup { .. } | Commands::Symbols => {}
    }
    Ok(())
}

fn catalog_only(path: Option<PathBuf>) -> Result<SymbolCatalog, Box<dyn std::error::Error>> {
    let path = path.or_else(Config::catalog_path_from_env);
    Ok(match path {
        Some(p) => load_catalog(&p)?,
        None => bundled_catalog()?,
    })
}
