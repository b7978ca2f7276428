use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "asxpulse", about = "ASX 100 price moves and news digest")]
pub struct Cli {
    /// Notable-move threshold in percentage points (overrides ASXPULSE_THRESHOLD)
    #[arg(long, global = true)]
    pub threshold: Option<f64>,
    /// Catalog JSON file (overrides ASXPULSE_CATALOG)
    #[arg(long, global = true)]
    pub catalog: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline and print the dashboard as JSON
    Run {
        /// Render ticker and headline lines with HTML emphasis
        #[arg(long)]
        html: bool,
    },
    /// Print the ticker strip, one point per line
    Ticker,
    /// Print notable-move headlines followed by the index digest
    Headlines,
    /// Fetch the latest move for a single symbol
    Movement {
        symbol: String,
    },
    /// Look up the company name for a symbol
    Lookup {
        symbol: String,
    },
    /// List the tracked symbols
    Symbols,
}
