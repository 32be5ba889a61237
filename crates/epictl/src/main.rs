//! Episcope Control - CLI for the outbreak-risk dashboard
//!
//! Drives a dashboard session against a local structured-output model:
//! one-shot predictions from manual evidence, live-data fetches with
//! derived evidence, and configuration management.

use anyhow::Result;
use clap::{Parser, Subcommand};
use epictl::commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "epictl")]
#[command(about = "Episcope - AI-assisted outbreak risk dashboard", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a prediction from an evidence vector
    Predict {
        /// Weather ordinal: 0=Clear 1=Mild 2=Humid 3=Adverse
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
        weather: Option<u8>,

        /// Population density ordinal: 0=Low 1=Medium 2=High 3=Very High
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
        density: Option<u8>,

        /// Sanitation ordinal: 0=Poor 1=Moderate 2=Good (lower is worse)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=2))]
        sanitation: Option<u8>,

        /// Recent-cases ordinal: 0=<100 1=101-1k 2=1k-5k 3=>5k
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
        cases: Option<u8>,

        /// Inference model identifier (overrides config)
        #[arg(long)]
        model: Option<String>,
    },

    /// Fetch a live snapshot for a location and predict from it
    Live {
        /// City name (defaults to configured city)
        city: Option<String>,

        /// Country name (defaults to configured country)
        country: Option<String>,

        /// Inference model identifier (overrides config)
        #[arg(long)]
        model: Option<String>,
    },

    /// Print the evidence label tables with their ordinal indexes
    Labels,

    /// Show or update configuration
    Config {
        /// Set a configuration value (key=value)
        #[arg(long)]
        set: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict {
            weather,
            density,
            sanitation,
            cases,
            model,
        } => commands::predict(weather, density, sanitation, cases, model).await,
        Commands::Live {
            city,
            country,
            model,
        } => commands::live(city, country, model).await,
        Commands::Labels => {
            commands::labels();
            Ok(())
        }
        Commands::Config { set } => commands::config(set),
    }
}
