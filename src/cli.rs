use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "horse-race card ranking and export")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the dataset summary figures
    Summary {
        /// Dataset JSON file ("-" reads stdin)
        #[arg(short, long, default_value = "-")]
        input: String,
    },
    /// Print the ranked view model as JSON
    View {
        /// Dataset JSON file ("-" reads stdin)
        #[arg(short, long, default_value = "-")]
        input: String,
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Export the dataset as CSV
    Csv {
        /// Dataset JSON file ("-" reads stdin)
        #[arg(short, long, default_value = "-")]
        input: String,
        /// City name, used for the default file name
        #[arg(short, long)]
        city: Option<String>,
        /// Output path (defaults to stdout, or <city>_analiz_<date>.csv when --city is set)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch a scored dataset from the calculation backend
    Fetch {
        /// City / track to analyse
        #[arg(short, long)]
        city: String,
        /// Scrape fresh data before calculating
        #[arg(long)]
        scrape: bool,
        /// Where to save the dataset JSON (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check whether the backend already holds today's data for a city
    Check {
        /// City / track to check
        #[arg(short, long)]
        city: String,
    },
    /// Scrape a city's entries and save them on the backend
    Save {
        /// City / track to scrape
        #[arg(short, long)]
        city: String,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}
