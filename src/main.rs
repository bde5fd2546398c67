use anyhow::Result;

use race_board::cli::Command;
use race_board::{
    handle_check, handle_completions, handle_csv, handle_fetch, handle_save, handle_summary,
    handle_view, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Summary { input } => handle_summary(input),
        Command::View { input, compact } => handle_view(input, *compact),
        Command::Csv {
            input,
            city,
            output,
        } => handle_csv(input, city.as_deref(), output.as_deref()),
        Command::Fetch {
            city,
            scrape,
            output,
        } => handle_fetch(city, *scrape, output.as_deref()),
        Command::Check { city } => handle_check(city),
        Command::Save { city } => handle_save(city),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
