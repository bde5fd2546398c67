pub mod aggregate;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod http;
pub mod loader;
pub mod ranking;
pub mod schedule;
pub mod services;
pub mod view;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;

use cli::Cli;

use crate::api::{DatasetEndpoint, SavedDataInfo};
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::{AnalysisService, FetchService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_summary(input: &str) -> Result<()> {
    let service = AnalysisService::new(AppConfig::new());
    let dataset = service.normalize(&loader::load_json(input)?)?;
    let display = service.summarize(&dataset).display();

    println!("{}", "Özet".yellow().bold());
    println!("  {:<14} {}", "Toplam Koşu", display.total_races.cyan());
    println!("  {:<14} {}", "Toplam At", display.total_horses.cyan());
    println!("  {:<14} {}", "Ortalama Skor", display.avg_score.cyan());
    println!("  {:<14} {}", "Yüksek Şanslı", display.top_horses.cyan());
    Ok(())
}

pub fn handle_view(input: &str, compact: bool) -> Result<()> {
    let service = AnalysisService::new(AppConfig::new());
    let dataset = service.normalize(&loader::load_json(input)?)?;
    let board = service.build_board(&dataset);

    let json = if compact {
        serde_json::to_string(&board)?
    } else {
        serde_json::to_string_pretty(&board)?
    };
    println!("{}", json);
    Ok(())
}

pub fn handle_csv(input: &str, city: Option<&str>, output: Option<&Path>) -> Result<()> {
    let service = AnalysisService::new(AppConfig::new());
    let dataset = service.normalize(&loader::load_json(input)?)?;
    let csv = service.export_csv(&dataset)?;

    match resolve_csv_path(service.config(), city, output) {
        Some(path) => {
            loader::save_text(&path, &csv)?;
            println!("{} {}", "CSV saved:".green(), path.display());
        }
        None => print!("{}", csv),
    }
    Ok(())
}

pub fn handle_fetch(city: &str, scrape: bool, output: Option<&Path>) -> Result<()> {
    let config = AppConfig::new();
    let endpoint = if scrape {
        DatasetEndpoint::ScrapeAndCalculate
    } else {
        DatasetEndpoint::CalculateFromSaved
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let value = runtime.block_on(async {
        let service = FetchService::new(&config.backend)?;
        service.run(city, endpoint).await
    })?;

    match output {
        Some(path) => loader::save_json(path, &value)?,
        None => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(())
}

pub fn handle_check(city: &str) -> Result<()> {
    let config = AppConfig::new();
    let runtime = tokio::runtime::Runtime::new()?;
    let status = runtime.block_on(async {
        let service = FetchService::new(&config.backend)?;
        service.check(city).await
    })?;

    if !status.has_data {
        let message = status.message.as_deref().unwrap_or("Kaydedilmiş veri yok");
        println!("{} {}", "✗".red(), message);
        return Ok(());
    }

    println!("{} {}", "✓".green(), "Kaydedilmiş veri mevcut".green().bold());
    if let Some(count) = status.file_count {
        println!("  {:<14} {}", "Dosya", count.to_string().cyan());
    }
    if let Some(data) = &status.data {
        print_saved_data(data);
    }
    Ok(())
}

pub fn handle_save(city: &str) -> Result<()> {
    let config = AppConfig::new();
    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(async {
        let service = FetchService::new(&config.backend)?;
        service.save(city).await
    })?;

    let message = outcome
        .message
        .as_deref()
        .or_else(|| outcome.data.as_ref().and_then(|d| d.message.as_deref()))
        .unwrap_or("Veri kaydedildi");
    println!("{} {}", "✓".green(), message.green());
    if let Some(data) = &outcome.data {
        print_saved_data(data);
    }
    Ok(())
}

fn print_saved_data(data: &SavedDataInfo) {
    if let Some(city) = &data.city {
        println!("  {:<14} {}", "Şehir", city.cyan());
    }
    if let Some(coverage) = data.coverage() {
        println!("  {:<14} {}", "Tam Veri", coverage.cyan());
    }
    if let Some(path) = &data.file_path {
        println!("  {:<14} {}", "Dosya Yolu", path.cyan());
    }
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn resolve_csv_path(
    config: &AppConfig,
    city: Option<&str>,
    output: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = output {
        return Some(path.to_path_buf());
    }
    let today = chrono::Local::now().date_naive();
    city.map(|city| config.export.output_dir.join(export::suggested_filename(city, today)))
}
