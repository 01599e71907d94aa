//! Pulseboard CLI
//!
//! Command-line client for a running Pulseboard API:
//! - List, add and delete records
//! - Reset the collection
//! - Import records from CSV
//! - Check status

use clap::{Parser, Subcommand};
use pulseboard::config::generate_default_config;
use pulseboard::store::{total_value, Record};
use serde::Deserialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pulseboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Admin client for the Pulseboard record API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:5000", global = true)]
    pub api_url: String,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all records
    List,

    /// Add a record
    Add {
        /// Category label
        category: String,
        /// Numeric value (may be negative)
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Delete one record by id
    Delete {
        /// Record id
        id: String,
    },

    /// Delete every record
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Import records from a CSV file with `category,value` columns
    Import {
        /// Path to CSV file
        path: PathBuf,
        /// Dry run (parse only, don't create records)
        #[arg(long)]
        dry_run: bool,
    },

    /// Show service status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// One CSV row for import
#[derive(Debug, Deserialize)]
struct ImportRow {
    category: String,
    value: f64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let data_url = format!("{}/api/data", cli.api_url.trim_end_matches('/'));

    match cli.command {
        Commands::List => {
            let response = client.get(&data_url).send().await?;
            let response = ensure_success(response, "Failed to fetch records").await;

            let records: Vec<Record> = response.json().await?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&records)?),
                "csv" => print_csv(&records)?,
                _ => print_table(&records),
            }
        }

        Commands::Add { category, value } => {
            let body = serde_json::json!({
                "category": category,
                "value": value,
            });

            let response = client.post(&data_url).json(&body).send().await?;
            let response = ensure_success(response, "Failed to add record").await;

            let record: Record = response.json().await?;
            println!("Added {} = {} ({})", record.category, record.value, record.id);
        }

        Commands::Delete { id } => {
            let response = client
                .delete(format!("{}/{}", data_url, id))
                .send()
                .await?;
            ensure_success(response, "Failed to delete record").await;

            println!("Deleted {}", id);
        }

        Commands::Reset { yes } => {
            if !yes && !confirm("Are you sure you want to delete all data?")? {
                println!("Aborted.");
                return Ok(());
            }

            let response = client.delete(&data_url).send().await?;
            let response = ensure_success(response, "Failed to reset data").await;

            let body: serde_json::Value = response.json().await?;
            println!(
                "{} ({} removed)",
                body["message"].as_str().unwrap_or("Done"),
                body["deleted"].as_u64().unwrap_or(0)
            );
        }

        Commands::Import { path, dry_run } => {
            if !path.exists() {
                eprintln!("File not found: {:?}", path);
                std::process::exit(1);
            }

            let mut reader = csv::Reader::from_path(&path)?;
            let mut rows = Vec::new();
            let mut skipped = 0;

            for (line, result) in reader.deserialize::<ImportRow>().enumerate() {
                match result {
                    Ok(row) if !row.category.is_empty() => rows.push(row),
                    Ok(_) => {
                        eprintln!("Row {}: empty category, skipped", line + 1);
                        skipped += 1;
                    }
                    Err(e) => {
                        eprintln!("Row {}: {}", line + 1, e);
                        skipped += 1;
                    }
                }
            }

            println!("Parsed {} rows ({} skipped)", rows.len(), skipped);

            if dry_run {
                for row in &rows {
                    println!("  {:<20} {}", row.category, row.value);
                }
                println!("Dry run, nothing imported.");
                return Ok(());
            }

            let mut imported = 0;
            for row in rows {
                let body = serde_json::json!({
                    "category": row.category,
                    "value": row.value,
                });

                let response = client.post(&data_url).json(&body).send().await?;
                if response.status().is_success() {
                    imported += 1;
                } else {
                    let status = response.status();
                    let text = response.text().await.unwrap_or_default();
                    eprintln!("Failed to import {} ({}): {}", row.category, status, text);
                }
            }

            println!("Imported {} records", imported);
        }

        Commands::Status => {
            let response = client
                .get(format!("{}/health", cli.api_url.trim_end_matches('/')))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Pulseboard v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!("Store: {}", health["store"].as_str().unwrap_or("unknown"));

                    if let Some(records) = health["records"].as_u64() {
                        println!("Records: {}", records);
                    }

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Pulseboard API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin pulseboard");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Pass a successful response through; otherwise print the server's error message and exit
async fn ensure_success(response: reqwest::Response, context: &str) -> reqwest::Response {
    if response.status().is_success() {
        return response;
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v["message"].as_str().map(str::to_string))
        .unwrap_or(text);

    eprintln!("{} ({}): {}", context, status, message);
    std::process::exit(1);
}

fn confirm(prompt: &str) -> std::io::Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES"))
}

fn print_table(records: &[Record]) {
    if records.is_empty() {
        println!("No records yet.");
        println!();
        println!("Add your first record with:");
        println!("  pulseboard-cli add sales 100");
        return;
    }

    println!("{:<38} {:<20} {:>12}", "ID", "Category", "Value");
    println!("{}", "-".repeat(72));

    for record in records {
        println!("{:<38} {:<20} {:>12}", record.id, record.category, record.value);
    }

    println!("{}", "-".repeat(72));
    println!(
        "{} records, total value {}",
        records.len(),
        total_value(records)
    );
}

fn print_csv(records: &[Record]) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn format_duration(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m {}s", minutes, seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(59), "0m 59s");
        assert_eq!(format_duration(3_700), "1h 1m");
        assert_eq!(format_duration(90_000), "1d 1h 0m");
    }

    #[test]
    fn test_cli_parses_add() {
        let cli = Cli::try_parse_from(["pulseboard", "add", "sales", "100"]).unwrap();
        match cli.command {
            Commands::Add { category, value } => {
                assert_eq!(category, "sales");
                assert_eq!(value, 100.0);
            }
            _ => panic!("expected add"),
        }
        assert_eq!(cli.api_url, "http://localhost:5000");
    }

    #[test]
    fn test_cli_parses_negative_add() {
        let cli = Cli::try_parse_from(["pulseboard", "add", "refunds", "-5"]).unwrap();
        match cli.command {
            Commands::Add { category, value } => {
                assert_eq!(category, "refunds");
                assert_eq!(value, -5.0);
            }
            _ => panic!("expected add"),
        }

        let cli = Cli::try_parse_from(["pulseboard", "add", "adjust", "-0.25", "-f", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Add { value, .. } if value == -0.25));
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_import_rows_deserialize() {
        let data = "category,value\nsales,100\ncosts,40.5\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<ImportRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].category, "costs");
        assert_eq!(rows[1].value, 40.5);
    }
}
