//! Petrodash CLI
//!
//! Command-line interface for the Petrodash API:
//! - Check status
//! - Inspect and submit the data-entry forms
//! - Acknowledge historical uploads
//! - Print dashboard views

use clap::{Parser, Subcommand};
use petrodash::dashboard::View;
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "petrodash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Oil production dashboard and data-entry forms")]
#[command(long_about = "Petrodash records daily production, field, station and well reports\nand projects them into dashboard views.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8090", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show system status
    Status,

    /// List forms, or show the fields of one form
    Forms {
        /// Form key (production, field, station, well, historical)
        form: Option<String>,
    },

    /// Validate and submit a form
    Submit {
        /// Form key (production, field, station, well, historical)
        form: String,
        /// Field values in name=value format
        #[arg(short, long = "set")]
        set: Vec<String>,
        /// JSON file with field values
        #[arg(long, conflicts_with = "set")]
        file: Option<PathBuf>,
    },

    /// Register a historical bulk-upload file
    Upload {
        /// Spreadsheet path (.xlsx, .xls or .csv)
        path: PathBuf,
    },

    /// Print a dashboard view
    View {
        /// overview, fields, stations, history or wells
        view: View,
        /// Selected date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Field filter for the fields view (default: todos)
        #[arg(long)]
        field: Option<String>,
        /// Shift filter for the fields view (default: todos)
        #[arg(long)]
        shift: Option<String>,
        /// History range in days (7, 30, 90, 365)
        #[arg(long)]
        days: Option<u32>,
        /// History series, comma-separated (crude, pumping, injection, diluent)
        #[arg(long)]
        series: Option<String>,
        /// Pin the synthetic history
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let json_output = cli.format == "json";

    match cli.command {
        Commands::Status => {
            let response = client
                .get(format!("{}/health", cli.api_url))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: Value = resp.json().await?;

                    println!("Petrodash v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!("Forms: {}", health["forms"].as_u64().unwrap_or(0));
                    println!(
                        "Submissions: {}",
                        health["submissions"].as_u64().unwrap_or(0)
                    );

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Petrodash API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Petrodash API server is running:");
                    eprintln!("  cargo run --bin petrodash");
                    std::process::exit(1);
                }
            }
        }

        Commands::Forms { form } => {
            let url = match &form {
                Some(key) => format!("{}/api/v1/forms/{}", cli.api_url, key),
                None => format!("{}/api/v1/forms", cli.api_url),
            };
            let data = fetch(client.get(url)).await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else if form.is_some() {
                print_schema(&data);
            } else {
                println!("{:<12} {}", "Form", "Title");
                println!("{}", "-".repeat(50));
                for schema in data.as_array().into_iter().flatten() {
                    println!(
                        "{:<12} {}",
                        schema["kind"].as_str().unwrap_or("-"),
                        schema["title"].as_str().unwrap_or("-")
                    );
                }
            }
        }

        Commands::Submit { form, set, file } => {
            let values = match file {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)?;
                    serde_json::from_str::<Value>(&content)?
                }
                None => Value::Object(parse_assignments(&set)?),
            };

            let response = client
                .post(format!("{}/api/v1/forms/{}", cli.api_url, form))
                .json(&values)
                .send()
                .await?;

            let status = response.status();
            let body: Value = response.json().await.unwrap_or(Value::Null);

            if json_output {
                println!("{}", serde_json::to_string_pretty(&body)?);
            }

            if status.is_success() {
                if !json_output {
                    print_notification(&body["notification"]);
                }
            } else if status == reqwest::StatusCode::UNPROCESSABLE_ENTITY {
                if !json_output {
                    eprintln!("Form has errors:");
                    if let Some(errors) = body["errors"].as_object() {
                        for (field, message) in errors {
                            eprintln!("  {:<22} {}", field, message.as_str().unwrap_or("-"));
                        }
                    }
                }
                std::process::exit(2);
            } else {
                eprintln!("Submit failed ({}): {}", status, error_message(&body));
                std::process::exit(1);
            }
        }

        Commands::Upload { path } => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            let data = fetch(
                client
                    .post(format!("{}/api/v1/forms/historical/upload", cli.api_url))
                    .json(&serde_json::json!({ "file_name": file_name })),
            )
            .await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_notification(&data["notification"]);
                println!();
                println!("Expected columns:");
                for column in data["expected_columns"].as_array().into_iter().flatten() {
                    println!("  {}", column.as_str().unwrap_or("-"));
                }
            }
        }

        Commands::View {
            view,
            date,
            field,
            shift,
            days,
            series,
            seed,
        } => {
            let mut query: Vec<(&str, String)> = Vec::new();
            if let Some(date) = date {
                query.push(("date", date));
            }
            if let Some(field) = field {
                query.push(("field", field));
            }
            if let Some(shift) = shift {
                query.push(("shift", shift));
            }
            if let Some(days) = days {
                query.push(("days", days.to_string()));
            }
            if let Some(series) = series {
                query.push(("series", series));
            }
            if let Some(seed) = seed {
                query.push(("seed", seed.to_string()));
            }

            let data = fetch(
                client
                    .get(format!("{}/api/v1/dashboard/{}", cli.api_url, view.key()))
                    .query(&query),
            )
            .await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                match view {
                    View::Overview => print_overview(&data),
                    View::Fields | View::Stations => print_sites(&data),
                    View::History => print_history(&data),
                    View::Wells => print_wells(&data),
                }
            }
        }

        Commands::Config { output } => {
            let config = petrodash::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Send a request and decode the JSON body, exiting on an error status
async fn fetch(request: reqwest::RequestBuilder) -> anyhow::Result<Value> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body: Value = response.json().await.unwrap_or(Value::Null);
        eprintln!("Request failed ({}): {}", status, error_message(&body));
        std::process::exit(1);
    }

    Ok(response.json().await?)
}

fn error_message(body: &Value) -> &str {
    body["error"]["message"].as_str().unwrap_or("unknown error")
}

/// `name=value` pairs as a JSON object of strings
fn parse_assignments(pairs: &[String]) -> anyhow::Result<Map<String, Value>> {
    let mut values = Map::new();
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Expected name=value, got: {}", pair))?;
        values.insert(name.trim().to_string(), Value::String(value.to_string()));
    }
    Ok(values)
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

fn number(value: &Value) -> String {
    value
        .as_f64()
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "-".to_string())
}

fn print_notification(notification: &Value) {
    println!("{}", notification["title"].as_str().unwrap_or("-"));
    if let Some(description) = notification["description"].as_str() {
        println!("  {}", description);
    }
}

fn print_schema(schema: &Value) {
    println!("{}", schema["title"].as_str().unwrap_or("-"));
    println!();
    println!("{:<22} {:<10} {:<9} {}", "Field", "Type", "Required", "Label");
    println!("{}", "-".repeat(70));

    for field in schema["fields"].as_array().into_iter().flatten() {
        let required = if field["required"].is_string() { "yes" } else { "no" };
        println!(
            "{:<22} {:<10} {:<9} {}",
            field["name"].as_str().unwrap_or("-"),
            field["kind"]["type"].as_str().unwrap_or("-"),
            required,
            field["label"].as_str().unwrap_or("-")
        );
    }
}

fn print_overview(data: &Value) {
    println!("Date: {}", data["date"].as_str().unwrap_or("-"));
    println!();
    println!("{:<28} {:>12} {:>8} {:>8}", "Indicator", "Value", "Unit", "Change");
    println!("{}", "-".repeat(60));

    for kpi in data["kpis"].as_array().into_iter().flatten() {
        println!(
            "{:<28} {:>12} {:>8} {:>7}%",
            kpi["title"].as_str().unwrap_or("-"),
            number(&kpi["value"]),
            kpi["unit"].as_str().unwrap_or(""),
            number(&kpi["change"])
        );
    }

    println!();
    println!("API gravity: {}", number(&data["api_gravity"]));
    println!("Water & sediments: {}%", number(&data["water_and_sediments"]));
    println!(
        "Diluent: received {} / consumed {} / balance {}",
        number(&data["diluent"]["received"]),
        number(&data["diluent"]["consumed"]),
        number(&data["diluent"]["balance"])
    );
    println!(
        "Utilization: {}% (target {}, {}% vs target)",
        number(&data["efficiency"]["utilization"]),
        number(&data["efficiency"]["daily_target"]),
        number(&data["efficiency"]["vs_target"])
    );
}

fn print_sites(data: &Value) {
    println!(
        "{:<16} {:<14} {:>10} {:>10} {:>10} {:>10}",
        "Name", "Field", "Crude", "ESP", "PCP", "Injection"
    );
    println!("{}", "-".repeat(76));

    let rows = data["rows"].as_array().map(Vec::as_slice).unwrap_or_default();
    if rows.is_empty() {
        println!("No data for the selected filters");
        return;
    }

    for row in rows {
        println!(
            "{:<16} {:<14} {:>10} {:>10} {:>10} {:>10}",
            row["name"].as_str().unwrap_or("-"),
            row["field"].as_str().unwrap_or("-"),
            number(&row["crude"]),
            number(&row["pumping_esp"]),
            number(&row["pumping_pcp"]),
            number(&row["injection"])
        );
    }

    println!();
    for summary in data["summary"].as_array().into_iter().flatten() {
        println!(
            "{}: {} sites, crude {}, injection {}",
            summary["field"].as_str().unwrap_or("-"),
            summary["sites"].as_u64().unwrap_or(0),
            number(&summary["crude"]),
            number(&summary["injection"])
        );
    }
}

fn print_history(data: &Value) {
    let lines = data["lines"].as_array().map(Vec::as_slice).unwrap_or_default();

    println!(
        "{} .. {} (seed {})",
        data["range"]["from"].as_str().unwrap_or("-"),
        data["range"]["to"].as_str().unwrap_or("-"),
        data["seed"].as_u64().unwrap_or(0)
    );
    println!();

    // Header
    print!("{:<12}", "Date");
    for line in lines {
        print!(" | {:<10}", line["label"].as_str().unwrap_or("-"));
    }
    println!();
    println!("{}", "-".repeat(14 + lines.len() * 13));

    for (i, point) in data["points"].as_array().into_iter().flatten().enumerate() {
        print!("{:<12}", point["date"].as_str().unwrap_or("-"));
        for line in lines {
            print!(" | {:<10}", number(&line["values"][i]));
        }
        println!();
    }

    let stats = &data["stats"];
    println!();
    println!(
        "Crude: avg {} / min {} / max {}",
        number(&stats["average"]),
        number(&stats["min"]),
        number(&stats["max"])
    );
}

fn print_wells(data: &Value) {
    println!(
        "{:<4} {:<24} {:>7} {:>12} {:>8} {:>10}",
        "Id", "Category", "Wells", "Production", "Share", "Avg/well"
    );
    println!("{}", "-".repeat(70));

    for card in data["categories"].as_array().into_iter().flatten() {
        println!(
            "{:<4} {:<24} {:>7} {:>12} {:>7}% {:>10}",
            card["id"].as_u64().unwrap_or(0),
            card["name"].as_str().unwrap_or("-"),
            card["count"].as_u64().unwrap_or(0),
            number(&card["production"]),
            number(&card["share"]),
            number(&card["average_production"])
        );
    }

    let summary = &data["summary"];
    println!();
    println!(
        "Active wells: {} of {} target ({}% active, {}% inactive)",
        summary["active_wells"].as_u64().unwrap_or(0),
        summary["active_target"].as_u64().unwrap_or(0),
        number(&summary["active_share"]),
        number(&summary["inactive_share"])
    );
    println!(
        "Average per active well: {}",
        number(&summary["average_per_active"])
    );
}
