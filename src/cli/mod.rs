use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::infra::config::{AppConfig, Config};

#[derive(Parser)]
#[command(name = "slides-mcp-gateway")]
#[command(about = "Read-only presentation tools over MCP")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the server (default when no subcommand is given)
    Serve,
    /// Health check the service
    Health {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Validate configuration
    Config {
        /// Validate config without starting service
        #[arg(long)]
        validate: bool,
    },
    /// Show service status
    Status {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Fetch a presentation and print its content summary
    Fetch {
        /// Presentation ID
        presentation_id: String,
        /// Include speaker notes
        #[arg(long)]
        notes: bool,
    },
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    run_commands(cli.command.unwrap_or(Commands::Serve)).await
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Serve => match crate::infra::boot::run_server().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "server exited with error");
                ExitCode::FAILURE
            }
        },
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("✅ Service is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Health check failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate: _ } => match validate_config() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Configuration validation failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Status { url } => match show_status(&url).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("❌ Status check failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Fetch { presentation_id, notes } => match fetch(&presentation_id, notes).await {
            Ok(summary) => {
                print!("{summary}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Fetch failed: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

async fn health_check(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/healthz", url))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()).into())
    }
}

fn validate_config() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_env();
    if !matches!(cfg.mode.as_str(), "server" | "stdio") {
        return Err(format!("Invalid MODE: {}. Must be 'server' or 'stdio'", cfg.mode).into());
    }
    if cfg.mode == "server" && std::env::var("PORT").ok().as_deref() == Some("0") {
        return Err("PORT cannot be 0".into());
    }

    if let Ok(path) = std::env::var("GATEWAY_CONFIG") {
        if let Ok(raw) = std::fs::read_to_string(&path) {
            AppConfig::parse_toml(&raw).map_err(|e| format!("{path}: {e}"))?;
        }
    }
    let app = AppConfig::from_env_and_toml();
    if let Some(base) = app.slides.base_url.as_deref() {
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(format!("Invalid slides base_url: {base}").into());
        }
    }
    Ok(())
}

async fn show_status(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();

    let health_response = client
        .get(format!("{}/healthz", url))
        .timeout(std::time::Duration::from_secs(5))
        .send()
        .await?;

    println!(
        "🏥 Health Status: {}",
        if health_response.status().is_success() {
            "✅ Healthy"
        } else {
            "❌ Unhealthy"
        }
    );

    let tools_response = client
        .post(format!("{}/v1/rpc", url))
        .header("content-type", "application/json")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/list",
            "params": {}
        }))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await;

    match tools_response {
        Ok(resp) if resp.status().is_success() => {
            println!("🔧 Tools: ✅ Available");
        }
        Ok(resp) => {
            println!("🔧 Tools: ❌ HTTP {}", resp.status());
        }
        Err(_) => {
            println!("🔧 Tools: ❌ Unavailable");
        }
    }

    let cfg = Config::from_env();
    let app = AppConfig::from_env_and_toml();
    println!("\n📋 Configuration:");
    println!("  Mode: {}", cfg.mode);
    println!("  Port: {}", cfg.port);
    println!(
        "  Log Level: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    );
    println!("  Slides API: {}", app.slides.base_url.as_deref().unwrap_or("default"));
    println!(
        "  Access Token: {}",
        if app.access_token.is_some() { "configured" } else { "Not configured" }
    );

    Ok(())
}

async fn fetch(presentation_id: &str, include_notes: bool) -> Result<String, Box<dyn std::error::Error>> {
    let cfg = AppConfig::from_env_and_toml();
    let source = crate::clients::source_from_config(&cfg);
    let input = crate::tools::slides::types::PresentationContentInput {
        presentation_id: presentation_id.to_string(),
        include_notes,
    };
    let out = crate::tools::slides::ops::get_presentation_content(source.as_ref(), input).await?;
    Ok(out.summary)
}
