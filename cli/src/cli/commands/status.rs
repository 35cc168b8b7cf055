use std::path::PathBuf;

use convai_core::config::{default_config_path, load_config, resolve_default_api_key};

pub async fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    println!("ConvAI Console Status");
    println!("=====================");
    println!();
    println!("Configuration:");
    println!("  Config file: {:?}", default_config_path());
    println!();
    println!("Server settings:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  Upstream: {}", config.upstream.base_url);
    println!();

    match resolve_default_api_key(&config) {
        Some(_) => println!("Default API key: configured"),
        None => println!("Default API key: NOT SET (callers must send X-Api-Key)"),
    }

    // Check if server is reachable
    println!();
    let url = format!(
        "http://{}:{}/healthz",
        config.server.host, config.server.port
    );
    match reqwest::get(&url).await {
        Ok(resp) if resp.status().is_success() => {
            println!("Server: RUNNING ✓");
        }
        _ => {
            println!("Server: NOT RUNNING");
        }
    }

    Ok(())
}
