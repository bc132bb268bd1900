//! `blogforge gateway` — Start the HTTP server with the browser form.

use blogforge_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("Blogforge Gateway");
    println!("   Form: http://{}:{}/", config.gateway.host, config.gateway.port);

    blogforge_gateway::start(config).await?;

    Ok(())
}
