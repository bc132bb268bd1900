//! `blogforge onboard` — Write a default configuration file.

use blogforge_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");

    println!("Blogforge — First-Time Setup");
    println!("============================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {}", config_dir.display());
    } else {
        println!("Config directory exists: {}", config_dir.display());
    }

    if config_path.exists() {
        println!("Config file already exists: {}", config_path.display());
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("Created config file: {}", config_path.display());
    }

    println!("\nNext steps:");
    println!("  1. Add your API key to {} (or set BLOGFORGE_API_KEY)", config_path.display());
    println!("  2. Run `blogforge gateway` and open the form in your browser");

    Ok(())
}
