//! `blogforge doctor` — Diagnose config and provider health.

use blogforge_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Blogforge Doctor — Diagnostics");
    println!("==============================\n");

    let mut issues = 0;

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("  [ok] Config file found");
    } else {
        println!("  [--] No config file — run `blogforge onboard` (defaults will be used)");
    }

    match AppConfig::load() {
        Ok(config) => {
            println!("  [ok] Config valid");

            if config.has_api_key() {
                println!("  [ok] API key configured");

                match blogforge_providers::build_from_config(&config) {
                    Ok(provider) => match provider.health_check().await {
                        Ok(true) => println!("  [ok] Completion gateway reachable"),
                        Ok(false) => {
                            println!("  [!!] Completion gateway rejected the request — check your API key");
                            issues += 1;
                        }
                        Err(e) => {
                            println!("  [!!] Completion gateway unreachable: {e}");
                            issues += 1;
                        }
                    },
                    Err(e) => {
                        println!("  [!!] Provider not usable: {e}");
                        issues += 1;
                    }
                }
            } else {
                println!("  [!!] No API key — add api_key to config.toml or set BLOGFORGE_API_KEY");
                issues += 1;
            }
        }
        Err(e) => {
            println!("  [!!] Config invalid: {e}");
            issues += 1;
        }
    }

    println!();
    if issues == 0 {
        println!("  All checks passed");
    } else {
        println!("  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
