//! Check-config command - prints the effective non-secret settings

use crate::config::AppConfig;

pub fn run() -> anyhow::Result<()> {
    let config = super::load_config()?;

    println!("{}", render(&config));

    Ok(())
}

fn render(config: &AppConfig) -> String {
    [
        format!("server.host = {}", config.server.host),
        format!("server.port = {}", config.server.port),
        format!("logging.level = {}", config.logging.level),
        format!("logging.format = {:?}", config.logging.format).to_lowercase(),
        format!("auth.username = {}", config.auth.username),
        format!("auth.display_name = {}", config.auth.display_name),
        format!(
            "auth.idle_timeout_minutes = {}",
            config.auth.idle_timeout_minutes
        ),
        "configuration OK".to_string(),
    ]
    .join("\n")
}
