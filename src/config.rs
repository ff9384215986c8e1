use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub site_secret: String,
    pub bot_token: String,
    pub notify_chat_id: String,
    pub telegram_api_base: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let site_secret = env_required("SITE_SECRET")?;
        let bot_token = env_required("TELEGRAM_BOT_TOKEN")?;
        let notify_chat_id = env_required("NOTIFY_CHAT_ID")?;

        let telegram_api_base = env_or("TELEGRAM_API_BASE", "https://api.telegram.org");

        let host: IpAddr = env_or("RELAY_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid RELAY_HOST: {e}"))?;

        let port: u16 = env_or("RELAY_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid RELAY_PORT: {e}"))?;

        let max_body_size: usize = env_or("RELAY_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid RELAY_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("RELAY_LOG_LEVEL", "info");

        Ok(Config {
            site_secret,
            bot_token,
            notify_chat_id,
            telegram_api_base,
            host,
            port,
            max_body_size,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
