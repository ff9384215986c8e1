use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{Notifier, NotifyError};

pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    #[serde(default)]
    ok: bool,
    description: Option<String>,
}

impl TelegramNotifier {
    pub fn new(api_base: &str, bot_token: &str, chat_id: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            api_base: api_base.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.bot_token);

        let resp = self
            .client
            .post(&url)
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await?;

        let body: SendMessageResponse = resp
            .json()
            .await
            .map_err(|e| NotifyError::from(format!("Invalid Telegram response: {e}")))?;

        if !body.ok {
            let description = body.description.unwrap_or_else(|| "unknown error".to_string());
            return Err(NotifyError::from(format!("Telegram API error: {description}")));
        }

        Ok(())
    }
}
