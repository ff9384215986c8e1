use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Client;

use appeal_relay::config::Config;
use appeal_relay::notify::{Notifier, NotifyError};

/// A running test server instance with an injected notifier.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub sent: Arc<Mutex<Vec<String>>>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Every text the notifier was asked to deliver, in order.
    pub fn sent_texts(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

/// Records every delivered text instead of performing network I/O.
struct RecordingNotifier {
    sent: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Always reports delivery failure.
struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _text: &str) -> Result<(), NotifyError> {
        Err(NotifyError::from("Telegram API error: chat not found"))
    }
}

pub fn test_config() -> Config {
    Config {
        site_secret: "test-secret".to_string(),
        bot_token: "test-token".to_string(),
        notify_chat_id: "42".to_string(),
        telegram_api_base: "http://127.0.0.1:9".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        max_body_size: 65536,
        log_level: "info".to_string(),
    }
}

/// Spawn the app with a recording notifier that accepts every message.
pub async fn spawn_app() -> TestApp {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let notifier = Arc::new(RecordingNotifier { sent: sent.clone() });
    spawn_with(notifier, sent).await
}

/// Spawn the app with a notifier that fails every delivery.
pub async fn spawn_failing_app() -> TestApp {
    let sent = Arc::new(Mutex::new(Vec::new()));
    spawn_with(Arc::new(FailingNotifier), sent).await
}

async fn spawn_with(notifier: Arc<dyn Notifier>, sent: Arc<Mutex<Vec<String>>>) -> TestApp {
    let app = appeal_relay::build_app(test_config(), notifier);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .expect("test server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        sent,
    }
}
