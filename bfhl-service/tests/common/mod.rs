#![allow(dead_code)]

use bfhl_service::config::{BfhlConfig, GeminiSettings, DEFAULT_GEMINI_MODEL};
use bfhl_service::services::{AnswerProvider, MockAnswerProvider};
use bfhl_service::startup::Application;
use secrecy::Secret;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub const TEST_EMAIL: &str = "tester@example.com";

/// Configuration bound to a random local port.
pub fn test_config(api_key: Option<&str>, api_base: &str) -> BfhlConfig {
    BfhlConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        official_email: TEST_EMAIL.to_string(),
        gemini: GeminiSettings {
            api_key: api_key.map(|key| Secret::new(key.to_string())),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: api_base.to_string(),
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn with a mock provider that answers "Paris".
    pub async fn spawn() -> Self {
        Self::spawn_with_provider(Arc::new(MockAnswerProvider::with_answer("Paris"))).await
    }

    pub async fn spawn_with_provider(provider: Arc<dyn AnswerProvider>) -> Self {
        let config = test_config(None, "http://127.0.0.1:9");
        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");
        Self::launch(app).await
    }

    /// Spawn with the provider chosen from configuration, as in production.
    pub async fn spawn_with_config(config: BfhlConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        Self::launch(app).await
    }

    async fn launch(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post_bfhl(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/bfhl", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// POST and return status code plus parsed JSON body.
    pub async fn post_bfhl_json(&self, body: &Value) -> (u16, Value) {
        let response = self.post_bfhl(body).await;
        let status = response.status().as_u16();
        let body = response.json().await.expect("Failed to parse JSON");
        (status, body)
    }
}
