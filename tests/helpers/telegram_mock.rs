//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.
//! Method names are matched case-insensitively since the Bot API accepts
//! both `sendMessage` and `SendMessage`.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
            custom_response: None,
        }
    }
}

impl MockResponseConfig {
    /// A failing response with the given Bot API description
    pub fn failure(description: &str) -> Self {
        Self {
            success: false,
            delay_ms: None,
            custom_response: Some(json!({
                "ok": false,
                "error_code": 400,
                "description": description
            })),
        }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// A bot whose requests go to this server
    pub fn bot(&self) -> Bot {
        Bot::new(test_bot_token())
            .set_api_url(self.server.uri().parse().expect("mock server uri is a valid url"))
    }

    async fn mount(&self, api_method: &str, config: MockResponseConfig, ok_result: Value) {
        let response_body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                json!({ "ok": true, "result": ok_result })
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request"
                })
            }
        });

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .and(path_regex(format!("(?i)^/bot[^/]+/{}$", api_method)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let sent = json!({
            "message_id": 123,
            "from": {
                "id": 12345,
                "is_bot": true,
                "first_name": "TestBot",
                "username": "group_keeper_bot"
            },
            "chat": {
                "id": test_chat_id(),
                "title": "Test Group",
                "type": "supergroup"
            },
            "date": 1640995200,
            "text": "Test message"
        });
        self.mount("sendMessage", config, sent).await;
    }

    /// Setup mock for getChatMember endpoint answering with `status`
    /// (`creator` or `member`)
    pub async fn mock_get_chat_member(&self, status: &str, user_id: u64) {
        let mut member = json!({
            "status": status,
            "user": {
                "id": user_id,
                "is_bot": false,
                "first_name": "Someone"
            }
        });
        if status == "creator" {
            member["is_anonymous"] = json!(false);
        }
        self.mount("getChatMember", MockResponseConfig::default(), member).await;
    }

    /// Setup mock for banChatMember endpoint
    pub async fn mock_ban_chat_member(&self, config: MockResponseConfig) {
        self.mount("banChatMember", config, json!(true)).await;
    }

    /// Setup mock for unbanChatMember endpoint
    pub async fn mock_unban_chat_member(&self, config: MockResponseConfig) {
        self.mount("unbanChatMember", config, json!(true)).await;
    }

    /// Setup mock for deleteMessage endpoint
    pub async fn mock_delete_message(&self, config: MockResponseConfig) {
        self.mount("deleteMessage", config, json!(true)).await;
    }

    /// Number of requests received for a Bot API method
    pub async fn calls_to(&self, api_method: &str) -> usize {
        self.requests_to(api_method).await.len()
    }

    /// JSON bodies of requests received for a Bot API method, in order
    pub async fn requests_to(&self, api_method: &str) -> Vec<Value> {
        let suffix = format!("/{}", api_method.to_lowercase());
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path().to_lowercase().ends_with(&suffix))
            .map(|req| serde_json::from_slice(&req.body).unwrap_or(Value::Null))
            .collect()
    }

    /// Texts of all sendMessage requests, in order
    pub async fn sent_texts(&self) -> Vec<String> {
        self.requests_to("sendMessage")
            .await
            .into_iter()
            .filter_map(|body| body["text"].as_str().map(str::to_string))
            .collect()
    }
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test chat ID
pub fn test_chat_id() -> i64 {
    -1001234567890
}
