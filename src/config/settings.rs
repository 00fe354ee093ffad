//! 推送调度配置

use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PushSettings {
    /// 推送渠道: "fcm" | "noop"
    pub provider: String,
    pub fcm_endpoint: String,
    pub fcm_server_key: Option<String>,
    /// 单次网关调用超时
    pub request_timeout_ms: u64,
}

impl PushSettings {
    pub fn from_env() -> Self {
        let provider = env::var("PUSH_PROVIDER").unwrap_or_else(|_| "noop".to_string());

        let fcm_endpoint = env::var("PUSH_FCM_ENDPOINT")
            .unwrap_or_else(|_| "https://fcm.googleapis.com/fcm/send".to_string());

        let fcm_server_key = env::var("PUSH_FCM_SERVER_KEY").ok();

        let request_timeout_ms = env::var("PUSH_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(5000);

        Self {
            provider,
            fcm_endpoint,
            fcm_server_key,
            request_timeout_ms,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for PushSettings {
    fn default() -> Self {
        Self {
            provider: "noop".to_string(),
            fcm_endpoint: "https://fcm.googleapis.com/fcm/send".to_string(),
            fcm_server_key: None,
            request_timeout_ms: 5000,
        }
    }
}
