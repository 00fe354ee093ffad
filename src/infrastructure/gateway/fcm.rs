//! FCM 风格的 HTTP 推送网关客户端

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::PushSettings;
use crate::domain::model::PushNotification;
use crate::domain::repository::PushGateway;
use crate::error::DeliveryError;

/// FCM 推送网关客户端
///
/// 无状态，进程启动时构建一次，跨并发分发共享。单条消息单次调用，
/// 超时与拒绝都表达为 `DeliveryError`，不会升级为进程级错误。
pub struct FcmPushGateway {
    client: Client,
    endpoint: String,
    server_key: String,
}

#[derive(Serialize)]
struct FcmMessage<'a> {
    to: &'a str,
    notification: FcmNotification<'a>,
    data: FcmData<'a>,
}

#[derive(Serialize)]
struct FcmNotification<'a> {
    title: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
}

#[derive(Serialize)]
struct FcmData<'a> {
    r#type: &'a str,
    reference_id: &'a str,
}

impl FcmPushGateway {
    pub fn new(settings: &PushSettings, server_key: String) -> Result<Self> {
        let client = Client::builder()
            .use_rustls_tls()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|err| anyhow::anyhow!("failed to build http client: {}", err))?;

        Ok(Self {
            client,
            endpoint: settings.fcm_endpoint.clone(),
            server_key,
        })
    }

    fn payload<'a>(notification: &'a PushNotification) -> FcmMessage<'a> {
        FcmMessage {
            to: &notification.device_token,
            notification: FcmNotification {
                title: &notification.title,
                body: &notification.body,
                image: notification.image_url.as_deref(),
            },
            data: FcmData {
                r#type: notification.kind.as_str(),
                reference_id: &notification.reference_id,
            },
        }
    }
}

#[async_trait]
impl PushGateway for FcmPushGateway {
    async fn send(&self, notification: &PushNotification) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("authorization", format!("key={}", self.server_key))
            .json(&Self::payload(notification))
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    DeliveryError::Timeout
                } else {
                    DeliveryError::Transport(err.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(device_token = %notification.device_token, "push accepted by gateway");
            Ok(())
        } else {
            Err(DeliveryError::Rejected {
                reason: status.to_string(),
            })
        }
    }
}
