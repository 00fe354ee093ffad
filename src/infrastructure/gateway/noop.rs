use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::model::PushNotification;
use crate::domain::repository::PushGateway;
use crate::error::DeliveryError;

/// 空实现网关 - 未配置推送渠道时使用，只记录日志
pub struct NoopPushGateway;

#[async_trait]
impl PushGateway for NoopPushGateway {
    async fn send(&self, notification: &PushNotification) -> Result<(), DeliveryError> {
        info!(
            device_token = %notification.device_token,
            kind = %notification.kind,
            "noop push gateway invoked"
        );
        Ok(())
    }
}

impl NoopPushGateway {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self)
    }
}
