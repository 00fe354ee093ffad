pub mod fcm;
pub mod noop;

use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use crate::config::PushSettings;
use crate::domain::repository::PushGatewayRef;

pub use fcm::FcmPushGateway;
pub use noop::NoopPushGateway;

/// 按配置的 provider 构建推送网关
pub fn build_gateway(settings: &PushSettings) -> Result<PushGatewayRef> {
    match settings.provider.as_str() {
        "fcm" => {
            let server_key = settings
                .fcm_server_key
                .clone()
                .ok_or_else(|| anyhow::anyhow!("fcm provider requires PUSH_FCM_SERVER_KEY"))?;
            let gateway = FcmPushGateway::new(settings, server_key)?;
            Ok(Arc::new(gateway))
        }
        "noop" => Ok(NoopPushGateway::shared()),
        other => {
            warn!(provider = %other, "unknown push provider, falling back to noop");
            Ok(NoopPushGateway::shared())
        }
    }
}
