//! 通知处理器（编排层）- 轻量级，只负责编排领域服务

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::domain::model::DomainEvent;
use crate::domain::service::NotificationDomainService;
use crate::error::DispatchError;
use crate::events::EventHandler;

/// 推送通知处理器 - 三类事件共用，绑定到各自的事件类型上
pub struct PushNotificationHandler {
    domain_service: Arc<NotificationDomainService>,
}

impl PushNotificationHandler {
    pub fn new(domain_service: Arc<NotificationDomainService>) -> Self {
        Self { domain_service }
    }
}

#[async_trait]
impl EventHandler for PushNotificationHandler {
    #[instrument(skip(self, event), fields(event_kind = %event.kind()))]
    async fn handle(&self, event: DomainEvent) -> Result<(), DispatchError> {
        self.domain_service.dispatch(&event).await?;
        Ok(())
    }
}
