//! Wire 风格的依赖注入模块
//!
//! 按依赖顺序构建推送分发核心的全部组件。协作方只读接口（用户/房间）由
//! 宿主应用注入。

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::application::PushNotificationHandler;
use crate::config::PushSettings;
use crate::domain::model::EventKind;
use crate::domain::repository::{RoomReaderRef, UserReaderRef};
use crate::domain::service::NotificationDomainService;
use crate::events::{EventDispatcher, HandlerRegistry};
use crate::infrastructure::gateway::build_gateway;
use crate::metrics::PushDispatchMetrics;

/// 应用上下文 - 包含所有已初始化的服务
pub struct PushContext {
    pub dispatcher: Arc<EventDispatcher>,
    pub domain_service: Arc<NotificationDomainService>,
    pub metrics: Arc<PushDispatchMetrics>,
}

/// 构建推送分发核心
pub fn initialize(
    settings: &PushSettings,
    users: UserReaderRef,
    rooms: RoomReaderRef,
) -> Result<PushContext> {
    // 1. 构建推送网关
    let gateway = build_gateway(settings)?;

    // 2. 初始化指标收集
    let metrics = Arc::new(PushDispatchMetrics::new());

    // 3. 构建领域服务
    let domain_service = Arc::new(NotificationDomainService::new(
        users,
        rooms,
        gateway,
        metrics.clone(),
    ));

    // 4. 构建通知处理器并绑定到全部事件类型
    let handler = Arc::new(PushNotificationHandler::new(domain_service.clone()));
    let registry = HandlerRegistry::builder()
        .register(EventKind::FriendRequest, handler.clone())
        .register(EventKind::FriendAccept, handler.clone())
        .register(EventKind::ScheduleUpdate, handler)
        .build();

    // 5. 构建调度器
    let dispatcher = Arc::new(EventDispatcher::new(Arc::new(registry)));

    info!(provider = %settings.provider, "push dispatch core initialized");

    Ok(PushContext {
        dispatcher,
        domain_service,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::lookup::InMemoryDirectory;

    /// 测试：默认配置（noop 网关）可完成装配，三类事件都有处理器
    #[tokio::test]
    async fn test_initialize_with_defaults() {
        let dir = InMemoryDirectory::shared();
        let context = initialize(&PushSettings::default(), dir.clone(), dir).unwrap();

        // 任一事件类型发布后都应登记一个提交后回调
        let mut uow = crate::events::UnitOfWork::begin();
        context.dispatcher.publish(
            &mut uow,
            crate::domain::model::DomainEvent::FriendRequested {
                requester_id: "u-1".to_string(),
                addressee_id: "u-2".to_string(),
            },
        );
        assert_eq!(uow.pending_hooks(), 1);
        uow.rollback();
    }

    /// 测试：fcm 渠道缺少密钥时装配失败
    #[test]
    fn test_initialize_fcm_requires_server_key() {
        let settings = PushSettings {
            provider: "fcm".to_string(),
            ..PushSettings::default()
        };
        let dir = InMemoryDirectory::shared();
        assert!(initialize(&settings, dir.clone(), dir).is_err());
    }
}
