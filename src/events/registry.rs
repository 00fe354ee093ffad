//! 事件处理器注册表
//!
//! 以事件类型为键的封闭注册表，装配期构建完成后不再变更。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::model::{DomainEvent, EventKind};
use crate::error::DispatchError;

/// 事件处理器
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: DomainEvent) -> Result<(), DispatchError>;
}

/// 事件类型 -> 处理器 的注册表
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<EventKind, Arc<dyn EventHandler>>,
}

impl HandlerRegistry {
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::default()
    }

    pub fn get(&self, kind: EventKind) -> Option<&Arc<dyn EventHandler>> {
        self.handlers.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[derive(Default)]
pub struct HandlerRegistryBuilder {
    handlers: HashMap<EventKind, Arc<dyn EventHandler>>,
}

impl HandlerRegistryBuilder {
    pub fn register(mut self, kind: EventKind, handler: Arc<dyn EventHandler>) -> Self {
        if self.handlers.insert(kind, handler).is_some() {
            warn!(event_kind = %kind, "handler for event kind replaced");
        }
        self
    }

    pub fn build(self) -> HandlerRegistry {
        HandlerRegistry {
            handlers: self.handlers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopHandler;

    #[async_trait]
    impl EventHandler for NoopHandler {
        async fn handle(&self, _event: DomainEvent) -> Result<(), DispatchError> {
            Ok(())
        }
    }

    /// 测试：注册后可按事件类型取回处理器
    #[test]
    fn test_registered_handler_is_found_by_kind() {
        let registry = HandlerRegistry::builder()
            .register(EventKind::FriendRequest, Arc::new(NoopHandler))
            .build();

        assert!(registry.get(EventKind::FriendRequest).is_some());
        assert!(registry.get(EventKind::ScheduleUpdate).is_none());
        assert_eq!(registry.len(), 1);
    }
}
