//! 事件调度器 - 提交门控的分发入口
//!
//! `publish` 在业务事务内部调用，只登记回调；事务提交后处理器在独立任务
//! 上恰好执行一次，事务回滚则永不执行。处理器返回的任何错误都在此边界
//! 被捕获并记录，绝不回传给业务调用方。

use std::sync::Arc;

use tracing::{error, warn};

use crate::domain::model::DomainEvent;

use super::registry::HandlerRegistry;
use super::txn::UnitOfWork;

/// 事件调度器
pub struct EventDispatcher {
    registry: Arc<HandlerRegistry>,
}

impl EventDispatcher {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    /// 发布一个领域事件
    ///
    /// 必须在持有 `UnitOfWork` 的业务事务内调用。处理器在提交后的独立
    /// 任务上运行，不延长也不重新打开已提交的事务。
    pub fn publish(&self, uow: &mut UnitOfWork, event: DomainEvent) {
        let kind = event.kind();
        let Some(handler) = self.registry.get(kind) else {
            warn!(event_kind = %kind, "no handler bound for event kind, dropping event");
            return;
        };

        let handler = Arc::clone(handler);
        uow.register_after_commit(move || {
            tokio::spawn(async move {
                if let Err(err) = handler.handle(event).await {
                    // 业务操作已经成功落库，通知失败只观测不传播
                    error!(event_kind = %kind, error = %err, "notification handler failed");
                }
            });
        });
    }
}
