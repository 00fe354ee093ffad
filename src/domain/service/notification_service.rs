//! 推送领域服务 - 解析、组装、扇出执行

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, instrument};

use crate::domain::model::{DispatchSummary, DomainEvent};
use crate::domain::repository::{PushGatewayRef, RoomReaderRef, UserReaderRef};
use crate::error::DispatchError;
use crate::metrics::PushDispatchMetrics;

use super::composer;
use super::resolver::RecipientResolver;

/// 推送领域服务
///
/// 每个事件一次调用：解析收件人集合，为每个持有设备 token 的收件人组装
/// 并发送一条消息。单个收件人的投递失败只记录日志，不影响其余收件人。
pub struct NotificationDomainService {
    resolver: RecipientResolver,
    gateway: PushGatewayRef,
    metrics: Arc<PushDispatchMetrics>,
}

impl NotificationDomainService {
    pub fn new(
        users: UserReaderRef,
        rooms: RoomReaderRef,
        gateway: PushGatewayRef,
        metrics: Arc<PushDispatchMetrics>,
    ) -> Self {
        Self {
            resolver: RecipientResolver::new(users, rooms),
            gateway,
            metrics,
        }
    }

    /// 执行单个事件的推送分发
    #[instrument(skip(self, event), fields(event_kind = %event.kind()))]
    pub async fn dispatch(&self, event: &DomainEvent) -> Result<DispatchSummary, DispatchError> {
        let start = Instant::now();
        let kind = event.kind();
        self.metrics
            .dispatches_total
            .with_label_values(&[kind.as_str()])
            .inc();

        // 解析失败在发起任何网关调用之前中止整次分发
        let notice = match self.resolver.resolve(event).await {
            Ok(notice) => notice,
            Err(err) => {
                self.metrics
                    .resolution_failure_total
                    .with_label_values(&[kind.as_str()])
                    .inc();
                return Err(err.into());
            }
        };

        let mut summary = DispatchSummary::default();
        for recipient in &notice.recipients {
            let Some(notification) = composer::compose(&notice.content, recipient) else {
                debug!(user_id = %recipient.user_id, "recipient has no device token, skipping");
                summary.skipped += 1;
                self.metrics
                    .recipients_skipped_total
                    .with_label_values(&[kind.as_str()])
                    .inc();
                continue;
            };

            summary.attempted += 1;
            match self.gateway.send(&notification).await {
                Ok(()) => {
                    summary.delivered += 1;
                    self.metrics
                        .notifications_delivered_total
                        .with_label_values(&[kind.as_str()])
                        .inc();
                }
                Err(err) => {
                    // 单收件人失败：记录后继续处理剩余收件人
                    error!(
                        user_id = %recipient.user_id,
                        device_token = %notification.device_token,
                        error = %err,
                        "push delivery failed, continuing with remaining recipients"
                    );
                    summary.failed += 1;
                    self.metrics
                        .notifications_failed_total
                        .with_label_values(&[kind.as_str()])
                        .inc();
                }
            }
        }

        self.metrics
            .dispatch_duration_seconds
            .observe(start.elapsed().as_secs_f64());

        info!(
            event_kind = %kind,
            attempted = summary.attempted,
            delivered = summary.delivered,
            failed = summary.failed,
            skipped = summary.skipped,
            "push dispatch completed"
        );

        Ok(summary)
    }
}
