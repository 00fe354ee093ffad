//! # Prometheus 指标收集模块

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts, Registry};

/// 全局指标注册表
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// 推送分发指标
pub struct PushDispatchMetrics {
    /// 分发的事件总数
    pub dispatches_total: IntCounterVec,
    /// 网关确认成功的通知总数
    pub notifications_delivered_total: IntCounterVec,
    /// 网关调用失败的通知总数
    pub notifications_failed_total: IntCounterVec,
    /// 因缺少设备 token 被跳过的收件人总数
    pub recipients_skipped_total: IntCounterVec,
    /// 收件人解析失败总数
    pub resolution_failure_total: IntCounterVec,
    /// 单次分发耗时（秒）
    pub dispatch_duration_seconds: Histogram,
}

impl PushDispatchMetrics {
    pub fn new() -> Self {
        let dispatches_total = IntCounterVec::new(
            Opts::new("push_dispatches_total", "Total number of dispatched events"),
            &["event_kind"],
        )
        .expect("Failed to create push_dispatches_total metric");

        let notifications_delivered_total = IntCounterVec::new(
            Opts::new(
                "push_notifications_delivered_total",
                "Total number of notifications accepted by the gateway",
            ),
            &["event_kind"],
        )
        .expect("Failed to create push_notifications_delivered_total metric");

        let notifications_failed_total = IntCounterVec::new(
            Opts::new(
                "push_notifications_failed_total",
                "Total number of notifications the gateway failed to deliver",
            ),
            &["event_kind"],
        )
        .expect("Failed to create push_notifications_failed_total metric");

        let recipients_skipped_total = IntCounterVec::new(
            Opts::new(
                "push_recipients_skipped_total",
                "Total number of recipients skipped for missing device token",
            ),
            &["event_kind"],
        )
        .expect("Failed to create push_recipients_skipped_total metric");

        let resolution_failure_total = IntCounterVec::new(
            Opts::new(
                "push_resolution_failure_total",
                "Total number of dispatches aborted by recipient resolution",
            ),
            &["event_kind"],
        )
        .expect("Failed to create push_resolution_failure_total metric");

        let dispatch_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "push_dispatch_duration_seconds",
                "Push dispatch duration in seconds",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
        )
        .expect("Failed to create push_dispatch_duration_seconds metric");

        let _ = REGISTRY.register(Box::new(dispatches_total.clone()));
        let _ = REGISTRY.register(Box::new(notifications_delivered_total.clone()));
        let _ = REGISTRY.register(Box::new(notifications_failed_total.clone()));
        let _ = REGISTRY.register(Box::new(recipients_skipped_total.clone()));
        let _ = REGISTRY.register(Box::new(resolution_failure_total.clone()));
        let _ = REGISTRY.register(Box::new(dispatch_duration_seconds.clone()));

        Self {
            dispatches_total,
            notifications_delivered_total,
            notifications_failed_total,
            recipients_skipped_total,
            resolution_failure_total,
            dispatch_duration_seconds,
        }
    }
}

impl Default for PushDispatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}
