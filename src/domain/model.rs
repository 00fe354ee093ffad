use std::fmt;

use serde::{Deserialize, Serialize};

/// 领域事件（封闭变体集）
///
/// 由业务事务代码创建，经调度器在事务提交后恰好消费一次。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DomainEvent {
    /// 好友申请已创建
    FriendRequested {
        requester_id: String,
        addressee_id: String,
    },
    /// 好友申请已接受
    FriendAccepted {
        requester_id: String,
        addressee_id: String,
    },
    /// 行程日程批量编辑已落库
    ScheduleBatchUpdated {
        trip_id: String,
        room_id: String,
        actor_user_id: String,
        actor_nickname: String,
        day_number: u32,
    },
}

impl DomainEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomainEvent::FriendRequested { .. } => EventKind::FriendRequest,
            DomainEvent::FriendAccepted { .. } => EventKind::FriendAccept,
            DomainEvent::ScheduleBatchUpdated { .. } => EventKind::ScheduleUpdate,
        }
    }
}

/// 事件类型 - 处理器注册表的键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    FriendRequest,
    FriendAccept,
    ScheduleUpdate,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::FriendRequest => "friend_request",
            EventKind::FriendAccept => "friend_accept",
            EventKind::ScheduleUpdate => "schedule_update",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 用户资料（只读投影）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub nickname: String,
    pub active: bool,
}

/// 房间资料（只读投影）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomProfile {
    pub room_id: String,
    pub display_name: String,
}

/// 推送收件人 - 每次分发时解析，本子系统不持久化
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub user_id: String,
    pub nickname: String,
    pub device_token: Option<String>,
    pub alarm_enabled: bool,
    pub active: bool,
}

/// 推送通知消息 - 每个（事件，收件人）对新建一条，发送后不复用不修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushNotification {
    pub kind: EventKind,
    pub reference_id: String,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    pub device_token: String,
}

/// 单次事件扇出的执行统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// 实际发起的网关调用次数
    pub attempted: usize,
    /// 网关确认成功的次数
    pub delivered: usize,
    /// 网关调用失败的次数
    pub failed: usize,
    /// 因缺少设备 token 被静默跳过的收件人数
    pub skipped: usize,
}
