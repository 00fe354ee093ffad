//! 领域层对外依赖的抽象接口
//!
//! 协作方查询接口均为只读：解析收件人不得创建、更新或删除任何持久化实体。

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{DeliveryError, LookupError};

use super::model::{PushNotification, Recipient, RoomProfile, UserProfile};

/// 用户资料只读查询
#[async_trait]
pub trait UserReader: Send + Sync {
    async fn find_user(&self, user_id: &str) -> Result<Option<UserProfile>, LookupError>;

    async fn find_device_token(&self, user_id: &str) -> Result<Option<String>, LookupError>;
}

/// 房间资料只读查询
#[async_trait]
pub trait RoomReader: Send + Sync {
    async fn find_room(&self, room_id: &str) -> Result<Option<RoomProfile>, LookupError>;

    /// 返回房间内开启提醒的成员（来源侧已按 alarm_enabled = true 过滤）
    async fn alarm_enabled_members(&self, room_id: &str) -> Result<Vec<Recipient>, LookupError>;
}

/// 推送网关客户端 - 单条消息单设备的外部调用
///
/// 无状态、进程级单例，可在并发分发间安全共享。
#[async_trait]
pub trait PushGateway: Send + Sync {
    async fn send(&self, notification: &PushNotification) -> Result<(), DeliveryError>;
}

pub type UserReaderRef = Arc<dyn UserReader>;
pub type RoomReaderRef = Arc<dyn RoomReader>;
pub type PushGatewayRef = Arc<dyn PushGateway>;
