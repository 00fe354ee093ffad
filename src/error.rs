//! 统一异常处理模块

use thiserror::Error;

/// 协作方只读查询错误（用户/房间资料存储）
#[derive(Debug, Error)]
pub enum LookupError {
    /// 底层查询失败
    #[error("collaborator lookup failed: {0}")]
    Backend(String),
}

/// 收件人解析错误 - 中止当前事件的分发，不影响其他事件
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// 引用的用户不存在
    #[error("referenced user not found: {user_id}")]
    UserNotFound { user_id: String },

    /// 引用的房间不存在
    #[error("referenced room not found: {room_id}")]
    RoomNotFound { room_id: String },

    /// 查询基础设施失败
    #[error("recipient lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

/// 推送投递错误 - 按收件人记录日志，扇出继续
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// 网关拒绝（非 2xx 响应、无效 token 等）
    #[error("push gateway rejected the message: {reason}")]
    Rejected { reason: String },

    /// 网关请求超时
    #[error("push gateway request timed out")]
    Timeout,

    /// 传输层错误
    #[error("push gateway transport error: {0}")]
    Transport(String),
}

/// 分发错误 - 在调度器边界被捕获并记录，绝不回传给业务调用方
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("recipient resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("push delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("unexpected dispatch failure: {0}")]
    Unexpected(#[from] anyhow::Error),
}
