//! TripMate 推送调度核心库
//!
//! 业务事务内发布领域事件，事务持久提交后解析收件人、逐人组装并经外部
//! 推送网关投递通知。提供统一的提交门控、失败隔离与装配入口。

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod logging;
pub mod metrics;
pub mod service;

pub use config::PushSettings;
pub use domain::model::{
    DispatchSummary, DomainEvent, EventKind, PushNotification, Recipient, RoomProfile, UserProfile,
};
pub use domain::repository::{
    PushGateway, PushGatewayRef, RoomReader, RoomReaderRef, UserReader, UserReaderRef,
};
pub use domain::service::NotificationDomainService;
pub use error::{DeliveryError, DispatchError, LookupError, ResolutionError};
pub use events::{EventDispatcher, EventHandler, HandlerRegistry, UnitOfWork};
pub use service::{PushContext, initialize};
