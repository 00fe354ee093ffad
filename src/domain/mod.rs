//! 领域层（业务核心逻辑）

pub mod model;
pub mod repository;
pub mod service;

pub use model::{
    DispatchSummary, DomainEvent, EventKind, PushNotification, Recipient, RoomProfile, UserProfile,
};
pub use repository::{
    PushGateway, PushGatewayRef, RoomReader, RoomReaderRef, UserReader, UserReaderRef,
};
pub use service::NotificationDomainService;
