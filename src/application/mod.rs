//! 应用层（编排）

pub mod handlers;

pub use handlers::PushNotificationHandler;
