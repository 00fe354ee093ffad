pub mod notification_handler;

pub use notification_handler::PushNotificationHandler;
