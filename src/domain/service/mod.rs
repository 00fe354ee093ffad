//! 领域服务

pub mod composer;
pub mod notification_service;
pub mod resolver;


pub use composer::{APP_TITLE, NoticeContent};
pub use notification_service::NotificationDomainService;
pub use resolver::{RecipientResolver, ResolvedNotice};
