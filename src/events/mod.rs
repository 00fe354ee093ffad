//! 提交门控的事件分发

pub mod dispatcher;
pub mod registry;
pub mod txn;

pub use dispatcher::EventDispatcher;
pub use registry::{EventHandler, HandlerRegistry, HandlerRegistryBuilder};
pub use txn::UnitOfWork;
