//! 基础设施层（Repository impl）

pub mod gateway;
pub mod lookup;

pub use gateway::{FcmPushGateway, NoopPushGateway, build_gateway};
pub use lookup::InMemoryDirectory;
