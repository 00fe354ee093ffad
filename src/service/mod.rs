//! 装配层

pub mod wire;

pub use wire::{PushContext, initialize};
