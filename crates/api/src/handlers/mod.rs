//! HTTP handlers, one module per resource.

pub mod admin;
pub mod bicycle;
pub mod lock;
pub mod network;
pub mod totem;
