//! HTTP handlers, one module per dashboard tab plus shared metadata.

pub mod meta;
pub mod network;
pub mod projection;
pub mod upload;
