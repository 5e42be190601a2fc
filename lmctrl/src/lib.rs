pub mod error;
pub mod event;
pub mod handle;
pub mod notify;
pub mod platform;
