mod builder;
mod client;
pub mod error;
pub mod response;

pub use builder::Builder;
pub use client::HttpBackend;
