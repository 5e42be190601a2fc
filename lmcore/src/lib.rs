pub mod error;
pub mod interest;
pub mod lead;
pub mod links;
pub mod page;
pub mod pagination;
pub mod platform;
pub mod record;
