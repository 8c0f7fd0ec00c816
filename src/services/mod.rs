// Service exports
pub mod catalog;
pub mod chat;

pub use catalog::{Catalog, CatalogError};
pub use chat::{ChatClient, ChatError};
