//! API endpoint implementations.

mod chat;
mod files;
mod models;

pub use chat::ChatApi;
pub use files::FilesApi;
pub use models::ModelsApi;
