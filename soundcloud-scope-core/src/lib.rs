pub mod models;
pub mod preview;
pub mod scope;

pub use models::SearchResult;
pub use preview::Preview;
pub use scope::Scope;
pub use soundcloud_scope_client::client::Config;
