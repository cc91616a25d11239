mod config;
mod error;
mod router;

pub use config::ServerConfig;
pub use router::{router, SharedStore};
