mod core;
pub mod backend;
pub mod server;

pub use crate::core::{Dataset, Fields, User, UserUpdate};
pub use crate::core::{dataset, user};
