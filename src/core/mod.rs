pub mod user;
pub mod dataset;

pub use user::{Fields, User, UserUpdate};
pub use dataset::Dataset;
