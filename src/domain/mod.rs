pub mod models;
pub mod normalize;

pub use models::*;
pub use normalize::{check_backend_reply, normalize_dataset};
