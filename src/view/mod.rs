pub mod builder;
pub mod models;

pub use builder::{build_race_board, display_score, display_surface};
pub use models::*;
