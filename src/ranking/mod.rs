pub mod ranker;
pub mod types;

pub use ranker::{best_horse, effective_score, rank_horses};
pub use types::{EffectiveScore, RankedHorse};
