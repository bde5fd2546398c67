use crate::domain::Horse;

pub type EffectiveScore = f64;

/// A horse's place in its race ranking. Borrows the horse; the race itself is never reordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedHorse<'a> {
    pub rank: usize, // 1-based
    pub effective_score: EffectiveScore,
    pub horse: &'a Horse,
}

impl RankedHorse<'_> {
    pub fn is_scored(&self) -> bool {
        self.horse.is_scored()
    }
}
