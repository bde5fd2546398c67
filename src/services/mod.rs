pub mod analysis;
pub mod fetch;

pub use analysis::{AnalysisOutput, AnalysisService};
pub use fetch::FetchService;
