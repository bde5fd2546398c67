pub mod backend_client;
pub mod models;

pub use backend_client::{BackendClient, DatasetEndpoint};
pub use models::{SaveOutcome, SavedDataInfo, SavedDataStatus};
