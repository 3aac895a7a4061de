pub mod hormones;
pub mod profile;
pub mod record;
pub mod variant;

pub use record::PredictionRecord;
pub use variant::{Scope, Variant};
