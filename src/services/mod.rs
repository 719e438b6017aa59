// Service exports
pub mod artifacts;
pub mod catalog;
pub mod scorer;

pub use artifacts::{ArtifactError, CategoricalEncoder, GradientBoostedModel, UnknownCategory};
pub use catalog::Catalog;
pub use scorer::ScoringService;
