pub mod classify;
pub mod donations;
pub mod roster;
pub mod telemetry;
pub mod tracker;

// Re-export specific items if needed for convenient access
pub use classify::{classify, SupportAssessment, SupportTier};
