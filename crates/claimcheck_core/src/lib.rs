//! claimcheck_core - shared types: result record, verdict tone, settings (no I/O deps).

pub mod result;
pub mod settings;

pub use result::{FactCheckResult, VerdictTone};
pub use settings::Settings;
