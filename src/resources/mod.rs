//! API resource implementations for the Zyra client

/// AI analysis and generation resource
pub mod ai;
/// Email automations resource
pub mod automations;
/// Service health resource
pub mod health;
/// Integration verification resource
pub mod integrations;
/// Reports resource
pub mod reports;

pub use ai::Ai;
pub use automations::Automations;
pub use health::Health;
pub use integrations::Integrations;
pub use reports::Reports;
