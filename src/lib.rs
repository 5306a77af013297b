#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

//! # `zyra-async`
//!
//! Async Rust client for the Zyra marketing automation API: email
//! automations, AI content generation, reports, and integration
//! verification.
//!
//! Every JSON endpoint returns the service's uniform
//! [`Envelope`](types::common::Envelope) wrapper, relayed to the caller
//! verbatim. Transport and application failures are normalized into a single
//! [`ZyraError`] in one place, so every endpoint has identical failure
//! semantics.
//!
//! ## Quick Start
//!
//! ```no_run
//! use serde_json::json;
//! use zyra_async::{Client, ZyraConfig, types::automations::EmailAutomationDraft};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ZyraConfig::new().with_api_key("your-api-key");
//! let client = Client::with_config(config);
//!
//! let draft = EmailAutomationDraft::new(
//!     "Welcome Email Series",
//!     json!({"type": "user_signup"}),
//!     json!({"user_segment": "premium"}),
//!     json!({"type": "send_email", "template": "welcome_template"}),
//! );
//!
//! let created = client.automations().create(draft).await?;
//! if created.success {
//!     println!("created: {:?}", created.data.map(|a| a.id));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! Every request carries an `Authorization: Bearer <key>` header. The key is
//! read from `ZYRA_API_KEY` by default; see [`ZyraConfig`] for configuration
//! options.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::ZyraConfig;
pub use crate::error::{ApiErrorObject, ZyraError};
pub use crate::types::common::Envelope;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, ZyraConfig};
}
