//! Request and response types for the Zyra API

/// AI analysis and generation types
pub mod ai;
/// Email automation types
pub mod automations;
/// Shared envelope and pagination types
pub mod common;
/// Service health types
pub mod health;
/// Integration verification types
pub mod integrations;
/// Report types
pub mod reports;

pub use ai::{
    AiAnalysis, AnalyzeRequest, CvRequest, GeneratedCv, GeneratedPersona, GeneratedSocialContent,
    PersonaRequest, SocialContentRequest,
};
pub use automations::{
    AutomationRun, EmailAutomation, EmailAutomationDraft, EmailAutomationPatch, TriggerRequest,
};
pub use common::{Envelope, ListQuery, Paginated, Pagination};
pub use health::ServiceHealth;
pub use integrations::{
    ConnectionTestRequest, ConnectionTestResult, IntegrationStatus, VerificationConfirmRequest,
    VerificationConfirmed, VerificationRequest, VerificationStarted,
};
pub use reports::{Report, ReportDraft, ReportFrequency, ReportRun, ReportType};
