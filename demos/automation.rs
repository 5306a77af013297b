//! End-to-end tour of the Zyra API client.
//!
//! Requires `ZYRA_API_KEY` to be set; `ZYRA_BASE_URL` optionally points the
//! client at a non-production deployment.
//!
//! Run with: `cargo run --example automation`

use anyhow::{Context, Result};
use serde_json::json;
use zyra_async::Client;
use zyra_async::types::ai::{AnalyzeRequest, CvRequest, PersonaRequest, SocialContentRequest};
use zyra_async::types::automations::{EmailAutomationDraft, EmailAutomationPatch};
use zyra_async::types::common::ListQuery;
use zyra_async::types::integrations::{ConnectionTestRequest, VerificationRequest};
use zyra_async::types::reports::{ReportDraft, ReportFrequency, ReportType};

async fn email_automation_tour(client: &Client<zyra_async::ZyraConfig>) -> Result<()> {
    let draft = EmailAutomationDraft::new(
        "Welcome Email Series",
        json!({"type": "user_signup", "conditions": ["email_verified"]}),
        json!({"user_segment": "premium", "timezone": "UTC"}),
        json!({"type": "send_email", "template": "welcome_template", "delay": "1 hour"}),
    )
    .with_description("Automated welcome sequence for new users")
    .with_schedule(json!({"frequency": "daily", "time": "09:00"}))
    .with_settings(json!({"max_retries": 3, "retry_delay": "5 minutes"}));

    let created = client.automations().create(draft).await?;
    let automation = created.data.context("create returned no automation")?;
    println!("created automation {}", automation.id);

    let listed = client.automations().list(ListQuery::new()).await?;
    if let Some(page) = listed.data {
        println!("{} automation(s) on page 1", page.data.len());
    }

    let triggered = client
        .automations()
        .trigger(&automation.id, Some(json!({"manual": true, "user_id": "123"})))
        .await?;
    if let Some(run) = triggered.data {
        println!("triggered run {}", run.run_id);
    }

    let updated = client
        .automations()
        .update(
            &automation.id,
            EmailAutomationPatch::new()
                .with_name("Updated Welcome Series")
                .with_active(false),
        )
        .await?;
    println!("update success: {}", updated.success);

    Ok(())
}

async fn ai_tour(client: &Client<zyra_async::ZyraConfig>) -> Result<()> {
    let analysis = client
        .ai()
        .analyze(
            AnalyzeRequest::new("email", "email_123")
                .with_options(json!({"model": "gpt-4", "temperature": 0.7})),
        )
        .await?;
    println!("analysis queued: {:?}", analysis.data.map(|a| a.id));

    let cv = client
        .ai()
        .generate_cv(
            CvRequest::new(
                json!({
                    "firstName": "John",
                    "lastName": "Doe",
                    "email": "john@example.com",
                    "location": "San Francisco, CA"
                }),
                vec![json!({
                    "company": "Tech Corp",
                    "position": "Senior Developer",
                    "duration": "2020-2023"
                })],
                vec![json!({"degree": "Bachelor of Computer Science", "year": "2018"})],
                vec!["Rust".into(), "Python".into(), "React".into()],
            )
            .with_template("modern"),
        )
        .await?;
    if let Some(doc) = cv.data {
        println!("CV generated: {} tokens, ${:.3}", doc.tokens, doc.cost);
    }

    let social = client
        .ai()
        .generate_social(
            SocialContentRequest::new(
                "twitter",
                "AI and automation",
                "professional",
                "tech professionals",
            )
            .with_hashtags(true)
            .with_call_to_action(true),
        )
        .await?;
    if let Some(post) = social.data {
        println!("social post ({} hashtags): {}", post.hashtags.len(), post.content);
    }

    let persona = client
        .ai()
        .generate_persona(
            PersonaRequest::new("customer_data")
                .with_sample_size(1000)
                .with_criteria(json!({"age_range": "25-35", "interests": ["technology"]})),
        )
        .await?;
    println!("persona generated: {:?}", persona.data.map(|p| p.persona));

    Ok(())
}

async fn reports_tour(client: &Client<zyra_async::ZyraConfig>) -> Result<()> {
    let created = client
        .reports()
        .create(
            ReportDraft::new(
                "Monthly Sales Report",
                ReportType::Scheduled,
                json!({
                    "type": "sql",
                    "sql": "SELECT * FROM sales WHERE created_at >= NOW() - INTERVAL 1 MONTH"
                }),
            )
            .with_frequency(ReportFrequency::Monthly)
            .with_recipients(vec![json!({"email": "manager@company.com"})])
            .with_settings(json!({"format": "pdf", "template": "sales_report"})),
        )
        .await?;
    let report = created.data.context("create returned no report")?;
    println!("created report {}", report.id);

    let run = client.reports().run(&report.id).await?;
    let run = run.data.context("run returned no handle")?;
    println!("report run {}", run.run_id);

    let bytes = client.reports().download(&run.run_id).await?;
    println!("downloaded {} bytes", bytes.len());

    Ok(())
}

async fn integrations_tour(client: &Client<zyra_async::ZyraConfig>) -> Result<()> {
    let status = client.integrations().status().await?;
    println!("integration status: {:?}", status.data);

    let verification = client
        .integrations()
        .request_verification(VerificationRequest::new("facebook_page", "page_123", "email"))
        .await?;
    if let Some(started) = verification.data {
        println!("verification {}: {}", started.verification_id, started.message);
    }

    // In a real scenario the user enters the code they received
    let confirmed = client
        .integrations()
        .confirm_verification("verification_token_here")
        .await?;
    println!("verified: {:?}", confirmed.data.map(|c| c.verified));

    let test = client
        .integrations()
        .test_connection(ConnectionTestRequest::new("email"))
        .await?;
    println!("connection test: {:?}", test.data.map(|t| t.connected));

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::new();

    let health = client.health().check().await?;
    println!("API health: {:?}", health.data);

    email_automation_tour(&client).await?;
    ai_tour(&client).await?;
    reports_tour(&client).await?;
    integrations_tour(&client).await?;

    Ok(())
}
