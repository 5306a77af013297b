use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zyra_async::types::reports::{ReportDraft, ReportFrequency, ReportType};
use zyra_async::{Client, ZyraConfig, ZyraError};

fn test_client(server: &MockServer) -> Client<ZyraConfig> {
    let config = ZyraConfig::new()
        .with_api_base(server.uri())
        .with_api_key("k");
    Client::with_config(config)
}

#[tokio::test]
async fn create_report_parses_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "r1",
                "name": "Monthly Sales Report",
                "type": "scheduled",
                "frequency": "monthly",
                "query": {"type": "sql", "sql": "SELECT 1"},
                "settings": {"format": "pdf", "template": "sales_report"},
                "createdAt": "2025-06-01T12:00:00Z"
            }
        })))
        .mount(&server)
        .await;

    let draft = ReportDraft::new(
        "Monthly Sales Report",
        ReportType::Scheduled,
        json!({"type": "sql", "sql": "SELECT 1"}),
    )
    .with_frequency(ReportFrequency::Monthly)
    .with_recipients(vec![json!({"email": "manager@company.com"})])
    .with_settings(json!({"format": "pdf", "template": "sales_report"}));

    let env = test_client(&server).reports().create(draft).await.unwrap();
    let report = env.data.unwrap();
    assert_eq!(report.id, "r1");
    assert_eq!(report.kind, ReportType::Scheduled);
    assert_eq!(report.frequency, Some(ReportFrequency::Monthly));
}

#[tokio::test]
async fn list_reports_parses_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reports"))
        .and(header("authorization", "Bearer k"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {
                    "id": "r1",
                    "name": "Monthly Sales Report",
                    "type": "scheduled",
                    "frequency": "monthly",
                    "query": {},
                    "settings": {},
                    "createdAt": "2025-06-01T12:00:00Z"
                },
                {
                    "id": "r2",
                    "name": "One-off audit",
                    "type": "ad-hoc",
                    "query": {},
                    "settings": {},
                    "createdAt": "2025-06-02T09:00:00Z"
                }
            ]
        })))
        .mount(&server)
        .await;

    let env = test_client(&server).reports().list().await.unwrap();
    let reports = env.data.unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1].kind, ReportType::AdHoc);
    assert!(reports[1].frequency.is_none());
}

#[tokio::test]
async fn run_report_posts_to_run_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reports/r1/run"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"runId": "run_9"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let env = test_client(&server).reports().run("r1").await.unwrap();
    assert_eq!(env.data.unwrap().run_id, "run_9");
}

#[tokio::test]
async fn download_returns_exact_bytes() {
    let server = MockServer::start().await;

    // A PDF-looking prefix with non-UTF8 bytes; must come back untouched.
    let body: Vec<u8> = vec![0x25, 0x50, 0x44, 0x46, 0x2d, 0x31, 0x2e, 0x37, 0x00, 0xff, 0xfe];

    Mock::given(method("GET"))
        .and(path("/reports/download/run_9"))
        .and(header("authorization", "Bearer k"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&server)
        .await;

    let bytes = test_client(&server).reports().download("run_9").await.unwrap();
    assert_eq!(bytes.as_ref(), body.as_slice());
}

#[tokio::test]
async fn download_failure_uses_same_normalization() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reports/download/run_9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "run not found"
        })))
        .mount(&server)
        .await;

    let err = test_client(&server).reports().download("run_9").await.unwrap_err();
    match err {
        ZyraError::Api(obj) => {
            assert_eq!(obj.status_code, Some(404));
            assert_eq!(obj.detail(), "run not found");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}
