use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zyra_async::types::ai::{AnalyzeRequest, CvRequest, PersonaRequest, SocialContentRequest};
use zyra_async::{Client, ZyraConfig};

fn test_client(server: &MockServer) -> Client<ZyraConfig> {
    let config = ZyraConfig::new()
        .with_api_base(server.uri())
        .with_api_key("k");
    Client::with_config(config)
}

#[tokio::test]
async fn analyze_posts_wire_names() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/analyze"))
        .and(body_json(json!({
            "sourceType": "email",
            "sourceId": "email_123",
            "options": {"model": "gpt-4", "temperature": 0.7}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "an_1",
                "sourceType": "email",
                "sourceId": "email_123",
                "payload": {"subject": "Hello"},
                "modelUsed": "gpt-4",
                "createdAt": "2025-06-01T12:00:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = AnalyzeRequest::new("email", "email_123")
        .with_options(json!({"model": "gpt-4", "temperature": 0.7}));

    let env = test_client(&server).ai().analyze(req).await.unwrap();
    let analysis = env.data.unwrap();
    assert_eq!(analysis.id, "an_1");
    assert_eq!(analysis.model_used, "gpt-4");
    assert!(analysis.result.is_none());
}

#[tokio::test]
async fn analysis_fetches_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ai/analysis/an_1"))
        .and(header("authorization", "Bearer k"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "an_1",
                "sourceType": "email",
                "payload": {},
                "modelUsed": "gpt-4",
                "result": {"sentiment": "positive"},
                "confidence": 0.92,
                "createdAt": "2025-06-01T12:00:00Z"
            }
        })))
        .mount(&server)
        .await;

    let env = test_client(&server).ai().analysis("an_1").await.unwrap();
    let analysis = env.data.unwrap();
    assert_eq!(analysis.result.unwrap()["sentiment"], "positive");
    assert!((analysis.confidence.unwrap() - 0.92).abs() < f64::EPSILON);
}

#[tokio::test]
async fn generate_cv_parses_document() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/generate/cv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "content": "John Doe - Senior Developer",
                "html": "<h1>John Doe</h1>",
                "tokens": 1200,
                "cost": 0.024
            }
        })))
        .mount(&server)
        .await;

    let req = CvRequest::new(
        json!({"firstName": "John", "lastName": "Doe"}),
        vec![json!({"company": "Tech Corp", "position": "Senior Developer"})],
        vec![json!({"degree": "BSc Computer Science"})],
        vec!["Rust".into(), "Python".into()],
    )
    .with_template("modern");

    let env = test_client(&server).ai().generate_cv(req).await.unwrap();
    let cv = env.data.unwrap();
    assert_eq!(cv.tokens, 1200);
    assert!(cv.html.contains("John Doe"));
}

#[tokio::test]
async fn generate_social_parses_post() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/generate/social"))
        .and(body_json(json!({
            "platform": "twitter",
            "topic": "AI and automation",
            "tone": "professional",
            "targetAudience": "tech professionals",
            "includeHashtags": true,
            "includeCallToAction": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "content": "Automation is eating the inbox.",
                "engagementScore": 0.87,
                "hashtags": ["#AI", "#automation"],
                "tokens": 96,
                "cost": 0.002
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = SocialContentRequest::new(
        "twitter",
        "AI and automation",
        "professional",
        "tech professionals",
    )
    .with_hashtags(true)
    .with_call_to_action(true);

    let env = test_client(&server).ai().generate_social(req).await.unwrap();
    let post = env.data.unwrap();
    assert_eq!(post.hashtags, vec!["#AI", "#automation"]);
    assert!((post.engagement_score - 0.87).abs() < f64::EPSILON);
}

#[tokio::test]
async fn generate_persona_parses_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/generate/persona"))
        .and(body_json(json!({
            "dataSource": "customer_data",
            "sampleSize": 1000,
            "criteria": {"age_range": "25-35"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "persona": {"name": "Tech-savvy Tina", "age": 29},
                "tokens": 640,
                "cost": 0.013
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = PersonaRequest::new("customer_data")
        .with_sample_size(1000)
        .with_criteria(json!({"age_range": "25-35"}));

    let env = test_client(&server).ai().generate_persona(req).await.unwrap();
    let persona = env.data.unwrap();
    assert_eq!(persona.persona["name"], "Tech-savvy Tina");
    assert_eq!(persona.tokens, 640);
}
