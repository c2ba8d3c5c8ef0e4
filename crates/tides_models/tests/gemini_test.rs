use serde_json::json;
use tides_core::{History, PromptAssembler, Turn};
use tides_error::{CompletionErrorKind, ErrorClass, TidesError, TidesErrorKind};
use tides_interface::CompletionDriver;
use tides_models::{ApiKey, GeminiClient, GeminiConfig};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-2.0-flash:generateContent";

fn client_for(server: &MockServer, key: Option<&str>) -> anyhow::Result<GeminiClient> {
    let config = GeminiConfig::builder()
        .base_url(server.uri())
        .api_key(key.and_then(ApiKey::new))
        .build()?;
    Ok(GeminiClient::new(config)?)
}

fn reply_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": [{ "text": text }] } }
        ]
    })
}

fn completion_kind(err: &TidesError) -> &CompletionErrorKind {
    match err.kind() {
        TidesErrorKind::Completion(e) => &e.kind,
        other => panic!("expected completion error, got {}", other),
    }
}

#[tokio::test]
async fn test_complete_returns_first_text() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let history = History::from(vec![Turn::user("hello"), Turn::narrator("LOCATION:\nShore")]);
    let payload = PromptAssembler::new().assemble(&history, "walk north");

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(serde_json::to_value(&payload)?))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("The tide turns.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"))?;
    let reply = client.complete(&payload).await?;

    assert_eq!(reply, "The tide turns.");
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_keeps_body() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"))?;
    let payload = PromptAssembler::new().assemble(&History::new(), "look");
    let err = client.complete(&payload).await.unwrap_err();

    assert_eq!(
        completion_kind(&err),
        &CompletionErrorKind::Http {
            status_code: 503,
            body: "model overloaded".to_string(),
        }
    );
    assert_eq!(err.class(), ErrorClass::UpstreamFailure);
    Ok(())
}

#[tokio::test]
async fn test_missing_reply_is_empty_reply() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"))?;
    let payload = PromptAssembler::new().assemble(&History::new(), "look");
    let err = client.complete(&payload).await.unwrap_err();

    assert_eq!(completion_kind(&err), &CompletionErrorKind::EmptyReply);
    Ok(())
}

#[tokio::test]
async fn test_blank_reply_text_is_empty_reply() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("")))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"))?;
    let payload = PromptAssembler::new().assemble(&History::new(), "look");
    let err = client.complete(&payload).await.unwrap_err();

    assert_eq!(completion_kind(&err), &CompletionErrorKind::EmptyReply);
    Ok(())
}

#[tokio::test]
async fn test_undecodable_body_is_malformed() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"))?;
    let payload = PromptAssembler::new().assemble(&History::new(), "look");
    let err = client.complete(&payload).await.unwrap_err();

    assert!(matches!(
        completion_kind(&err),
        CompletionErrorKind::MalformedResponse(_)
    ));
    Ok(())
}

#[tokio::test]
async fn test_missing_credential_makes_no_request() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("unreachable")))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, None)?;
    assert_eq!(
        client.check_ready().unwrap_err().class(),
        ErrorClass::MissingConfig
    );

    let payload = PromptAssembler::new().assemble(&History::new(), "look");
    let err = client.complete(&payload).await.unwrap_err();

    assert_eq!(err.class(), ErrorClass::MissingConfig);
    assert!(err.public_message().contains("GEMINI_API_KEY"));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() -> anyhow::Result<()> {
    let config = GeminiConfig::builder()
        .base_url("http://127.0.0.1:9")
        .api_key(ApiKey::new("secret-key"))
        .build()?;
    let client = GeminiClient::new(config)?;
    let payload = PromptAssembler::new().assemble(&History::new(), "look");

    let err = client.complete(&payload).await.unwrap_err();

    assert!(completion_kind(&err).is_transport());
    assert!(!err.to_string().contains("secret-key"));
    Ok(())
}

#[test]
fn test_debug_output_hides_credential() -> anyhow::Result<()> {
    let config = GeminiConfig::builder()
        .api_key(ApiKey::new("super-secret"))
        .build()?;
    let client = GeminiClient::new(config)?;

    assert!(!format!("{:?}", client).contains("super-secret"));
    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(), "gemini-2.0-flash");
    Ok(())
}
