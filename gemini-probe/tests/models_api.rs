mod support;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gemini_probe::types::models::ListModelsConfig;
use gemini_probe::Error;

use support::{build_gemini_client, mount_model_catalog, text_response};

#[tokio::test]
async fn test_generate_content_gemini_api() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-3-pro-preview:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Hello, Gemini!"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Hi there!")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_gemini_client(&mock_server.uri());

    let response = client
        .generative_model("gemini-3-pro-preview")
        .generate_content("Hello, Gemini!")
        .await
        .unwrap();
    assert_eq!(response.text(), Some("Hi there!".to_string()));
}

#[tokio::test]
async fn test_generate_content_accepts_prefixed_model_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("ok")))
        .mount(&mock_server)
        .await;

    let client = build_gemini_client(&mock_server.uri());
    let response = client
        .models()
        .generate_text("models/gemini-2.5-flash", "ping")
        .await
        .unwrap();
    assert_eq!(response.text().as_deref(), Some("ok"));
}

#[tokio::test]
async fn test_generate_content_error_uses_envelope_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-3-pro-preview:generateContent"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "quota exceeded",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = build_gemini_client(&mock_server.uri());
    let err = client
        .models()
        .generate_text("gemini-3-pro-preview", "Hello, Gemini!")
        .await
        .unwrap_err();
    assert!(
        matches!(&err, Error::ApiError { status: 429, message } if message == "quota exceeded"),
        "{err:?}"
    );
}

#[tokio::test]
async fn test_list_models_with_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("pageSize", "5"))
        .and(query_param("pageToken", "token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_gemini_client(&mock_server.uri());

    let response = client
        .models()
        .list_with_config(ListModelsConfig {
            page_size: Some(5),
            page_token: Some("token-1".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(response.models.map(|m| m.len()), Some(0));
}

#[tokio::test]
async fn test_all_models_follows_pagination() {
    let mock_server = MockServer::start().await;
    mount_model_catalog(&mock_server).await;

    let client = build_gemini_client(&mock_server.uri());
    let models = client.models().all().await.unwrap();

    let names: Vec<_> = models
        .iter()
        .filter_map(|model| model.name.as_deref())
        .collect();
    assert_eq!(
        names,
        vec![
            "models/gemini-2.5-flash",
            "models/text-embedding-004",
            "models/gemini-3-pro-preview",
            "models/legacy-without-methods",
        ]
    );
    assert!(models[0].supports_generate_content());
    assert!(!models[3].supports_generate_content());
}

#[tokio::test]
async fn test_get_model() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models/gemini-2.5-flash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/gemini-2.5-flash",
            "displayName": "Gemini 2.5 Flash",
            "outputTokenLimit": 65536,
            "supportedGenerationMethods": ["generateContent"]
        })))
        .mount(&mock_server)
        .await;

    let client = build_gemini_client(&mock_server.uri());
    let model = client.models().get("gemini-2.5-flash").await.unwrap();
    assert_eq!(model.display_name.as_deref(), Some("Gemini 2.5 Flash"));
    assert_eq!(model.output_token_limit, Some(65536));
}

#[tokio::test]
async fn test_list_models_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&mock_server)
        .await;

    let client = build_gemini_client(&mock_server.uri());
    let err = client.models().all().await.unwrap_err();
    assert!(
        matches!(&err, Error::ApiError { status: 400, message } if message == "API key not valid"),
        "{err:?}"
    );
}
