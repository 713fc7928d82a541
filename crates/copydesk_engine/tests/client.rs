use copydesk_core::{ErrorKind, GenerationRequest, Platform};
use copydesk_engine::{
    ClientSettings, FailureCause, GenerationClient, ReqwestGenerationClient,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestGenerationClient {
    ReqwestGenerationClient::new(ClientSettings {
        base_url: server.uri(),
    })
}

#[tokio::test]
async fn tags_request_posts_keywords_and_returns_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_tags"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"keywords": ["shoes", "trail"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": "1. Run\n2. Hike"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = GenerationRequest::Tags {
        keywords: vec!["shoes".to_string(), "trail".to_string()],
    };
    let text = client_for(&server)
        .generate(&request)
        .await
        .expect("generate ok");

    assert_eq!(text, "1. Run\n2. Hike");
}

#[tokio::test]
async fn description_and_marketing_use_their_own_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_description"))
        .and(body_json(
            json!({"name": "Flask", "category": "Outdoor", "details": ""}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"description": "Sturdy."})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/generate_marketing_content"))
        .and(body_json(json!({"audience": "Gamers", "platform": "TikTok"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"marketing_content": "Level up!"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let description = client
        .generate(&GenerationRequest::Description {
            name: "Flask".to_string(),
            category: "Outdoor".to_string(),
            details: None,
        })
        .await
        .expect("description ok");
    let marketing = client
        .generate(&GenerationRequest::Marketing {
            audience: "Gamers".to_string(),
            platform: Platform::TikTok,
        })
        .await
        .expect("marketing ok");

    assert_eq!(description, "Sturdy.");
    assert_eq!(marketing, "Level up!");
}

#[tokio::test]
async fn non_success_status_is_request_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_tags"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&GenerationRequest::Tags {
            keywords: vec!["shoes".to_string()],
        })
        .await
        .unwrap_err();

    assert_eq!(err.cause, FailureCause::HttpStatus(500));
    assert_eq!(err.kind(), ErrorKind::RequestFailed);
}

#[tokio::test]
async fn malformed_body_is_request_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"description": "wrong"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&GenerationRequest::Tags {
            keywords: vec!["shoes".to_string()],
        })
        .await
        .unwrap_err();

    assert_eq!(err.cause, FailureCause::MalformedBody);
    assert_eq!(err.kind(), ErrorKind::RequestFailed);
}

#[tokio::test]
async fn unreachable_service_is_request_failure() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = ReqwestGenerationClient::new(ClientSettings { base_url: uri });
    let err = client
        .generate(&GenerationRequest::Tags {
            keywords: vec!["shoes".to_string()],
        })
        .await
        .unwrap_err();

    assert_eq!(err.cause, FailureCause::Network);
    assert_eq!(err.kind(), ErrorKind::RequestFailed);
}

#[tokio::test]
async fn invalid_base_url_fails_without_sending() {
    let client = ReqwestGenerationClient::new(ClientSettings {
        base_url: "not a url".to_string(),
    });
    let err = client.health().await.unwrap_err();
    assert_eq!(err.cause, FailureCause::InvalidUrl);
}

#[tokio::test]
async fn base_url_path_prefix_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate_tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestGenerationClient::new(ClientSettings {
        base_url: format!("{}/api", server.uri()),
    });
    let text = client
        .generate(&GenerationRequest::Tags {
            keywords: vec!["shoes".to_string()],
        })
        .await
        .expect("generate ok");
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn health_reads_status_from_root() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "AI Agent is running"})),
        )
        .mount(&server)
        .await;

    let status = client_for(&server).health().await.expect("health ok");
    assert_eq!(status, "AI Agent is running");
}
