use std::sync::Arc;
use serde_json::{json, Value};
use korok_chat::prompts::korok_persona_prompt::KOROK_PERSONA_PROMPT;
use korok_chat::ui::proxy_server::chat_routes;
use crate::support::fake_upstream::{closed_port_url, proxy_for, FakeUpstream, UpstreamMode};

async fn post_chat(proxy: korok_chat::services::completion_proxy::CompletionProxy, body: &Value) -> (u16, Value) {
    let routes = chat_routes(Arc::new(proxy));
    let response = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .header("content-type", "application/json")
        .body(body.to_string())
        .reply(&routes)
        .await;

    let json = serde_json::from_slice(response.body()).unwrap();
    (response.status().as_u16(), json)
}

fn user_says(text: &str) -> Value {
    json!({ "messages": [{ "role": "user", "content": text }] })
}

#[tokio::test]
async fn relays_upstream_greeting() {
    let upstream = FakeUpstream::start(UpstreamMode::Greeting).await;

    let (status, body) = post_chat(upstream.proxy(), &user_says("你好")).await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "content": "呀哈哈！你好" }));
}

#[tokio::test]
async fn upstream_receives_persona_latest_message_and_fixed_sampling() {
    let upstream = FakeUpstream::start(UpstreamMode::Echo).await;
    let request = json!({
        "messages": [
            { "role": "user", "content": "第一句" },
            { "role": "assistant", "content": "呀哈哈" },
            { "role": "user", "content": "第二句" }
        ]
    });

    let (status, body) = post_chat(upstream.proxy(), &request).await;
    assert_eq!(status, 200);
    assert_eq!(body["content"], "呀哈哈！第二句");

    let recorded = upstream.recorded();
    assert_eq!(recorded.len(), 1);
    let sent = &recorded[0];
    assert_eq!(sent.authorization.as_deref(), Some("Bearer sk-test-key"));
    assert_eq!(sent.body["model"], "moonshot-v1-8k");
    assert_eq!(sent.body["stream"], false);
    assert_eq!(sent.body["max_tokens"], 150);
    assert_eq!(sent.body["messages"].as_array().unwrap().len(), 2);
    assert_eq!(sent.body["messages"][0], json!({ "role": "system", "content": KOROK_PERSONA_PROMPT }));
    assert_eq!(sent.body["messages"][1], json!({ "role": "user", "content": "第二句" }));
}

#[tokio::test]
async fn upstream_500_yields_500_with_details() {
    let upstream = FakeUpstream::start(UpstreamMode::Status(500)).await;

    let (status, body) = post_chat(upstream.proxy(), &user_says("hi")).await;

    assert_eq!(status, 500);
    assert_eq!(body["error"], "API 请求失败");
    assert_eq!(body["type"], "ApiError");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("500"));
    assert!(details.contains("upstream exploded"));
}

#[tokio::test]
async fn upstream_401_is_an_authentication_error() {
    let upstream = FakeUpstream::start(UpstreamMode::Status(401)).await;

    let (status, body) = post_chat(upstream.proxy(), &user_says("hi")).await;

    assert_eq!(status, 500);
    assert_eq!(body["type"], "AuthenticationError");
}

#[tokio::test]
async fn response_without_choices_is_invalid() {
    let upstream = FakeUpstream::start(UpstreamMode::Malformed).await;

    let (status, body) = post_chat(upstream.proxy(), &user_says("hi")).await;

    assert_eq!(status, 500);
    assert_eq!(body["type"], "InvalidResponse");
    assert_eq!(body["details"], "API 响应格式不正确");
}

#[tokio::test]
async fn unreachable_upstream_is_a_network_error() {
    let (status, body) = post_chat(proxy_for(&closed_port_url()), &user_says("hi")).await;

    assert_eq!(status, 500);
    assert_eq!(body["type"], "NetworkError");
    assert!(!body["details"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn client_errors_never_reach_upstream() {
    let upstream = FakeUpstream::start(UpstreamMode::Greeting).await;

    let (missing, missing_body) = post_chat(upstream.proxy(), &json!({ "text": "hi" })).await;
    let (wrong_role, wrong_role_body) = post_chat(
        upstream.proxy(),
        &json!({ "messages": [{ "role": "assistant", "content": "hi" }] }),
    ).await;

    assert_eq!(missing, 400);
    assert_eq!(missing_body, json!({ "error": "无效的消息格式" }));
    assert_eq!(wrong_role, 400);
    assert_eq!(wrong_role_body, json!({ "error": "最后一条消息必须是用户消息" }));
    assert!(upstream.recorded().is_empty());
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let upstream = FakeUpstream::start(UpstreamMode::Echo).await;
    let routes = chat_routes(Arc::new(upstream.proxy()));

    let requests = (0..8).map(|i| {
        let routes = routes.clone();
        async move {
            let response = warp::test::request()
                .method("POST")
                .path("/api/chat")
                .body(user_says(&format!("消息{}", i)).to_string())
                .reply(&routes)
                .await;
            let body: Value = serde_json::from_slice(response.body()).unwrap();
            (i, body)
        }
    });

    for (i, body) in futures::future::join_all(requests).await {
        assert_eq!(body["content"], format!("呀哈哈！消息{}", i));
    }
    assert_eq!(upstream.recorded().len(), 8);
}
