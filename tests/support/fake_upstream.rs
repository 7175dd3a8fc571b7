use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use serde_json::{json, Value};
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::Filter;
use korok_chat::services::ai_providers::moonshot::MoonshotProvider;
use korok_chat::services::completion_proxy::CompletionProxy;
use korok_chat::structs::config::ai_config::AiConfig;

/// How the fake chat-completion endpoint answers.
#[derive(Clone, Copy, Debug)]
pub enum UpstreamMode {
    /// 200 with `{choices:[{message:{content}}]}` echoing the user text.
    Echo,
    /// 200 with the fixed greeting.
    Greeting,
    Status(u16),
    /// 200 with a JSON body that has no choices.
    Malformed,
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

pub struct FakeUpstream {
    pub addr: SocketAddr,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FakeUpstream {
    pub async fn start(mode: UpstreamMode) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&requests);

        let route = warp::path!("v1" / "chat" / "completions")
            .and(warp::post())
            .and(warp::header::optional::<String>("authorization"))
            .and(warp::body::json())
            .map(move |authorization: Option<String>, body: Value| {
                recorder.lock().unwrap().push(RecordedRequest { authorization, body: body.clone() });
                respond(mode, &body)
            });

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (addr, server) = warp::serve(route)
            .bind_with_graceful_shutdown(([127, 0, 0, 1], 0), async {
                shutdown_rx.await.ok();
            });
        tokio::spawn(server);

        Self { addr, requests, shutdown_tx: Some(shutdown_tx) }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn proxy(&self) -> CompletionProxy {
        proxy_for(&self.base_url())
    }
}

impl Drop for FakeUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub fn proxy_for(base_url: &str) -> CompletionProxy {
    let config = AiConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
        ..AiConfig::default()
    };
    let provider = MoonshotProvider::new("sk-test-key".to_string(), &config).unwrap();
    CompletionProxy::new(Arc::new(provider), None)
}

fn respond(mode: UpstreamMode, body: &Value) -> warp::reply::WithStatus<warp::reply::Json> {
    let completion = |content: &str| json!({
        "id": "cmpl-test",
        "object": "chat.completion",
        "model": "moonshot-v1-8k",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }]
    });

    match mode {
        UpstreamMode::Echo => {
            let user_text = body["messages"][1]["content"].as_str().unwrap_or_default();
            warp::reply::with_status(warp::reply::json(&completion(&format!("呀哈哈！{}", user_text))), StatusCode::OK)
        }
        UpstreamMode::Greeting => {
            warp::reply::with_status(warp::reply::json(&completion("呀哈哈！你好")), StatusCode::OK)
        }
        UpstreamMode::Status(code) => warp::reply::with_status(
            warp::reply::json(&json!({ "error": { "message": "upstream exploded", "type": "server_error" } })),
            StatusCode::from_u16(code).unwrap(),
        ),
        UpstreamMode::Malformed => {
            warp::reply::with_status(warp::reply::json(&json!({ "object": "chat.completion" })), StatusCode::OK)
        }
    }
}

/// An address nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1", addr)
}
