use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use korok_chat::constants::phrases::FALLBACK_REPLIES;
use korok_chat::enums::character::Character;
use korok_chat::enums::reply_source::ReplySource;
use korok_chat::services::proxy_client::ProxyClient;
use korok_chat::traits::completion_client::CompletionClient;
use korok_chat::ui::chat_controller::ChatController;
use korok_chat::ui::proxy_server::ProxyServer;
use crate::support::fake_upstream::{FakeUpstream, UpstreamMode};

async fn serve(upstream: &FakeUpstream) -> (ProxyServer, SocketAddr) {
    let mut server = ProxyServer::new(upstream.proxy());
    let addr = server.start(([127, 0, 0, 1], 0).into()).await.unwrap();
    (server, addr)
}

#[tokio::test]
async fn proxy_client_round_trip() {
    let upstream = FakeUpstream::start(UpstreamMode::Greeting).await;
    let (mut server, addr) = serve(&upstream).await;

    let client = ProxyClient::new(&format!("http://{}", addr));
    let reply = client.complete("你好".to_string()).await.unwrap();
    assert_eq!(reply, "呀哈哈！你好");

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn controller_appends_model_reply_from_counterpart() {
    let upstream = FakeUpstream::start(UpstreamMode::Echo).await;
    let (mut server, addr) = serve(&upstream).await;

    let client = ProxyClient::new(&format!("http://{}", addr));
    let mut controller = ChatController::new(Arc::new(client), Duration::ZERO);

    controller.select_character(Character::Green).await;
    controller.set_input("今天去哪里玩");
    assert_eq!(controller.send().await, Some(ReplySource::Model));

    let messages = controller.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].character, Character::Green);
    assert_eq!(messages[1].character, Character::Yellow);
    assert_eq!(messages[1].content, "呀哈哈！今天去哪里玩");

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn controller_masks_upstream_failure_with_fallback() {
    let upstream = FakeUpstream::start(UpstreamMode::Status(503)).await;
    let (mut server, addr) = serve(&upstream).await;

    let client = ProxyClient::new(&format!("http://{}", addr));
    let error = client.complete("hi".to_string()).await.unwrap_err();
    assert!(error.user_message().contains("upstream exploded"));

    let mut controller = ChatController::new(Arc::new(client), Duration::ZERO);
    controller.select_character(Character::Yellow).await;
    controller.set_input("hi");
    assert_eq!(controller.send().await, Some(ReplySource::Fallback));

    let messages = controller.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].character, Character::Green);
    assert!(FALLBACK_REPLIES.contains(&messages[1].content.as_str()));
    assert!(!controller.is_loading());

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn unreachable_proxy_falls_back() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut controller = ChatController::new(Arc::new(ProxyClient::new(&format!("http://{}", addr))), Duration::ZERO);
    controller.select_character(Character::Green).await;
    controller.set_input("anyone there?");

    assert_eq!(controller.send().await, Some(ReplySource::Fallback));
    assert_eq!(controller.messages().len(), 2);
}
