use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::{Filter, Rejection};
use crate::config::constants::{MAX_REQUEST_BODY_BYTES, SERVER_SHUTDOWN_GRACE_PERIOD_MS, sleep_duration_millis};
use crate::constants::phrases::{PROXY_BODY_TOO_LARGE, PROXY_LENGTH_REQUIRED, PROXY_METHOD_NOT_ALLOWED, PROXY_NOT_FOUND};
use crate::errors::{KorokError, KorokResult};
use crate::services::completion_proxy::CompletionProxy;
use crate::structs::proxy::proxy_error_body::ProxyErrorBody;

pub struct ProxyServer {
    proxy: Arc<CompletionProxy>,
    addr: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ProxyServer {
    pub fn new(proxy: CompletionProxy) -> Self {
        Self {
            proxy: Arc::new(proxy),
            addr: None,
            shutdown_tx: None,
        }
    }

    /// Binds `addr` and serves in the background. Port 0 picks a free port.
    pub async fn start(&mut self, addr: SocketAddr) -> KorokResult<SocketAddr> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let routes = chat_routes(Arc::clone(&self.proxy));
        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| KorokError::system_error("bind", &format!("{}: {}", addr, e)))?;

        tokio::spawn(server);

        self.addr = Some(bound);
        self.shutdown_tx = Some(shutdown_tx);
        log::info!("🌐 Completion proxy listening on http://{}", bound);
        Ok(bound)
    }

    pub async fn shutdown(&mut self) -> KorokResult<()> {
        match self.addr {
            Some(addr) => log::info!("🛑 Shutting down completion proxy on {}...", addr),
            None => log::info!("🛑 Shutting down completion proxy..."),
        }

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                KorokError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        self.addr = None;
        log::info!("✅ Completion proxy shutdown complete");

        Ok(())
    }
}

/// `POST /api/chat`, the only route the proxy exposes. Every response body is JSON.
pub fn chat_routes(
    proxy: Arc<CompletionProxy>,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let proxy_filter = warp::any().map(move || Arc::clone(&proxy));

    warp::path!("api" / "chat")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_REQUEST_BODY_BYTES))
        .and(warp::body::bytes())
        .and(proxy_filter)
        .and_then(chat_handler)
        .with(warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["POST"]))
        .recover(handle_rejection)
        .with(warp::log("korok_chat::proxy"))
}

async fn chat_handler(body: Bytes, proxy: Arc<CompletionProxy>) -> Result<impl warp::Reply, Infallible> {
    let outcome = proxy.handle(&body).await;
    let status = StatusCode::from_u16(outcome.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    Ok(warp::reply::with_status(warp::reply::json(&outcome.to_json()), status))
}

async fn handle_rejection(rejection: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, body) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, ProxyErrorBody::client(PROXY_NOT_FOUND))
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, ProxyErrorBody::client(PROXY_METHOD_NOT_ALLOWED))
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, ProxyErrorBody::client(PROXY_BODY_TOO_LARGE))
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, ProxyErrorBody::client(PROXY_LENGTH_REQUIRED))
    } else {
        log::error!("❌ Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, ProxyErrorBody::unknown())
    };

    log::warn!("⚠️ Refused request with {}: {}", status, body.error);
    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}
