use crate::structs::proxy::chat_reply::ChatReply;
use crate::structs::proxy::proxy_error_body::ProxyErrorBody;

/// Result of handling one proxy request, mapped one-to-one onto an HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyOutcome {
    Reply(ChatReply),
    Rejected(ProxyErrorBody),
    Failed(ProxyErrorBody),
}

impl ProxyOutcome {
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyOutcome::Reply(_) => 200,
            ProxyOutcome::Rejected(_) => 400,
            ProxyOutcome::Failed(_) => 500,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let body = match self {
            ProxyOutcome::Reply(reply) => serde_json::to_value(reply),
            ProxyOutcome::Rejected(error) | ProxyOutcome::Failed(error) => serde_json::to_value(error),
        };
        body.unwrap_or(serde_json::Value::Null)
    }
}
