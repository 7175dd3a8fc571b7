pub mod chat_reply;
pub mod chat_request;
pub mod chat_turn;
pub mod proxy_error_body;
