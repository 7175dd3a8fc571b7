pub mod message;
pub mod pending_send;
