pub mod chat_controller;
pub mod proxy_server;
pub mod terminal_chat;
