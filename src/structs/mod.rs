pub mod ai;
pub mod chat;
pub mod cli;
pub mod config;
pub mod proxy;
