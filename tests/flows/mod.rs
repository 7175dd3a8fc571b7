mod chat;
mod proxy;
