use serde::{Deserialize, Serialize};
use crate::structs::proxy::chat_turn::ChatTurn;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
}
