use serde::{Deserialize, Serialize};
use crate::structs::ai::moonshot::moonshot_message::MoonshotMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonshotRequest {
    pub model: String,

    pub messages: Vec<MoonshotMessage>,

    pub temperature: f32,

    pub max_tokens: u32,

    pub stream: bool,
}
