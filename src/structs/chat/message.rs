use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::enums::character::Character;

/// A chat line held in controller memory. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub character: Character,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(character: Character, content: &str) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            character,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }
}
