use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the two Koroks the user can play as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    Green,
    Yellow,
}

impl Character {
    pub const ALL: [Character; 2] = [Character::Green, Character::Yellow];

    /// The conversational counterpart of this character.
    pub fn other(self) -> Self {
        match self {
            Character::Green => Character::Yellow,
            Character::Yellow => Character::Green,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Character::Green => "绿色呀哈哈",
            Character::Yellow => "黄色呀哈哈",
        }
    }

    pub fn avatar(self) -> &'static str {
        match self {
            Character::Green => "🌿",
            Character::Yellow => "⭐",
        }
    }

    /// Parses picker input: a 1-based menu index or the character's id.
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "green" => Some(Character::Green),
            "2" | "yellow" => Some(Character::Yellow),
            _ => None,
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Character::Green => write!(f, "green"),
            Character::Yellow => write!(f, "yellow"),
        }
    }
}
