use serde::{Deserialize, Serialize};
use crate::structs::ai::moonshot::moonshot_choice::MoonshotChoice;

/// Only `choices` is read; other upstream fields are ignored whatever their type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonshotResponse {
    #[serde(default)]
    pub choices: Option<Vec<MoonshotChoice>>,
}

impl MoonshotResponse {
    /// Text of the first choice, if the upstream produced one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .as_deref()?
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
    }
}
