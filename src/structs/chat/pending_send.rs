use crate::enums::character::Character;

/// A send that has been shown locally and is awaiting the proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSend {
    pub text: String,
    pub reply_as: Character,
}
