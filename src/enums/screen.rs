use crate::enums::character::Character;

/// Which view the chat controller is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Picking,
    Chatting(Character),
}

impl Screen {
    pub fn selected(&self) -> Option<Character> {
        match self {
            Screen::Picking => None,
            Screen::Chatting(character) => Some(*character),
        }
    }
}
