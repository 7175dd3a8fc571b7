use std::sync::Arc;
use std::time::Duration;
use crate::constants::phrases::{FALLBACK_REPLIES, HONORIFICS};
use crate::enums::character::Character;
use crate::enums::reply_source::ReplySource;
use crate::enums::screen::Screen;
use crate::errors::KorokResult;
use crate::helpers::random_picker::RandomPicker;
use crate::structs::chat::message::Message;
use crate::structs::chat::pending_send::PendingSend;
use crate::traits::completion_client::CompletionClient;

/// In-memory state behind the picker and chat views.
///
/// The message list only grows while a character is selected and is cleared
/// on the next selection. A send cannot be cancelled once `begin_send` accepts it.
pub struct ChatController {
    screen: Screen,
    messages: Vec<Message>,
    input: String,
    is_loading: bool,
    honorific: String,
    transition: Duration,
    client: Arc<dyn CompletionClient>,
}

impl ChatController {
    pub fn new(client: Arc<dyn CompletionClient>, transition: Duration) -> Self {
        Self {
            screen: Screen::Picking,
            messages: Vec::new(),
            input: String::new(),
            is_loading: false,
            honorific: String::new(),
            transition,
            client,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Title the user is addressed by in the current chat.
    pub fn honorific(&self) -> &str {
        &self.honorific
    }

    pub async fn select_character(&mut self, character: Character) {
        self.honorific = RandomPicker::pick(&HONORIFICS).to_string();
        tokio::time::sleep(self.transition).await;

        self.screen = Screen::Chatting(character);
        self.messages.clear();
        log::debug!("Selected {} as {}", character, self.honorific);
    }

    pub async fn back(&mut self) {
        tokio::time::sleep(self.transition).await;
        self.screen = Screen::Picking;
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn can_send(&self) -> bool {
        matches!(self.screen, Screen::Chatting(_)) && !self.is_loading && !self.input.trim().is_empty()
    }

    /// Shows the user's message right away and marks a send in flight.
    ///
    /// Returns `None`, changing nothing, when there is nothing to send or a send is
    /// already in flight.
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        if !self.can_send() {
            return None;
        }
        let character = self.screen.selected()?;

        let text = self.input.trim().to_string();
        self.messages.push(Message::new(character, &text));
        self.input.clear();
        self.is_loading = true;

        Some(PendingSend {
            text,
            reply_as: character.other(),
        })
    }

    /// Appends the reply for `pending`. Errors are replaced by a canned line.
    pub fn finish_send(&mut self, pending: PendingSend, result: KorokResult<String>) -> ReplySource {
        let (content, source) = match result {
            Ok(content) => (content, ReplySource::Model),
            Err(error) => {
                log::debug!("Chat request failed, using a fallback reply: {}", error);
                (RandomPicker::pick(&FALLBACK_REPLIES).to_string(), ReplySource::Fallback)
            }
        };

        self.messages.push(Message::new(pending.reply_as, &content));
        self.is_loading = false;
        source
    }

    /// Asks the client for a reply to `pending` and appends whatever comes back.
    pub async fn complete(&mut self, pending: PendingSend) -> ReplySource {
        let result = self.client.complete(pending.text.clone()).await;
        self.finish_send(pending, result)
    }

    /// Keyboard and button submission both land here.
    pub async fn send(&mut self) -> Option<ReplySource> {
        let pending = self.begin_send()?;
        Some(self.complete(pending).await)
    }
}
