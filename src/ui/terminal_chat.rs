use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use crate::enums::character::Character;
use crate::enums::reply_source::ReplySource;
use crate::enums::screen::Screen;
use crate::errors::KorokResult;
use crate::logger::animated_logger::AnimatedLogger;
use crate::structs::chat::message::Message;
use crate::ui::chat_controller::ChatController;

const DEFAULT_RULE_WIDTH: usize = 40;
const MAX_RULE_WIDTH: usize = 80;

#[derive(Debug, PartialEq)]
enum ChatInput {
    Back,
    Quit,
    Text(String),
}

impl ChatInput {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "/back" => ChatInput::Back,
            "/quit" | "/exit" => ChatInput::Quit,
            _ => ChatInput::Text(line.to_string()),
        }
    }
}

/// Line-oriented front end for [`ChatController`].
pub struct TerminalChat {
    controller: ChatController,
}

impl TerminalChat {
    pub fn new(controller: ChatController) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &ChatController {
        &self.controller
    }

    pub async fn run_stdio(&mut self, preselected: Option<Character>) -> KorokResult<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        self.run(stdin, &mut stdout, preselected).await
    }

    /// Drives the controller from `input` until it ends or the user quits.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W, preselected: Option<Character>) -> KorokResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        let width = rule_width();

        if let Some(character) = preselected {
            self.enter_chat(character, out, width).await?;
        }

        loop {
            match self.controller.screen() {
                Screen::Picking => {
                    write!(out, "{}", render_picker())?;
                    out.flush()?;

                    let Some(line) = lines.next_line().await? else { break };
                    if matches!(line.trim(), "q" | "/quit") {
                        break;
                    }
                    match Character::from_choice(&line) {
                        Some(character) => self.enter_chat(character, out, width).await?,
                        None => writeln!(out, "请输入 1、2 或 q")?,
                    }
                }
                Screen::Chatting(_) => {
                    write!(out, "> ")?;
                    out.flush()?;

                    let Some(line) = lines.next_line().await? else { break };
                    match ChatInput::parse(&line) {
                        ChatInput::Quit => break,
                        ChatInput::Back => self.controller.back().await,
                        ChatInput::Text(text) => self.submit(&text, out).await?,
                    }
                }
            }
        }

        writeln!(out, "呀哈哈，再见！")?;
        Ok(())
    }

    async fn enter_chat<W: Write>(&mut self, character: Character, out: &mut W, width: usize) -> KorokResult<()> {
        self.controller.select_character(character).await;
        writeln!(out, "{}", render_header(character, self.controller.honorific(), width))?;
        writeln!(out, "开始与 {} 对话吧！", character.display_name())?;
        Ok(())
    }

    async fn submit<W: Write>(&mut self, text: &str, out: &mut W) -> KorokResult<()> {
        self.controller.set_input(text);
        let Some(pending) = self.controller.begin_send() else {
            return Ok(());
        };
        self.print_last_message(out)?;

        let mut spinner = AnimatedLogger::new("呀哈哈正在思考");
        spinner.start();
        let source = self.controller.complete(pending).await;
        spinner.stop().await;

        if source == ReplySource::Fallback {
            log::debug!("Showing fallback reply");
        }
        self.print_last_message(out)
    }

    fn print_last_message<W: Write>(&self, out: &mut W) -> KorokResult<()> {
        if let (Some(selected), Some(message)) = (self.controller.screen().selected(), self.controller.messages().last()) {
            writeln!(out, "{}", render_message(message, selected, self.controller.honorific()))?;
        }
        Ok(())
    }
}

fn rule_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| usize::from(w).min(MAX_RULE_WIDTH))
        .unwrap_or(DEFAULT_RULE_WIDTH)
}

pub fn render_picker() -> String {
    let mut menu = String::from("\n选择你的呀哈哈:\n");
    for (i, character) in Character::ALL.iter().enumerate() {
        menu.push_str(&format!("  {}) {} {}\n", i + 1, character.avatar(), character.display_name()));
    }
    menu.push_str("  q) 退出\n> ");
    menu
}

pub fn render_header(character: Character, honorific: &str, width: usize) -> String {
    let rule = "━".repeat(width);
    format!(
        "{rule}\n{} {}  (你是: {})   /back 返回  /quit 退出\n{rule}",
        character.avatar(),
        character.display_name(),
        honorific,
    )
}

/// Outgoing lines are labelled with the user's honorific, incoming ones with
/// the selected character's name.
pub fn render_message(message: &Message, selected: Character, honorific: &str) -> String {
    let label = if message.character == selected {
        honorific
    } else {
        selected.display_name()
    };
    format!(
        "{} {} [{}]: {}",
        message.character.avatar(),
        label,
        message.timestamp.format("%H:%M"),
        message.content,
    )
}
