//! Telegram upload notifications.

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::debug;

use crate::core::constants::TELEGRAM_API;
use crate::error::NotifyError;

/// Characters Telegram's MarkdownV2 mode requires escaping.
const MARKDOWN_V2_SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Details of an upload, already formatted for display.
#[derive(Debug, Clone)]
pub struct UploadNotice {
    pub file_name: String,
    pub folder_name: String,
    pub size: String,
    pub mime_type: String,
    pub created: String,
    pub view_link: String,
    pub direct_link: String,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: String,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
    reply_markup: InlineKeyboardMarkup<'a>,
}

#[derive(Debug, Serialize)]
struct InlineKeyboardMarkup<'a> {
    inline_keyboard: Vec<Vec<InlineKeyboardButton<'a>>>,
}

#[derive(Debug, Serialize)]
struct InlineKeyboardButton<'a> {
    text: &'static str,
    url: &'a str,
}

/// Backslash-escape MarkdownV2 special characters.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_V2_SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl UploadNotice {
    /// Message body in MarkdownV2.
    pub fn message_text(&self) -> String {
        format!(
            "*File Uploaded* ✅\n\n\
             *File Name*: `{}`\n\
             *Folder*: `{}`\n\
             *Size*: `{}`\n\
             *Type*: `{}`\n\
             *Created*: `{}`",
            escape_markdown_v2(&self.file_name),
            escape_markdown_v2(&self.folder_name),
            escape_markdown_v2(&self.size),
            escape_markdown_v2(&self.mime_type),
            escape_markdown_v2(&self.created),
        )
    }

    fn payload<'a>(&'a self, chat_id: &'a str) -> SendMessage<'a> {
        SendMessage {
            chat_id,
            text: self.message_text(),
            parse_mode: "MarkdownV2",
            disable_web_page_preview: false,
            reply_markup: InlineKeyboardMarkup {
                inline_keyboard: vec![vec![
                    InlineKeyboardButton {
                        text: "☁️ GDrive Link",
                        url: &self.view_link,
                    },
                    InlineKeyboardButton {
                        text: "🔗 Direct Link",
                        url: &self.direct_link,
                    },
                ]],
            },
        }
    }
}

/// Telegram bot client bound to one chat.
pub struct Notifier<'a> {
    client: Client,
    bot_token: &'a str,
    chat_id: &'a str,
}

impl<'a> Notifier<'a> {
    /// Returns `None` when either the token or the chat ID is empty.
    pub fn new(client: Client, bot_token: &'a str, chat_id: &'a str) -> Option<Self> {
        if bot_token.is_empty() || chat_id.is_empty() {
            return None;
        }
        Some(Self {
            client,
            bot_token,
            chat_id,
        })
    }

    /// Post the upload notice to the chat.
    pub fn send(&self, notice: &UploadNotice) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API, self.bot_token);
        debug!(chat_id = self.chat_id, file = %notice.file_name, "sending notification");

        let response = self
            .client
            .post(url)
            .json(&notice.payload(self.chat_id))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NotifyError::Api { status, body });
        }

        Ok(())
    }
}
