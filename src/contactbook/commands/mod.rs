use crate::config::BookConfig;
use crate::error::RecordError;
use crate::fields::Phone;
use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod phone;
pub mod search;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

impl From<RecordError> for CmdMessage {
    fn from(err: RecordError) -> Self {
        CmdMessage::warning(err.to_string())
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    /// Pre-rendered blocks of text, one per page
    pub pages: Vec<String>,
    pub phone: Option<Phone>,
    pub days_to_birthday: Option<i64>,
    pub config: Option<BookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_warnings(&mut self, diagnostics: impl IntoIterator<Item = RecordError>) {
        self.messages
            .extend(diagnostics.into_iter().map(CmdMessage::from));
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_config(mut self, config: BookConfig) -> Self {
        self.config = Some(config);
        self
    }
}
