//! # Command Layer
//!
//! Pure functions over a loaded [`Dataset`](crate::dataset::Dataset) and a
//! [`ViewState`](crate::state::ViewState). Each returns a [`CmdResult`] carrying
//! data for the UI plus user-facing messages; nothing here prints or assumes a
//! terminal. `config` is the exception to purity: it reads and writes the
//! config file.

use crate::config::PropdexConfig;
use crate::model::Record;
use crate::schema::FieldSpec;

pub mod config;
pub mod fields;
pub mod list;
pub mod show;
pub mod values;

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

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub fields: Vec<FieldSpec>,
    pub values: Vec<String>,
    pub config: Option<PropdexConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    pub fn with_config(mut self, config: PropdexConfig) -> Self {
        self.config = Some(config);
        self
    }
}
