use crate::config::ZapConfig;
use crate::model::ScanRecord;
use crate::presenter::DisplayRecord;
use crate::result::{ResultView, ShareRequest};
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod scan;
pub mod share;
pub mod view;

#[derive(Debug, Clone)]
pub struct ZapPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    pub affected_records: Vec<ScanRecord>,
    pub listed_records: Vec<DisplayRecord>,
    pub view: Option<ResultView>,
    pub share: Option<ShareRequest>,
    pub config: Option<ZapConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<ScanRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_view(mut self, view: ResultView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_share(mut self, share: ShareRequest) -> Self {
        self.share = Some(share);
        self
    }

    pub fn with_config(mut self, config: ZapConfig) -> Self {
        self.config = Some(config);
        self
    }
}
