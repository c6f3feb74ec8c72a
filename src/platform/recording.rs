//! Recording chat platform for tests.
//!
//! Captures every call made through `ChatPlatform` and can be told to fail
//! individual operations, so tests can assert both what was sent to Discord and
//! how failures are handled.

use serenity::async_trait;
use std::sync::Mutex;

use crate::{
    error::platform::PlatformError,
    model::{channel::CreateGameChannelParam, guild::ChannelSnapshot},
    platform::ChatPlatform,
};

/// ID assigned to the first channel created through the recording platform.
pub const FIRST_CREATED_CHANNEL_ID: u64 = 900_000_000_000_000_001;

#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    CreateTextChannel {
        guild_id: u64,
        param: CreateGameChannelParam,
    },
    RenameChannel {
        channel_id: u64,
        name: String,
        reason: String,
    },
    DeleteChannel {
        channel_id: u64,
        reason: String,
    },
    SendMessage {
        channel_id: u64,
        content: String,
    },
}

#[derive(Default)]
pub struct RecordingPlatform {
    calls: Mutex<Vec<PlatformCall>>,
    fail_create: Option<PlatformError>,
    fail_rename: Option<PlatformError>,
    fail_delete: Option<PlatformError>,
    fail_send: Option<PlatformError>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_create(mut self, err: PlatformError) -> Self {
        self.fail_create = Some(err);
        self
    }

    pub fn failing_rename(mut self, err: PlatformError) -> Self {
        self.fail_rename = Some(err);
        self
    }

    pub fn failing_delete(mut self, err: PlatformError) -> Self {
        self.fail_delete = Some(err);
        self
    }

    pub fn failing_send(mut self, err: PlatformError) -> Self {
        self.fail_send = Some(err);
        self
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Contents of every message sent so far, in order.
    pub fn sent_messages(&self) -> Vec<(u64, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::SendMessage {
                    channel_id,
                    content,
                } => Some((channel_id, content)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: PlatformCall) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        calls.len()
    }

    fn outcome(failure: &Option<PlatformError>) -> Result<(), PlatformError> {
        match failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Forbidden error as Discord reports it for a missing permission.
pub fn forbidden() -> PlatformError {
    PlatformError::Forbidden {
        status: 403,
        code: 50013,
        text: "Missing Permissions".to_string(),
    }
}

#[async_trait]
impl ChatPlatform for RecordingPlatform {
    async fn create_text_channel(
        &self,
        guild_id: u64,
        param: &CreateGameChannelParam,
    ) -> Result<ChannelSnapshot, PlatformError> {
        let created = self.record(PlatformCall::CreateTextChannel {
            guild_id,
            param: param.clone(),
        });
        Self::outcome(&self.fail_create)?;

        Ok(ChannelSnapshot {
            channel_id: FIRST_CREATED_CHANNEL_ID + created as u64 - 1,
            name: param.name.clone(),
            parent_id: Some(param.category_id),
        })
    }

    async fn rename_channel(
        &self,
        channel_id: u64,
        name: &str,
        reason: &str,
    ) -> Result<(), PlatformError> {
        self.record(PlatformCall::RenameChannel {
            channel_id,
            name: name.to_string(),
            reason: reason.to_string(),
        });
        Self::outcome(&self.fail_rename)
    }

    async fn delete_channel(&self, channel_id: u64, reason: &str) -> Result<(), PlatformError> {
        self.record(PlatformCall::DeleteChannel {
            channel_id,
            reason: reason.to_string(),
        });
        Self::outcome(&self.fail_delete)
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), PlatformError> {
        self.record(PlatformCall::SendMessage {
            channel_id,
            content: content.to_string(),
        });
        Self::outcome(&self.fail_send)
    }
}
