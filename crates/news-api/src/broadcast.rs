//! Broadcast Modal State
//!
//! Platform choice and the sending/sent/failed cycle of one open modal.

use crate::models::{BroadcastRequest, BroadcastResponse, Platform};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BroadcastStatus {
    #[default]
    Idle,
    Sending,
    /// Server confirmation message
    Sent(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BroadcastDraft {
    pub platform: Platform,
    pub custom_message: String,
    pub status: BroadcastStatus,
}

impl BroadcastDraft {
    /// Ignored while a send is in flight
    pub fn select_platform(&mut self, platform: Platform) {
        if self.status != BroadcastStatus::Sending {
            self.platform = platform;
        }
    }

    pub fn can_submit(&self) -> bool {
        !matches!(self.status, BroadcastStatus::Sending | BroadcastStatus::Sent(_))
    }

    /// Move to sending and build the request, or `None` if a submit is not allowed
    pub fn begin_submit(&mut self, news_item_id: i64) -> Option<BroadcastRequest> {
        if !self.can_submit() {
            return None;
        }
        self.status = BroadcastStatus::Sending;
        let message = self.custom_message.trim();
        Some(BroadcastRequest {
            news_item_id,
            platform: self.platform,
            custom_message: (!message.is_empty()).then(|| message.to_string()),
        })
    }

    pub fn finish(&mut self, outcome: Result<BroadcastResponse, String>) {
        self.status = match outcome {
            Ok(response) if response.message.is_empty() => {
                BroadcastStatus::Sent("Sent Successfully!".to_string())
            }
            Ok(response) => BroadcastStatus::Sent(response.message),
            Err(reason) => BroadcastStatus::Failed(reason),
        };
    }

    pub fn is_sent(&self) -> bool {
        matches!(self.status, BroadcastStatus::Sent(_))
    }

    /// Text of the submit button
    pub fn button_label(&self) -> &str {
        match &self.status {
            BroadcastStatus::Idle => "Broadcast Now",
            BroadcastStatus::Sending => "Sending...",
            BroadcastStatus::Sent(_) => "Sent Successfully!",
            BroadcastStatus::Failed(_) => "Failed. Retry?",
        }
    }

    /// Back to a fresh draft once the modal closes
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
