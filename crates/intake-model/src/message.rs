//! Messages exchanged between students and the administration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    #[default]
    General,
    /// Generated by the system as a side effect of another action.
    System,
    Document,
    Appointment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    /// Control number of the sending party, or `admin`.
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub category: MessageCategory,
    #[serde(default)]
    pub read: bool,
    #[serde(alias = "sentAt")]
    pub sent_at: DateTime<Utc>,
    /// Identifier of the record this message refers to, if any.
    #[serde(default, alias = "relatedId")]
    pub related_id: Option<String>,
    /// Identifier of the message this one replies to.
    #[serde(default, alias = "replyTo")]
    pub reply_to: Option<String>,
}
