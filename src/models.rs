//! Mail data holders for the Graph client.
//!
//! Field names follow the wire format (camelCase) so these records
//! deserialize API responses directly. All fields are optional on the wire;
//! missing ones fall back to their zero values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An email message with its metadata and content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailMessage {
    pub id: String,
    pub subject: String,
    pub body: String,
    pub body_preview: String,
    pub received_date_time: Option<DateTime<Utc>>,
    pub from_address: String,
    pub to_addresses: Vec<String>,
    pub has_attachments: bool,
    pub attachments: Vec<EmailAttachment>,
}

/// An attachment with its metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailAttachment {
    pub id: String,
    pub name: String,
    pub content_type: String,
    pub size: u64,
    pub is_inline: bool,
}

/// A mail folder with its item counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MailFolder {
    pub id: String,
    pub display_name: String,
    pub total_item_count: u32,
    pub unread_item_count: u32,
}
