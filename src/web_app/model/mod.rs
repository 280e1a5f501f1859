// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used on both sides of the record_items server function
// and mirror the JSON contract of the record service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod display;
pub mod entry;

pub use display::*;
pub use entry::*;

/// A parsed fridge entry as returned by the record service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub item: String,
    pub quantity: f64,
    pub unit: String,
    pub expire_date: String,
}

/// Body of `POST /record`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRequest {
    pub description: String,
    /// Client wall-clock time, `YYYY-MM-DD HH:MM:SS`. The service falls back
    /// to its own clock when this is absent.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub current_time: String,
}

/// Successful reply from `POST /record`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordResponse {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

/// Failures of a single submission
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RecordError {
    #[error("请输入物品描述")]
    EmptyDescription,
    #[error("服务器返回错误: {0}")]
    Status(u16),
    #[error("{0}")]
    Request(String),
    #[error("无法解析服务器响应: {0}")]
    Decode(String),
}
