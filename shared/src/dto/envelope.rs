//! # Response Envelope
//!
//! Every endpoint wraps its body in the same `{success, message, data}` shape.
//! List endpoints put either a bare array or a paginated object in `data`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform response wrapper.
///
/// `success == true` with `data == None` is only valid for endpoints that do not
/// return a payload (delete, logout, change password).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl Envelope<Value> {
    /// Decode the untyped payload into `T`.
    ///
    /// Returns `Ok(None)` when the server sent no payload (missing or `null`).
    pub fn decode_data<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        match &self.data {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value).map(Some),
        }
    }
}

/// Paginated list body: `{items, total, page, totalPages}`.
///
/// Older endpoints name the item array after the resource, so `transactions`
/// and `articles` are accepted as aliases of `items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    #[serde(alias = "transactions", alias = "articles")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u32,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "first_page")]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

/// Any list payload the backend may send.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Paged(PagedList<T>),
    Plain(Vec<T>),
}

impl<T> ListPayload<T> {
    /// Normalize to a paginated list. A bare array is a single complete page.
    pub fn into_paged(self) -> PagedList<T> {
        match self {
            ListPayload::Paged(paged) => paged,
            ListPayload::Plain(items) => PagedList {
                total: u32::try_from(items.len()).unwrap_or(u32::MAX),
                items,
                page: 1,
                total_pages: 1,
            },
        }
    }
}

/// Pagination query shared by list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}
