// Content item model types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Reference;

/// Content item metadata as returned by the Management API.
/// Language-independent; localized bodies live in language variants.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    pub id: String,
    pub name: String,
    pub codename: String,
    #[serde(rename = "type")]
    pub type_: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// Continuation-token pagination block
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub continuation_token: Option<String>,
    pub next_page: Option<String>,
}

/// One page of the item listing
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItemPage {
    pub items: Vec<ContentItem>,
    pub pagination: Pagination,
}

impl ContentItemPage {
    pub fn has_next_page(&self) -> bool {
        self.pagination.continuation_token.is_some()
    }
}
