// Assignment operation inputs and outcomes

use serde::{Deserialize, Serialize};

use super::variant::LanguageVariant;

/// Optional parameters for an assignment.
///
/// `notes` and `due_date` are informational for the caller's UI only; the CMS
/// has no backing field for them and they are never persisted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AssignOptions {
    pub role: Option<String>,
    pub notes: Option<String>,
    pub due_date: Option<String>,
}

impl AssignOptions {
    pub fn with_role(role: &str) -> Self {
        Self {
            role: Some(role.to_string()),
            ..Default::default()
        }
    }
}

/// Per-item outcome of an assignment operation
#[derive(Clone, Debug)]
pub struct AssignmentResult {
    pub item_id: String,
    pub success: bool,
    pub error: Option<String>,
    pub variant: Option<LanguageVariant>,
}

impl AssignmentResult {
    pub fn ok(item_id: &str, variant: LanguageVariant) -> Self {
        Self {
            item_id: item_id.to_string(),
            success: true,
            error: None,
            variant: Some(variant),
        }
    }

    pub fn failed(item_id: &str, error: String) -> Self {
        Self {
            item_id: item_id.to_string(),
            success: false,
            error: Some(error),
            variant: None,
        }
    }
}
