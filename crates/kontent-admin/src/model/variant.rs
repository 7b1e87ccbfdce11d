// Language variant and contributor model types

use serde::{Deserialize, Serialize};

use super::common::Reference;
use crate::constants::DEFAULT_CONTRIBUTOR_ROLE;

fn default_role() -> String {
    DEFAULT_CONTRIBUTOR_ROLE.to_string()
}

/// A user assigned to a language variant. Unique by `id` within one variant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Contributor {
    pub id: String,
    #[serde(default = "default_role")]
    pub role: String,
}

impl Contributor {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            role: default_role(),
        }
    }

    pub fn with_role(id: &str, role: &str) -> Self {
        Self {
            id: id.to_string(),
            role: role.to_string(),
        }
    }
}

/// Localized body of a content item for one language codename.
/// Element values are opaque to this client and round-trip untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageVariant {
    pub item: Reference,
    pub language: Reference,
    pub elements: Vec<serde_json::Value>,
    pub contributors: Vec<Contributor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_step: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

/// Write payload for the variant upsert. The elements must be the full set
/// read immediately beforehand; the API replaces the variant wholesale and a
/// partial element list would erase content.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariantUpsert {
    pub elements: Vec<serde_json::Value>,
    pub contributors: Vec<Contributor>,
}

impl VariantUpsert {
    /// Echo the fetched variant's elements and pair them with a reworked
    /// contributor list.
    pub fn from_variant(variant: &LanguageVariant, contributors: Vec<Contributor>) -> Self {
        Self {
            elements: variant.elements.clone(),
            contributors,
        }
    }
}

/// Read-only view of a variant's assignment state
#[derive(Clone, Debug, Default)]
pub struct VariantAssignments {
    pub contributors: Vec<Contributor>,
    pub elements: Vec<serde_json::Value>,
}

/// Merge a contributor into an existing list by user id.
///
/// A present id is updated in place: its role is replaced only when the caller
/// supplied one. An absent id is appended with the given role, or the default
/// role when none was given. The input order of untouched entries is kept.
pub fn merge_contributor(
    contributors: &[Contributor],
    user_id: &str,
    role: Option<&str>,
) -> Vec<Contributor> {
    let mut merged: Vec<Contributor> = contributors.to_vec();

    if let Some(existing) = merged.iter_mut().find(|c| c.id == user_id) {
        if let Some(role) = role {
            existing.role = role.to_string();
        }
    } else {
        merged.push(match role {
            Some(role) => Contributor::with_role(user_id, role),
            None => Contributor::new(user_id),
        });
    }

    merged
}

/// Drop a contributor by user id. An absent id leaves the list unchanged.
pub fn without_contributor(contributors: &[Contributor], user_id: &str) -> Vec<Contributor> {
    contributors
        .iter()
        .filter(|c| c.id != user_id)
        .cloned()
        .collect()
}
