// Common model types

use serde::{Deserialize, Serialize};

/// Object reference as the Management API renders it: by id, codename, or both.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
}

impl Reference {
    pub fn by_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            codename: None,
        }
    }

    pub fn by_codename(codename: &str) -> Self {
        Self {
            id: None,
            codename: Some(codename.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_serialization_skips_empty() {
        let by_codename = Reference::by_codename("en-US");
        let json = serde_json::to_string(&by_codename).unwrap();
        assert_eq!(json, r#"{"codename":"en-US"}"#);

        let by_id = Reference::by_id("abc");
        let json = serde_json::to_string(&by_id).unwrap();
        assert_eq!(json, r#"{"id":"abc"}"#);
    }

    #[test]
    fn test_reference_deserialization_partial() {
        let reference: Reference = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(reference.id.as_deref(), Some("abc"));
        assert!(reference.codename.is_none());
    }
}
