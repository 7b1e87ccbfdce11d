// Management/Subscription API path construction

/// Language codenames probed, in order, when neither the language listing nor
/// a sample variant yields a usable default.
pub const LOCALE_CANDIDATES: &[&str] = &["en-US", "en", "default", "en-GB", "en-CA", "en-AU"];

/// Role recorded for a contributor when the caller does not specify one.
pub const DEFAULT_CONTRIBUTOR_ROLE: &str = "contributor";

pub mod management_api_path {
    pub fn items(environment_id: &str) -> String {
        format!("/projects/{environment_id}/items")
    }

    pub fn item(environment_id: &str, item_id: &str) -> String {
        format!("/projects/{environment_id}/items/{item_id}")
    }

    pub fn item_variants(environment_id: &str, item_id: &str) -> String {
        format!("/projects/{environment_id}/items/{item_id}/variants")
    }

    pub fn variant_by_codename(environment_id: &str, item_id: &str, language: &str) -> String {
        format!("/projects/{environment_id}/items/{item_id}/variants/codename/{language}")
    }

    pub fn variant_unpublish(environment_id: &str, item_id: &str, language: &str) -> String {
        format!("/projects/{environment_id}/items/{item_id}/variants/codename/{language}/unpublish")
    }

    pub fn languages(environment_id: &str) -> String {
        format!("/projects/{environment_id}/languages")
    }
}

pub mod subscription_api_path {
    pub fn users(subscription_id: &str) -> String {
        format!("/subscriptions/{subscription_id}/users")
    }
}
