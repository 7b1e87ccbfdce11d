// Subscription user model types

use serde::{Deserialize, Serialize};

/// User record returned by the Subscription API
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl SubscriptionUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Response of the subscription user listing endpoint
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionUserListing {
    pub users: Vec<SubscriptionUser>,
}
