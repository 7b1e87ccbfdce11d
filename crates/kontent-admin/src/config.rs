// Configuration for AdminClient

/// Configuration for the admin client
#[derive(Clone, Debug)]
pub struct AdminClientConfig {
    /// Environment (project) id the Management API operates on
    pub environment_id: String,
    /// Management API key (bearer)
    pub management_api_key: String,
    /// Subscription API key (bearer); optional, user listing is disabled without it
    pub subscription_api_key: Option<String>,
    /// Subscription id; optional, required together with the subscription key
    pub subscription_id: Option<String>,
    /// Management API base URL (default: "https://manage.kontent.ai/v2")
    pub base_url: String,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
}

impl Default for AdminClientConfig {
    fn default() -> Self {
        Self {
            environment_id: String::new(),
            management_api_key: String::new(),
            subscription_api_key: None,
            subscription_id: None,
            base_url: "https://manage.kontent.ai/v2".to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
        }
    }
}

impl AdminClientConfig {
    /// Create a config for one environment with its Management API key
    pub fn new(environment_id: &str, management_api_key: &str) -> Self {
        Self {
            environment_id: environment_id.to_string(),
            management_api_key: management_api_key.to_string(),
            ..Default::default()
        }
    }

    /// Enable Subscription API access for user listing
    pub fn with_subscription(mut self, subscription_id: &str, subscription_api_key: &str) -> Self {
        self.subscription_id = Some(subscription_id.to_string());
        self.subscription_api_key = Some(subscription_api_key.to_string());
        self
    }

    /// Override the Management API base URL
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }
}
