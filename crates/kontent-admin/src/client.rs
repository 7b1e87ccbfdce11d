// AdminClient - facade for content, language, user, and assignment operations

use std::sync::RwLock;

use kontent_client::{HttpClientConfig, KontentHttpClient};
use tracing::{debug, warn};

use crate::{
    config::AdminClientConfig,
    constants::{management_api_path, subscription_api_path},
    error::AssignmentError,
    model::{
        AssignOptions, AssignmentResult, ContentItem, ContentItemPage, Language, LanguageListing,
        LanguageVariant, Reference, SubscriptionUser, SubscriptionUserListing, VariantAssignments,
        VariantUpsert, merge_contributor, without_contributor,
    },
};

/// Admin HTTP client for one Kontent.ai environment.
///
/// Holds one transport per API surface and the session's resolved language
/// codename. All mutating variant operations are serialized by the caller;
/// bulk helpers iterate sequentially to avoid interleaved fetch-merge-write
/// cycles against the same variant.
pub struct AdminClient {
    config: AdminClientConfig,
    management: KontentHttpClient,
    subscription: Option<KontentHttpClient>,
    language_codename: RwLock<Option<String>>,
}

impl AdminClient {
    /// Create a new AdminClient with the given configuration
    pub fn new(config: AdminClientConfig) -> anyhow::Result<Self> {
        let management = KontentHttpClient::new(
            HttpClientConfig::new(&config.base_url)
                .with_api_key(&config.management_api_key)
                .with_timeouts(config.connect_timeout_ms, config.read_timeout_ms),
        )?;

        let subscription = match (&config.subscription_id, &config.subscription_api_key) {
            (Some(_), Some(key)) => Some(KontentHttpClient::new(
                HttpClientConfig::new(&config.base_url)
                    .with_api_key(key)
                    .with_timeouts(config.connect_timeout_ms, config.read_timeout_ms),
            )?),
            _ => None,
        };

        Ok(Self {
            config,
            management,
            subscription,
            language_codename: RwLock::new(None),
        })
    }

    /// Create a new AdminClient from an environment id and Management API key
    pub fn from_environment(environment_id: &str, management_api_key: &str) -> anyhow::Result<Self> {
        Self::new(AdminClientConfig::new(environment_id, management_api_key))
    }

    pub(crate) fn management(&self) -> &KontentHttpClient {
        &self.management
    }

    pub(crate) fn environment_id(&self) -> &str {
        &self.config.environment_id
    }

    pub(crate) fn cached_language(&self) -> Option<String> {
        self.language_codename
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub(crate) fn cache_language(&self, codename: &str) -> String {
        let mut guard = self
            .language_codename
            .write()
            .unwrap_or_else(|e| e.into_inner());
        *guard = Some(codename.to_string());
        codename.to_string()
    }

    // ============================================================================
    // Content item APIs
    // ============================================================================

    /// List content items, one page at a time. Pass the previous page's
    /// continuation token to fetch the next chunk.
    pub async fn list_content_items(
        &self,
        continuation: Option<&str>,
    ) -> Result<ContentItemPage, AssignmentError> {
        let path = management_api_path::items(self.environment_id());
        let page = match continuation {
            Some(token) => {
                self.management
                    .get_with_headers(&path, &[("x-continuation", token)])
                    .await?
            }
            None => self.management.get(&path).await?,
        };
        Ok(page)
    }

    pub async fn get_content_item(&self, item_id: &str) -> Result<ContentItem, AssignmentError> {
        let path = management_api_path::item(self.environment_id(), item_id);
        Ok(self.management.get(&path).await?)
    }

    // ============================================================================
    // Language APIs
    // ============================================================================

    pub async fn list_languages(&self) -> Result<Vec<Language>, AssignmentError> {
        let path = management_api_path::languages(self.environment_id());
        let listing: LanguageListing = self.management.get(&path).await?;
        Ok(listing.languages)
    }

    // ============================================================================
    // Subscription user APIs
    // ============================================================================

    pub fn has_subscription_access(&self) -> bool {
        self.subscription.is_some()
    }

    pub async fn list_subscription_users(&self) -> Result<Vec<SubscriptionUser>, AssignmentError> {
        let (client, subscription_id) = match (&self.subscription, &self.config.subscription_id) {
            (Some(client), Some(id)) => (client, id),
            _ => return Err(AssignmentError::SubscriptionNotConfigured),
        };

        let path = subscription_api_path::users(subscription_id);
        let listing: SubscriptionUserListing = client.get(&path).await?;
        Ok(listing.users)
    }

    // ============================================================================
    // Assignment APIs
    // ============================================================================

    /// Assign a user to one item's language variant.
    ///
    /// Fetches the current variant, echoes its full element set untouched,
    /// merges the contributor by id, and writes the variant back. API-level
    /// failures are captured in the result; only a failed language resolution
    /// (when `language` is omitted) errors the call itself.
    pub async fn assign(
        &self,
        item_id: &str,
        user_id: &str,
        language: Option<&str>,
        options: &AssignOptions,
    ) -> Result<AssignmentResult, AssignmentError> {
        let language = self.effective_language(language).await?;
        Ok(self
            .assign_with_language(item_id, user_id, &language, options)
            .await)
    }

    /// Assign a user to every listed item, sequentially and in input order.
    /// Individual failures never abort sibling items.
    pub async fn bulk_assign(
        &self,
        item_ids: &[&str],
        user_id: &str,
        language: Option<&str>,
        options: &AssignOptions,
    ) -> Result<Vec<AssignmentResult>, AssignmentError> {
        let language = self.effective_language(language).await?;

        let mut results = Vec::with_capacity(item_ids.len());
        for item_id in item_ids {
            let result = self
                .assign_with_language(item_id, user_id, &language, options)
                .await;
            if !result.success {
                warn!(
                    "assignment of {} to item {} failed: {}",
                    user_id,
                    item_id,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
            results.push(result);
        }
        Ok(results)
    }

    /// Read the current assignment state of one variant. A missing variant
    /// means "nothing assigned", not an error.
    pub async fn assignments(
        &self,
        item_id: &str,
        language: Option<&str>,
    ) -> Result<VariantAssignments, AssignmentError> {
        let language = self.effective_language(language).await?;
        let path =
            management_api_path::variant_by_codename(self.environment_id(), item_id, &language);

        match self.management.get_optional::<LanguageVariant>(&path).await? {
            Some(variant) => Ok(VariantAssignments {
                contributors: variant.contributors,
                elements: variant.elements,
            }),
            None => Ok(VariantAssignments::default()),
        }
    }

    /// Remove a user from one item's language variant. Removing an id that is
    /// not assigned writes the list back unchanged and succeeds.
    pub async fn remove_assignment(
        &self,
        item_id: &str,
        user_id: &str,
        language: Option<&str>,
    ) -> Result<AssignmentResult, AssignmentError> {
        let language = self.effective_language(language).await?;

        let variant = match self.fetch_variant(item_id, &language).await {
            Ok(variant) => variant,
            Err(err) => return Ok(AssignmentResult::failed(item_id, err.to_string())),
        };

        let contributors = without_contributor(&variant.contributors, user_id);
        let payload = VariantUpsert::from_variant(&variant, contributors);

        match self.upsert_variant(item_id, &language, &payload).await {
            Ok(updated) => Ok(AssignmentResult::ok(item_id, updated)),
            Err(err) => Ok(AssignmentResult::failed(item_id, err.to_string())),
        }
    }

    async fn assign_with_language(
        &self,
        item_id: &str,
        user_id: &str,
        language: &str,
        options: &AssignOptions,
    ) -> AssignmentResult {
        debug!("assigning {} to item {} ({})", user_id, item_id, language);

        let variant = match self.fetch_variant(item_id, language).await {
            Ok(variant) => variant,
            Err(err) => return AssignmentResult::failed(item_id, err.to_string()),
        };

        let contributors =
            merge_contributor(&variant.contributors, user_id, options.role.as_deref());
        let payload = VariantUpsert::from_variant(&variant, contributors);

        match self.upsert_variant(item_id, language, &payload).await {
            Ok(updated) => AssignmentResult::ok(item_id, updated),
            Err(err) => AssignmentResult::failed(item_id, err.to_string()),
        }
    }

    async fn fetch_variant(
        &self,
        item_id: &str,
        language: &str,
    ) -> Result<LanguageVariant, kontent_client::ApiError> {
        let path =
            management_api_path::variant_by_codename(self.environment_id(), item_id, language);
        self.management.get(&path).await
    }

    /// Write a variant back. A published variant is immutable, so on that
    /// specific conflict the variant is unpublished once and the write retried
    /// exactly once; the retry's outcome is final.
    async fn upsert_variant(
        &self,
        item_id: &str,
        language: &str,
        payload: &VariantUpsert,
    ) -> Result<LanguageVariant, kontent_client::ApiError> {
        match self.put_variant(item_id, language, payload).await {
            Ok(variant) => Ok(variant),
            Err(err) if err.is_published_conflict() => {
                warn!(
                    "variant {}/{} is published, unpublishing before retry",
                    item_id, language
                );
                let unpublish =
                    management_api_path::variant_unpublish(self.environment_id(), item_id, language);
                self.management.put_empty(&unpublish).await?;
                self.put_variant(item_id, language, payload).await
            }
            Err(err) => Err(err),
        }
    }

    /// Issue the variant PUT. The API may acknowledge the write with a 204
    /// instead of echoing the variant; the written state is reconstructed
    /// from the payload in that case.
    async fn put_variant(
        &self,
        item_id: &str,
        language: &str,
        payload: &VariantUpsert,
    ) -> Result<LanguageVariant, kontent_client::ApiError> {
        let path =
            management_api_path::variant_by_codename(self.environment_id(), item_id, language);

        match self.management.put_json_optional(&path, payload).await? {
            Some(variant) => Ok(variant),
            None => Ok(LanguageVariant {
                item: Reference::by_id(item_id),
                language: Reference::by_codename(language),
                elements: payload.elements.clone(),
                contributors: payload.contributors.clone(),
                workflow_step: None,
                last_modified: None,
            }),
        }
    }

    async fn effective_language(
        &self,
        language: Option<&str>,
    ) -> Result<String, AssignmentError> {
        match language {
            Some(codename) => Ok(codename.to_string()),
            None => self.language_codename().await,
        }
    }
}
