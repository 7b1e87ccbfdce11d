//! Language codename resolution
//!
//! The Management API does not expose one authoritative "default language"
//! across all of its surfaces, so the resolver degrades through progressively
//! weaker signals: the session cache, the language listing with an English
//! preference, a sample item's variant language, and finally a fixed probe
//! list of common codenames. The first success is cached for the rest of the
//! session; `set_language_codename` can overwrite it at any time.

use tracing::{debug, warn};

use crate::client::AdminClient;
use crate::constants::{LOCALE_CANDIDATES, management_api_path};
use crate::error::AssignmentError;
use crate::model::LanguageVariant;

impl AdminClient {
    /// Language codename used for variant operations when the caller does not
    /// pass one. Resolved once per session.
    pub async fn language_codename(&self) -> Result<String, AssignmentError> {
        if let Some(codename) = self.cached_language() {
            return Ok(codename);
        }
        self.resolve_language_codename().await
    }

    /// Overwrite the cached codename. Meant for recovery when resolution
    /// picked the wrong language for an environment.
    pub fn set_language_codename(&self, codename: &str) {
        self.cache_language(codename);
    }

    async fn resolve_language_codename(&self) -> Result<String, AssignmentError> {
        let mut last_error = String::from("no languages configured");

        // Strategy 1: the language listing, preferring English-looking entries.
        match self.list_languages().await {
            Ok(languages) if !languages.is_empty() => {
                let chosen = languages
                    .iter()
                    .find(|l| l.looks_english())
                    .unwrap_or(&languages[0]);
                debug!("resolved language {} from language listing", chosen.codename);
                return Ok(self.cache_language(&chosen.codename));
            }
            Ok(_) => {
                warn!("language listing returned no languages");
            }
            Err(err) => {
                warn!("language listing failed: {}", err);
                last_error = err.to_string();
            }
        }

        // Strategy 2: the language recorded on a real item's variant.
        let sample_item_id = match self.sample_item_id().await {
            Ok(id) => id,
            Err(detail) => {
                return Err(AssignmentError::LocaleResolution { detail });
            }
        };

        match self.sample_variant_language(&sample_item_id).await {
            Ok(Some(codename)) => {
                debug!("resolved language {} from sample item {}", codename, sample_item_id);
                return Ok(self.cache_language(&codename));
            }
            Ok(None) => {}
            Err(err) => {
                warn!("sample variant inspection failed: {}", err);
                last_error = err.to_string();
            }
        }

        // Strategy 3: probe common codenames against the sample item.
        for candidate in LOCALE_CANDIDATES {
            let path = management_api_path::variant_by_codename(
                self.environment_id(),
                &sample_item_id,
                candidate,
            );
            match self.management().get_optional::<LanguageVariant>(&path).await {
                Ok(Some(_)) => {
                    debug!("resolved language {} by probing", candidate);
                    return Ok(self.cache_language(candidate));
                }
                Ok(None) => {}
                Err(err) => {
                    last_error = err.to_string();
                }
            }
        }

        Err(AssignmentError::LocaleResolution { detail: last_error })
    }

    /// Id of an arbitrary existing item, used as the probe target. Errors are
    /// returned as plain detail strings for the resolution failure message.
    async fn sample_item_id(&self) -> Result<String, String> {
        let page = self
            .list_content_items(None)
            .await
            .map_err(|err| err.to_string())?;
        page.items
            .first()
            .map(|item| item.id.clone())
            .ok_or_else(|| "environment has no content items to inspect".to_string())
    }

    /// Language codename recorded on the first variant of the given item,
    /// if the listing carries one.
    async fn sample_variant_language(
        &self,
        item_id: &str,
    ) -> Result<Option<String>, AssignmentError> {
        let path = management_api_path::item_variants(self.environment_id(), item_id);
        let variants: Vec<LanguageVariant> = self.management().get(&path).await?;
        Ok(variants
            .into_iter()
            .find_map(|variant| variant.language.codename))
    }
}
