//! Provider registry keyed by provider id.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use portico_domain::{ProviderError, ProviderId, ProviderResult};

use super::OAuthProvider;

/// Registered provider adapters, dispatched by `ProviderId`.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<ProviderId, Arc<dyn OAuthProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own id.
    ///
    /// Returns the provider previously registered under that id, if any.
    pub fn register(
        &mut self,
        provider: Arc<dyn OAuthProvider>,
    ) -> Option<Arc<dyn OAuthProvider>> {
        self.providers.insert(provider.provider_id(), provider)
    }

    /// Builder-style variant of [`Self::register`].
    #[must_use]
    pub fn with(mut self, provider: Arc<dyn OAuthProvider>) -> Self {
        self.register(provider);
        self
    }

    /// Get a provider by id.
    #[must_use]
    pub fn get(&self, id: ProviderId) -> Option<Arc<dyn OAuthProvider>> {
        self.providers.get(&id).cloned()
    }

    /// Get a provider by its string id, as stored alongside accounts.
    ///
    /// # Errors
    /// Returns `ProviderError::UnknownProvider` if the name is not a known
    /// provider id or nothing is registered under it.
    pub fn get_by_name(&self, name: &str) -> ProviderResult<Arc<dyn OAuthProvider>> {
        let id: ProviderId = name.parse()?;
        self.get(id).ok_or_else(|| ProviderError::UnknownProvider(name.to_string()))
    }

    /// Ids of all registered providers, in sorted order.
    pub fn provider_ids(&self) -> impl Iterator<Item = ProviderId> + '_ {
        self.providers.keys().copied()
    }

    /// Number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true if no provider is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}
