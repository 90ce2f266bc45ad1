use moka::sync::Cache;
use std::time::Duration;
use tracing::debug;

use crate::model::CableField;

use super::error::LookupError;
use super::source::ParameterSource;

/// Wraps a [`ParameterSource`] with a TTL cache. Failures are not cached.
#[derive(Clone)]
pub struct CachedParameterSource<S> {
    inner: S,
    cache: Cache<CableField, Vec<String>>,
}

impl<S> std::fmt::Debug for CachedParameterSource<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedParameterSource")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl<S: ParameterSource> CachedParameterSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(CableField::ALL.len() as u64)
            .time_to_live(ttl)
            .build();
        Self { inner, cache }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Drops every cached list.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl<S: ParameterSource> ParameterSource for CachedParameterSource<S> {
    async fn fetch_values(&self, field: CableField) -> Result<Vec<String>, LookupError> {
        if let Some(values) = self.cache.get(&field) {
            debug!(field = %field, "Parameter cache hit");
            return Ok(values);
        }

        let values = self.inner.fetch_values(field).await?;
        self.cache.insert(field, values.clone());
        Ok(values)
    }
}
