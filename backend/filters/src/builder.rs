//! Builds the filter chain described by the loaded configuration.

use std::sync::Arc;

use anyhow::Result;
use relayforge_config::RelayForgeConfig;
use tracing::info;

use crate::builtin::{KeywordSkipFilter, PassthroughFilter};
use crate::chain::FilterChain;
use crate::restrict_saving::RestrictSavingBypassFilter;

/// Assemble the chain: keyword skipping first, then the restriction bypass.
/// A config that enables nothing yields a passthrough-only chain.
pub fn build_chain(config: &RelayForgeConfig) -> Result<FilterChain> {
    let mut chain = FilterChain::new();

    let keywords = config.skip_keywords();
    if !keywords.is_empty() {
        chain.push(Arc::new(KeywordSkipFilter::new(keywords.to_vec())?));
    }

    if let Some(bypass) = config.bypass().filter(|b| b.enabled.unwrap_or(false)) {
        let name = bypass
            .default_photo_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        let filter = match name {
            Some(name) => RestrictSavingBypassFilter::with_default_photo_name(name),
            None => RestrictSavingBypassFilter::new(),
        };
        chain.push(Arc::new(filter));
    }

    if chain.is_empty() {
        chain.push(Arc::new(PassthroughFilter));
    }

    info!(filters = ?chain.names(), "Built filter chain");
    Ok(chain)
}
