/// Ordered filter chain.
///
/// Filters run sequentially in registration order. The first filter to
/// report `false` halts the chain. Messages from chats that forbid
/// forwarding only reach filters that declare they can handle them.
use async_trait::async_trait;
use relayforge_core::{EventKind, Message};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::filter::{FilterResult, MessageFilter};

type FilterBox = Arc<dyn MessageFilter>;

#[derive(Default, Clone)]
pub struct FilterChain {
    filters: Vec<FilterBox>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter to the end of the chain.
    pub fn push(&mut self, filter: Arc<dyn MessageFilter>) {
        self.filters.push(filter);
    }

    pub fn with(mut self, filter: Arc<dyn MessageFilter>) -> Self {
        self.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

#[async_trait]
impl MessageFilter for FilterChain {
    fn name(&self) -> &str {
        "chain"
    }

    fn restricted_content_allowed(&self) -> bool {
        self.filters.iter().all(|f| f.restricted_content_allowed())
    }

    async fn process(&self, mut message: Message, event: EventKind) -> FilterResult {
        for filter in &self.filters {
            if message.is_restricted() && !filter.restricted_content_allowed() {
                debug!(
                    "[Filters] {} skips restricted message {}",
                    filter.name(),
                    message.id
                );
                return Ok((false, message));
            }

            debug!("[Filters] Running {} for {}", filter.name(), event);
            let (forward, next) = match filter.process(message, event).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("[Filters] {} returned error: {}", filter.name(), e);
                    return Err(e);
                }
            };
            message = next;
            if !forward {
                debug!("[Filters] {} halted message {}", filter.name(), message.id);
                return Ok((false, message));
            }
        }
        Ok((true, message))
    }
}
