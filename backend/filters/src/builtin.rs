/// Built-in filters that ship alongside the restriction bypass.
use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::Regex;
use relayforge_core::{EventKind, Message};
use tracing::debug;

use crate::filter::{FilterResult, MessageFilter};

// ---------------------------------------------------------------------------
// Passthrough filter — forwards everything untouched
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct PassthroughFilter;

#[async_trait]
impl MessageFilter for PassthroughFilter {
    fn name(&self) -> &str {
        "passthrough"
    }

    async fn process(&self, message: Message, _event: EventKind) -> FilterResult {
        Ok((true, message))
    }
}

// ---------------------------------------------------------------------------
// Keyword skip filter — drops messages mentioning a keyword
// ---------------------------------------------------------------------------

pub struct KeywordSkipFilter {
    keywords: Vec<String>,
    pattern: Option<Regex>,
}

impl KeywordSkipFilter {
    /// Build a filter matching any of `keywords` as a whole word, ignoring case.
    /// Blank keywords are ignored.
    pub fn new(keywords: Vec<String>) -> Result<Self> {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        let pattern = if keywords.is_empty() {
            None
        } else {
            let alternation = keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            let re = Regex::new(&format!(r"(?i)(?:^|\W)({alternation})(?:$|\W)"))
                .context("Failed to compile keyword pattern")?;
            Some(re)
        };

        Ok(Self { keywords, pattern })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[async_trait]
impl MessageFilter for KeywordSkipFilter {
    fn name(&self) -> &str {
        "keyword_skip"
    }

    /// Only reads the text, so restricted media is never touched.
    fn restricted_content_allowed(&self) -> bool {
        true
    }

    async fn process(&self, message: Message, _event: EventKind) -> FilterResult {
        let (Some(pattern), Some(text)) = (&self.pattern, message.text.as_deref()) else {
            return Ok((true, message));
        };

        if let Some(found) = pattern.captures(text).and_then(|caps| caps.get(1)) {
            debug!(message_id = message.id, keyword = found.as_str(), "Skipping message");
            return Ok((false, message));
        }
        Ok((true, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relayforge_core::{Chat, MemorySession};
    use std::sync::Arc;

    fn message(text: &str) -> Message {
        Message::new(1, Arc::new(MemorySession::new()))
            .with_chat(Chat::new(5))
            .with_text(text)
    }

    #[tokio::test]
    async fn passthrough_keeps_message() {
        let (forward, out) = PassthroughFilter
            .process(message("anything"), EventKind::NewMessage)
            .await
            .unwrap();
        assert!(forward);
        assert_eq!(out.text.as_deref(), Some("anything"));
        assert!(!PassthroughFilter.restricted_content_allowed());
    }

    #[tokio::test]
    async fn keyword_matches_whole_word_ignoring_case() {
        let filter = KeywordSkipFilter::new(vec!["Spam".into()]).unwrap();

        let (forward, _) = filter
            .process(message("this is SPAM!"), EventKind::NewMessage)
            .await
            .unwrap();
        assert!(!forward);

        let (forward, _) = filter
            .process(message("spammer here"), EventKind::NewMessage)
            .await
            .unwrap();
        assert!(forward);
    }

    #[tokio::test]
    async fn keyword_with_regex_characters_is_literal() {
        let filter = KeywordSkipFilter::new(vec!["c++".into(), "  ".into()]).unwrap();
        assert_eq!(filter.keywords(), &["c++".to_string()]);

        let (forward, _) = filter
            .process(message("learning c++ today"), EventKind::NewMessage)
            .await
            .unwrap();
        assert!(!forward);
    }

    #[tokio::test]
    async fn keyword_filter_runs_on_restricted_chat() {
        let filter = KeywordSkipFilter::new(vec!["ads".into()]).unwrap();
        assert!(filter.restricted_content_allowed());

        let msg = message("buy ads now").with_chat(Chat::restricted(5));
        let (forward, _) = filter.process(msg, EventKind::NewMessage).await.unwrap();
        assert!(!forward);
    }

    #[tokio::test]
    async fn empty_keyword_list_never_skips() {
        let filter = KeywordSkipFilter::new(vec![]).unwrap();
        let (forward, _) = filter
            .process(message("spam"), EventKind::NewMessage)
            .await
            .unwrap();
        assert!(forward);
    }

    #[tokio::test]
    async fn message_without_text_is_kept() {
        let filter = KeywordSkipFilter::new(vec!["spam".into()]).unwrap();
        let msg = Message::new(2, Arc::new(MemorySession::new()));
        let (forward, _) = filter.process(msg, EventKind::NewMessage).await.unwrap();
        assert!(forward);
    }
}
