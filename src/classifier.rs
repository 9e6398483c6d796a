//! Request URL classification.

use std::sync::Arc;

use crate::mechanism::{Decision, Mechanism};
use crate::rule::Rule;
use crate::ruleset::RuleStore;
use crate::Verdict;

/// Classifier decides whether a request URL is allowed or blocked.
///
/// It only reads its [`RuleStore`]; cloning a classifier is cheap and
/// every clone shares the same store.
///
/// # Examples
/// ```
/// use blockrule::{Classifier, RuleStore, Verdict};
/// use std::sync::Arc;
///
/// let classifier = Classifier::new(Arc::new(RuleStore::builtin()));
/// assert_eq!(classifier.classify(Some("https://doubleclick.net/ads")), Verdict::Block);
/// assert_eq!(classifier.classify(None), Verdict::Allow);
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    store: Arc<RuleStore>,
}

impl Classifier {
    /// Create a classifier over a shared store.
    pub fn new(store: Arc<RuleStore>) -> Self {
        Self { store }
    }

    /// Get the store this classifier reads.
    pub fn store(&self) -> &Arc<RuleStore> {
        &self.store
    }

    /// Classify a URL. Absent and empty input are allowed.
    pub fn classify(&self, url: Option<&str>) -> Verdict {
        self.explain(url).verdict
    }

    /// Classify a URL and report which mechanism decided.
    ///
    /// Precedence (first applicable wins):
    /// 1. Whitelist entry contained in the URL → allow
    /// 2. Protocol exception contained in the URL → allow
    /// 3. First rule pattern matching the whole URL → block
    /// 4. Path heuristic contained in the URL → block, unless an
    ///    exception marker is contained too
    /// 5. Otherwise → allow
    pub fn explain(&self, url: Option<&str>) -> Decision {
        let url = match url {
            Some(u) if !u.is_empty() => u,
            _ => return Decision::new(Mechanism::EmptyInput, None),
        };

        let url_lower = url.to_lowercase();
        let store = &*self.store;

        if let Some(entry) = store.whitelist().first_match(&url_lower) {
            return Decision::new(Mechanism::Whitelist, Some(entry));
        }

        if let Some(marker) = store.protocol_exceptions().first_match(&url_lower) {
            return Decision::new(Mechanism::ProtocolException, Some(marker));
        }

        if let Some(rule) = store.rules().iter().find(|r| r.matches(&url_lower)) {
            log::debug!("Blocked URL by rule {}: {}", rule.source(), url);
            return Decision::new(Mechanism::Rule, Some(rule.source()));
        }

        if let Some(path) = store.path_heuristics().first_match(&url_lower) {
            // Markers are URL-wide, so one lookup covers every heuristic
            if let Some(marker) = store.exception_markers().first_match(&url_lower) {
                return Decision::new(Mechanism::ExceptionMarker, Some(marker));
            }
            log::debug!("Blocked URL by path {}: {}", path, url);
            return Decision::new(Mechanism::PathHeuristic, Some(path));
        }

        Decision::new(Mechanism::NoMatch, None)
    }

    /// Convenience wrapper mirroring a boolean host hook.
    pub fn should_block(&self, url: Option<&str>) -> bool {
        self.classify(url).is_block()
    }
}
