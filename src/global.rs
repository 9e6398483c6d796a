//! Process-wide rule store and public API.
//!
//! Hosts that cannot thread a [`Classifier`] through their request hooks
//! call [`init`] once at startup and then [`classify`] from any thread.
//! The store is published through a `OnceCell`, so every reader observes a
//! fully built store.

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::classifier::Classifier;
use crate::mechanism::Decision;
use crate::ruleset::RuleStore;
use crate::Verdict;

/// Global classifier
static GLOBAL_CLASSIFIER: OnceCell<Classifier> = OnceCell::new();

/// Initialize the global rule store from the built-in rules.
///
/// Only the first call builds anything; later calls are no-ops.
pub fn init() {
    init_with(RuleStore::builtin);
}

/// Initialize the global rule store with a custom builder.
///
/// Returns `false` if the store was already initialized, in which case
/// `build` is not called.
pub fn init_with<F>(build: F) -> bool
where
    F: FnOnce() -> RuleStore,
{
    let mut built = false;
    GLOBAL_CLASSIFIER.get_or_init(|| {
        built = true;
        Classifier::new(Arc::new(build()))
    });
    if !built {
        log::debug!("Rule store already initialized");
    }
    built
}

/// Check if the global rule store is initialized.
pub fn is_initialized() -> bool {
    GLOBAL_CLASSIFIER.get().is_some()
}

/// Get the global classifier, initializing with built-in rules if needed.
pub fn classifier() -> &'static Classifier {
    GLOBAL_CLASSIFIER.get_or_init(|| Classifier::new(Arc::new(RuleStore::builtin())))
}

/// Classify a URL against the global rule store.
///
/// # Examples
/// ```
/// use blockrule::{classify, Verdict};
///
/// assert_eq!(classify(Some("https://doubleclick.net/ads")), Verdict::Block);
/// assert_eq!(classify(None), Verdict::Allow);
/// ```
pub fn classify(url: Option<&str>) -> Verdict {
    classifier().classify(url)
}

/// Classify a URL against the global rule store and explain the result.
pub fn explain(url: Option<&str>) -> Decision {
    classifier().explain(url)
}

/// Get the number of compiled patterns in the global rule store.
///
/// Returns 0 before initialization; reading it never initializes.
pub fn pattern_count() -> usize {
    GLOBAL_CLASSIFIER
        .get()
        .map_or(0, |c| c.store().pattern_count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        let count = pattern_count();
        assert!(is_initialized());

        init();
        assert_eq!(pattern_count(), count);
        assert!(!init_with(|| RuleStore::builder("other").build()));
        assert_eq!(pattern_count(), count);
    }

    #[test]
    fn test_global_classify() {
        init();
        assert_eq!(classify(Some("https://doubleclick.net/ads")), Verdict::Block);
        assert_eq!(classify(Some("")), Verdict::Allow);
        assert_eq!(explain(None).verdict, Verdict::Allow);
    }
}
