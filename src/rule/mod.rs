//! Rule types and trait definitions.

mod pattern;
mod substring;

pub use pattern::PatternRule;
pub use substring::{SubstringRule, SubstringTable};

/// Rule trait defines the interface for everything that can match a URL.
///
/// Every implementation expects its input to be already lower-cased; the
/// classifier lower-cases the URL exactly once per call.
pub trait Rule: Send + Sync {
    /// Match a lower-cased URL against this rule.
    fn matches(&self, url_lower: &str) -> bool;

    /// The source text this rule was built from.
    fn source(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_trait_object() {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(PatternRule::compile(r".*doubleclick\.net/.*").unwrap()),
            Box::new(SubstringRule::new("/ads/").unwrap()),
        ];

        let url = "https://example.com/ads/banner.png";
        let hits: Vec<&str> = rules
            .iter()
            .filter(|r| r.matches(url))
            .map(|r| r.source())
            .collect();
        assert_eq!(hits, vec!["/ads/"]);
    }
}
