//! Full-match regex rule implementation.

use regex::Regex;

use super::Rule;
use crate::error::PatternError;

/// PatternRule matches a URL when the *whole* URL matches the pattern.
///
/// The pattern is anchored at compile time, so `.*doubleclick\.net/.*`
/// behaves like a full-string match rather than a search.
///
/// # Examples
/// ```
/// use blockrule::rule::{PatternRule, Rule};
///
/// let rule = PatternRule::compile(r".*doubleclick\.net/.*").unwrap();
/// assert!(rule.matches("https://doubleclick.net/ads"));
/// assert!(!rule.matches("https://doubleclick.net"));
/// ```
#[derive(Debug, Clone)]
pub struct PatternRule {
    source: String,
    regex: Regex,
}

impl PatternRule {
    /// Compile a pattern into a rule. The pattern is used verbatim.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::EmptyPattern);
        }

        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|source| PatternError::Compile {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }
}

impl Rule for PatternRule {
    fn matches(&self, url_lower: &str) -> bool {
        self.regex.is_match(url_lower)
    }

    fn source(&self) -> &str {
        &self.source
    }
}
