//! Substring rule and ordered substring tables.

use ahash::AHashSet;

use super::Rule;

/// SubstringRule matches when its needle occurs anywhere in the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringRule {
    needle: String,
}

impl SubstringRule {
    /// Create a rule from a needle.
    ///
    /// The needle is lower-cased but otherwise kept verbatim. Returns `None`
    /// for an empty needle, which would otherwise match every URL.
    pub fn new(needle: &str) -> Option<Self> {
        let needle = needle.to_lowercase();
        if needle.is_empty() {
            return None;
        }
        Some(Self { needle })
    }
}

impl Rule for SubstringRule {
    fn matches(&self, url_lower: &str) -> bool {
        url_lower.contains(self.needle.as_str())
    }

    fn source(&self) -> &str {
        &self.needle
    }
}

/// SubstringTable is an ordered list of substring rules.
///
/// Entries keep insertion order; duplicates are dropped on insert so the
/// first occurrence decides the position.
#[derive(Debug, Clone, Default)]
pub struct SubstringTable {
    entries: Vec<SubstringRule>,
    seen: AHashSet<String>,
}

impl SubstringTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from a list of entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for entry in entries {
            table.add_entry(entry.as_ref());
        }
        table
    }

    /// Add an entry. Returns `false` if it was empty or already present.
    pub fn add_entry(&mut self, entry: &str) -> bool {
        let Some(rule) = SubstringRule::new(entry) else {
            return false;
        };
        if !self.seen.insert(rule.needle.clone()) {
            return false;
        }
        self.entries.push(rule);
        true
    }

    /// Return the first entry, in table order, contained in the URL.
    pub fn first_match(&self, url_lower: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|rule| rule.matches(url_lower))
            .map(|rule| rule.source())
    }

    /// Check whether any entry is contained in the URL.
    pub fn contains_any(&self, url_lower: &str) -> bool {
        self.first_match(url_lower).is_some()
    }

    /// Iterate over the entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|rule| rule.source())
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_rule() {
        let rule = SubstringRule::new("YouTube.com").unwrap();
        assert_eq!(rule.source(), "youtube.com");
        assert!(rule.matches("https://www.youtube.com/watch"));
        assert!(!rule.matches("https://youtu.be/x"));
    }

    #[test]
    fn test_empty_needle_rejected() {
        assert!(SubstringRule::new("").is_none());

        let mut table = SubstringTable::new();
        assert!(!table.add_entry(""));
        assert!(table.is_empty());
        assert!(!table.contains_any("https://anything"));
    }

    #[test]
    fn test_whitespace_is_significant() {
        let rule = SubstringRule::new(" ad ").unwrap();
        assert_eq!(rule.source(), " ad ");
        assert!(rule.matches("https://x.com/?q=an ad here"));
        assert!(!rule.matches("https://x.com/ad/"));
    }

    #[test]
    fn test_first_match_follows_table_order() {
        let table = SubstringTable::from_entries(["/ads/", "/ad/", "/tracking"]);

        assert_eq!(
            table.first_match("https://x.com/ad/y/ads/z"),
            Some("/ads/")
        );
        assert_eq!(table.first_match("https://x.com/ad/y"), Some("/ad/"));
        assert_eq!(table.first_match("https://x.com/content"), None);
    }

    #[test]
    fn test_duplicates_dropped() {
        let mut table = SubstringTable::from_entries(["cdn-cgi", "fastly.com"]);
        assert!(!table.add_entry("CDN-CGI"));
        assert!(table.add_entry("akamai.com"));

        let entries: Vec<&str> = table.iter().collect();
        assert_eq!(entries, vec!["cdn-cgi", "fastly.com", "akamai.com"]);
        assert_eq!(table.len(), 3);
    }
}
