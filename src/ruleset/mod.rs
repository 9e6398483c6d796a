//! RuleStore construction and storage.

pub mod builtin;
mod config;

pub use config::{RuleConfig, RuleSource, Section, SectionHeader};

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::rule::{PatternRule, SubstringTable};

/// RuleStore holds every table the classifier consults.
///
/// A store is immutable once built: there is no way to add, remove or
/// recompile a rule afterwards. Share it between threads with `Arc`.
///
/// Tables are consulted in this order:
/// 1. Whitelist entries
/// 2. Protocol exceptions
/// 3. Rule patterns (full match, in insertion order)
/// 4. Path heuristics, cancelled by exception markers
#[derive(Debug, Clone)]
pub struct RuleStore {
    name: String,
    whitelist: SubstringTable,
    protocol_exceptions: SubstringTable,
    rules: Vec<PatternRule>,
    path_heuristics: SubstringTable,
    exception_markers: SubstringTable,
    rejected: Vec<String>,
}

impl RuleStore {
    /// Start building a custom store.
    pub fn builder(name: impl Into<String>) -> RuleStoreBuilder {
        RuleStoreBuilder::new(name)
    }

    /// Build the store from the built-in rule data.
    pub fn builtin() -> Self {
        Self::builder("builtin")
            .whitelist(builtin::WHITELIST)
            .protocol_exceptions(builtin::PROTOCOL_EXCEPTIONS)
            .patterns(builtin::PATTERNS)
            .path_heuristics(builtin::PATH_HEURISTICS)
            .exception_markers(builtin::EXCEPTION_MARKERS)
            .build()
    }

    /// Build a store by parsing a sectioned rule list from a reader.
    ///
    /// ```text
    /// # comment
    /// [whitelist]
    /// youtube.com
    /// [pattern]
    /// .*doubleclick\.net/.*
    /// [path, disable]
    /// /log
    /// ```
    ///
    /// Patterns that fail to compile are skipped, like in [`RuleStore::builtin`].
    /// Inside a section, a bracketed line that names no section is an entry.
    /// Before the first header, unknown sections and plain entries are errors.
    pub fn from_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self> {
        let mut builder = Self::builder(name);
        let buf_reader = BufReader::new(reader);
        // `None` inside `Some` marks a disabled section
        let mut current: Option<Option<Section>> = None;

        for (idx, line) in buf_reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            // Only whole-line comments: `#` is legal inside a pattern
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // A bracketed line is a header only if it names a section;
            // otherwise it is an entry such as `[a-z]+\.ads\.com/.*`
            if line.starts_with('[') && line.ends_with(']') {
                let header = SectionHeader::parse(&line[1..line.len() - 1]);
                match Section::from_str(&header.name) {
                    Some(section) if header.disabled => {
                        log::debug!("Skipping disabled section [{}]", section.name());
                        current = Some(None);
                        continue;
                    }
                    Some(section) => {
                        current = Some(Some(section));
                        continue;
                    }
                    None if current.is_none() => {
                        return Err(Error::InvalidSection {
                            line: line_no,
                            name: header.name,
                        });
                    }
                    None => {}
                }
            }

            match current {
                None => return Err(Error::MissingSection(line_no)),
                Some(None) => {}
                Some(Some(section)) => builder.push(section, line),
            }
        }

        Ok(builder.build())
    }

    /// Build a store from a rule list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        RuleConfig::from_path(path.as_ref()).load()
    }

    /// Get the name of this store.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of successfully compiled rule patterns.
    pub fn pattern_count(&self) -> usize {
        self.rules.len()
    }

    /// Get the compiled rule patterns in evaluation order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Get the patterns that failed to compile.
    pub fn rejected_patterns(&self) -> &[String] {
        &self.rejected
    }

    pub fn whitelist(&self) -> &SubstringTable {
        &self.whitelist
    }

    pub fn protocol_exceptions(&self) -> &SubstringTable {
        &self.protocol_exceptions
    }

    pub fn path_heuristics(&self) -> &SubstringTable {
        &self.path_heuristics
    }

    pub fn exception_markers(&self) -> &SubstringTable {
        &self.exception_markers
    }

    /// Get the number of entries in a section.
    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Whitelist => self.whitelist.len(),
            Section::ProtocolException => self.protocol_exceptions.len(),
            Section::Pattern => self.rules.len(),
            Section::PathHeuristic => self.path_heuristics.len(),
            Section::ExceptionMarker => self.exception_markers.len(),
        }
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builder for [`RuleStore`].
///
/// Entries are collected as text; patterns are compiled in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct RuleStoreBuilder {
    name: String,
    whitelist: SubstringTable,
    protocol_exceptions: SubstringTable,
    patterns: Vec<String>,
    path_heuristics: SubstringTable,
    exception_markers: SubstringTable,
}

impl RuleStoreBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            whitelist: SubstringTable::new(),
            protocol_exceptions: SubstringTable::new(),
            patterns: Vec::new(),
            path_heuristics: SubstringTable::new(),
            exception_markers: SubstringTable::new(),
        }
    }

    /// Add whitelist entries.
    pub fn whitelist<S: AsRef<str>>(mut self, entries: &[S]) -> Self {
        self.extend(Section::Whitelist, entries);
        self
    }

    /// Add protocol exception paths.
    pub fn protocol_exceptions<S: AsRef<str>>(mut self, entries: &[S]) -> Self {
        self.extend(Section::ProtocolException, entries);
        self
    }

    /// Add rule patterns.
    pub fn patterns<S: AsRef<str>>(mut self, patterns: &[S]) -> Self {
        self.extend(Section::Pattern, patterns);
        self
    }

    /// Add path heuristics.
    pub fn path_heuristics<S: AsRef<str>>(mut self, entries: &[S]) -> Self {
        self.extend(Section::PathHeuristic, entries);
        self
    }

    /// Add exception markers.
    pub fn exception_markers<S: AsRef<str>>(mut self, entries: &[S]) -> Self {
        self.extend(Section::ExceptionMarker, entries);
        self
    }

    fn extend<S: AsRef<str>>(&mut self, section: Section, entries: &[S]) {
        for entry in entries {
            self.push(section, entry.as_ref());
        }
    }

    fn push(&mut self, section: Section, entry: &str) {
        match section {
            Section::Whitelist => {
                self.whitelist.add_entry(entry);
            }
            Section::ProtocolException => {
                self.protocol_exceptions.add_entry(entry);
            }
            Section::Pattern => self.patterns.push(entry.to_string()),
            Section::PathHeuristic => {
                self.path_heuristics.add_entry(entry);
            }
            Section::ExceptionMarker => {
                self.exception_markers.add_entry(entry);
            }
        }
    }

    /// Compile every pattern and freeze the store.
    ///
    /// A pattern that fails to compile is logged and skipped; building
    /// never fails.
    pub fn build(self) -> RuleStore {
        let mut rules = Vec::with_capacity(self.patterns.len());
        let mut rejected = Vec::new();

        for pattern in self.patterns {
            match PatternRule::compile(&pattern) {
                Ok(rule) => rules.push(rule),
                Err(e) => {
                    log::error!("Skipping rule pattern in {}: {}", self.name, e);
                    rejected.push(pattern);
                }
            }
        }

        log::info!(
            "Initialized rule store {}: {} patterns, {} whitelist entries, {} path heuristics",
            self.name,
            rules.len(),
            self.whitelist.len(),
            self.path_heuristics.len()
        );
        if !rejected.is_empty() {
            log::warn!("{} patterns rejected in {}", rejected.len(), self.name);
        }

        RuleStore {
            name: self.name,
            whitelist: self.whitelist,
            protocol_exceptions: self.protocol_exceptions,
            rules,
            path_heuristics: self.path_heuristics,
            exception_markers: self.exception_markers,
            rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    #[test]
    fn test_builtin_store() {
        let store = RuleStore::builtin();

        assert_eq!(store.name(), "builtin");
        assert_eq!(store.pattern_count(), builtin::PATTERNS.len());
        assert!(store.rejected_patterns().is_empty());
        assert_eq!(store.whitelist().len(), builtin::WHITELIST.len());
        assert_eq!(store.protocol_exceptions().len(), 2);
        assert_eq!(store.path_heuristics().len(), builtin::PATH_HEURISTICS.len());
        assert_eq!(store.exception_markers().len(), 4);
    }

    #[test]
    fn test_bad_pattern_skipped() {
        let store = RuleStore::builder("test")
            .patterns(&[r".*a\.com/.*", "(broken", "", r".*b\.com/.*"])
            .build();

        assert_eq!(store.pattern_count(), 2);
        assert_eq!(store.rejected_patterns(), &["(broken".to_string(), String::new()]);
        let sources: Vec<&str> = store.rules().iter().map(|r| r.source()).collect();
        assert_eq!(sources, vec![r".*a\.com/.*", r".*b\.com/.*"]);
    }

    #[test]
    fn test_parse_rule_list() {
        let text = r#"
# Comment
[whitelist]
Example.org

[protocol-exception]
/cdn-cgi/

[pattern]
.*doubleclick\.net/.*
.*ads#\.com/.*
(broken

[path]
/ads/

[exception]
/api/
"#;

        let store = RuleStore::from_reader("test", text.as_bytes()).unwrap();

        assert_eq!(store.whitelist().iter().collect::<Vec<_>>(), vec!["example.org"]);
        assert_eq!(store.section_len(Section::ProtocolException), 1);
        assert_eq!(store.pattern_count(), 2);
        assert_eq!(store.rules()[1].source(), r".*ads#\.com/.*");
        assert_eq!(store.rejected_patterns().len(), 1);
        assert_eq!(store.section_len(Section::PathHeuristic), 1);
        assert_eq!(store.section_len(Section::ExceptionMarker), 1);
    }

    #[test]
    fn test_disabled_section() {
        let text = r#"
[path, disable]
/log

[path]
/ads/
"#;

        let store = RuleStore::from_reader("test", text.as_bytes()).unwrap();
        let entries: Vec<&str> = store.path_heuristics().iter().collect();
        assert_eq!(entries, vec!["/ads/"]);
    }

    #[test]
    fn test_loader_trims_lines() {
        let text = "[pattern]\n   .*ads\\.example/.*  \n[path]\n\t/promo/ \n";

        let store = RuleStore::from_reader("test", text.as_bytes()).unwrap();
        assert_eq!(store.rules()[0].source(), r".*ads\.example/.*");
        assert_eq!(store.path_heuristics().iter().collect::<Vec<_>>(), vec!["/promo/"]);
    }

    #[test]
    fn test_bracketed_pattern_is_an_entry() {
        let text = "[pattern]\n[a-z]+\\.ads\\.[a-z]+/.*\n[bogus]\n[path]\n/ads/\n";

        let store = RuleStore::from_reader("test", text.as_bytes()).unwrap();
        let sources: Vec<&str> = store.rules().iter().map(|r| r.source()).collect();
        assert_eq!(sources, vec![r"[a-z]+\.ads\.[a-z]+/.*", "[bogus]"]);
        assert!(store.rejected_patterns().is_empty());
        assert_eq!(store.section_len(Section::PathHeuristic), 1);
    }

    #[test]
    fn test_invalid_section() {
        let err = RuleStore::from_reader("test", "[bogus]\nx\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidSection { line: 1, .. }));

        let err = RuleStore::from_reader("test", "\n/ads/\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingSection(2)));
    }
}
