//! RuleStore configuration, rule list sections and header parsing.

use std::collections::HashMap;
use std::path::PathBuf;

use super::RuleStore;
use crate::error::Result;

/// Where a rule store's data comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RuleSource {
    /// Rules compiled into the binary
    #[default]
    Builtin,
    /// Sectioned rule list file
    File(PathBuf),
}

/// Configuration for a RuleStore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    /// Name used in log lines and statistics
    pub name: String,
    /// Source of the rule data
    pub source: RuleSource,
}

impl RuleConfig {
    /// Create a new RuleConfig.
    pub fn new(name: impl Into<String>, source: RuleSource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Create a RuleConfig reading a rule list file, named after the file stem.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Self::new(name, RuleSource::File(path))
    }

    /// Build the store this configuration describes.
    pub fn load(&self) -> Result<RuleStore> {
        match &self.source {
            RuleSource::Builtin => Ok(RuleStore::builtin()),
            RuleSource::File(path) => {
                log::info!("Loading rules {} from {:?}", self.name, path);
                let file = std::fs::File::open(path)?;
                RuleStore::from_reader(self.name.clone(), file)
            }
        }
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::new("builtin", RuleSource::Builtin)
    }
}

/// Sections of a rule list, one per rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Substrings that always allow
    Whitelist,
    /// Infrastructure paths that always allow
    ProtocolException,
    /// Full-match regex patterns that block
    Pattern,
    /// Path fragments that block
    PathHeuristic,
    /// Path fragments that cancel a path heuristic
    ExceptionMarker,
}

impl Section {
    /// Get the internal name of this section.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Whitelist => "whitelist",
            Section::ProtocolException => "protocol-exception",
            Section::Pattern => "pattern",
            Section::PathHeuristic => "path",
            Section::ExceptionMarker => "exception",
        }
    }

    /// Get the display name of this section.
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Whitelist => "Whitelist entries",
            Section::ProtocolException => "Protocol exceptions",
            Section::Pattern => "Rule patterns",
            Section::PathHeuristic => "Path heuristics",
            Section::ExceptionMarker => "Exception markers",
        }
    }

    /// Parse a section from its name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "whitelist" | "allow" => Some(Section::Whitelist),
            "protocol-exception" | "protocol_exception" => Some(Section::ProtocolException),
            "pattern" | "patterns" | "rule" => Some(Section::Pattern),
            "path" | "path-heuristic" | "path_heuristic" => Some(Section::PathHeuristic),
            "exception" | "exception-marker" | "exception_marker" => {
                Some(Section::ExceptionMarker)
            }
            _ => None,
        }
    }

    /// All sections in evaluation order.
    pub fn all() -> [Section; 5] {
        [
            Section::Whitelist,
            Section::ProtocolException,
            Section::Pattern,
            Section::PathHeuristic,
            Section::ExceptionMarker,
        ]
    }
}

/// A parsed `[section, flag, key=value]` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub name: String,
    pub disabled: bool,
}

impl SectionHeader {
    /// Parse the content between the brackets of a header line.
    pub fn parse(content: &str) -> Self {
        let mut parts = content.splitn(2, ',');
        let name = parts.next().unwrap_or_default().trim().to_lowercase();
        let params = parse_header_params(parts.next().unwrap_or_default());

        let disabled = params
            .get("disable")
            .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "f" | "no"))
            .unwrap_or(false);

        Self { name, disabled }
    }
}

/// Parse header parameters from a string like "disable,comment=foo"
fn parse_header_params(content: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    for part in content.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Some(eq_pos) = part.find('=') {
            let key = part[..eq_pos].trim().to_lowercase();
            let value = part[eq_pos + 1..].trim().to_string();
            params.insert(key, value);
        } else {
            // Key without value (like "disable")
            params.insert(part.to_lowercase(), String::new());
        }
    }

    params
}
