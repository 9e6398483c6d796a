//! Decision mechanism definitions.

use serde::Serialize;
use std::fmt;

use crate::Verdict;

/// Mechanism names the step of the decision procedure that produced a verdict.
///
/// Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mechanism {
    /// Input was absent or empty
    EmptyInput,
    /// URL contained a whitelist entry
    Whitelist,
    /// URL contained an infrastructure path exception
    ProtocolException,
    /// URL fully matched a compiled rule pattern
    Rule,
    /// URL contained a path heuristic but also an exception marker
    ExceptionMarker,
    /// URL contained a path heuristic
    PathHeuristic,
    /// Nothing applied
    NoMatch,
}

impl Mechanism {
    /// Parse a mechanism from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "EMPTY-INPUT" => Some(Mechanism::EmptyInput),
            "WHITELIST" => Some(Mechanism::Whitelist),
            "PROTOCOL-EXCEPTION" => Some(Mechanism::ProtocolException),
            "RULE" => Some(Mechanism::Rule),
            "EXCEPTION-MARKER" => Some(Mechanism::ExceptionMarker),
            "PATH-HEURISTIC" => Some(Mechanism::PathHeuristic),
            "NO-MATCH" => Some(Mechanism::NoMatch),
            _ => None,
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mechanism::EmptyInput => "EMPTY-INPUT",
            Mechanism::Whitelist => "WHITELIST",
            Mechanism::ProtocolException => "PROTOCOL-EXCEPTION",
            Mechanism::Rule => "RULE",
            Mechanism::ExceptionMarker => "EXCEPTION-MARKER",
            Mechanism::PathHeuristic => "PATH-HEURISTIC",
            Mechanism::NoMatch => "NO-MATCH",
        }
    }

    /// The verdict this mechanism always yields.
    pub fn verdict(&self) -> Verdict {
        match self {
            Mechanism::Rule | Mechanism::PathHeuristic => Verdict::Block,
            _ => Verdict::Allow,
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decision is a verdict together with what produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub verdict: Verdict,
    pub mechanism: Mechanism,
    /// Table entry or pattern source that matched, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
}

impl Decision {
    /// Create a decision; the verdict follows from the mechanism.
    pub fn new(mechanism: Mechanism, matched: Option<&str>) -> Self {
        Self {
            verdict: mechanism.verdict(),
            mechanism,
            matched: matched.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mechanism_parse() {
        assert_eq!(Mechanism::parse("WHITELIST"), Some(Mechanism::Whitelist));
        assert_eq!(Mechanism::parse("whitelist"), Some(Mechanism::Whitelist));
        assert_eq!(Mechanism::parse("path-heuristic"), Some(Mechanism::PathHeuristic));
        assert_eq!(Mechanism::parse("unknown"), None);
        for m in [Mechanism::EmptyInput, Mechanism::ProtocolException, Mechanism::NoMatch] {
            assert_eq!(Mechanism::parse(m.as_str()), Some(m));
        }
    }

    #[test]
    fn test_mechanism_verdicts() {
        assert_eq!(Mechanism::Rule.verdict(), Verdict::Block);
        assert_eq!(Mechanism::PathHeuristic.verdict(), Verdict::Block);
        for m in [
            Mechanism::EmptyInput,
            Mechanism::Whitelist,
            Mechanism::ProtocolException,
            Mechanism::ExceptionMarker,
            Mechanism::NoMatch,
        ] {
            assert_eq!(m.verdict(), Verdict::Allow, "{m}");
        }
    }

    #[test]
    fn test_decision_json() {
        let d = Decision::new(Mechanism::PathHeuristic, Some("/ads/"));
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(
            json,
            r#"{"verdict":"block","mechanism":"path-heuristic","matched":"/ads/"}"#
        );

        let d = Decision::new(Mechanism::NoMatch, None);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"verdict":"allow","mechanism":"no-match"}"#);
    }
}
