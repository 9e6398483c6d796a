//! Verdict types for URL classification.

use serde::Serialize;
use std::fmt;

/// Verdict represents the outcome of classifying a request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Verdict {
    /// Let the request through unmodified
    #[default]
    Allow = 0,
    /// Replace the request with the blocked response
    Block = 1,
}

impl Verdict {
    /// Whether the request should be blocked.
    pub fn is_block(self) -> bool {
        self == Verdict::Block
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Allow => "ALLOW",
            Verdict::Block => "BLOCK",
        }
    }
}

impl From<bool> for Verdict {
    fn from(block: bool) -> Self {
        if block {
            Verdict::Block
        } else {
            Verdict::Allow
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_from_bool() {
        assert_eq!(Verdict::from(true), Verdict::Block);
        assert_eq!(Verdict::from(false), Verdict::Allow);
        assert!(Verdict::Block.is_block());
        assert!(!Verdict::default().is_block());
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Allow.to_string(), "ALLOW");
        assert_eq!(Verdict::Block.to_string(), "BLOCK");
    }
}
