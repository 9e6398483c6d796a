//! blockrule - A fast URL classification engine for embedded web views.
//!
//! For every outgoing request a web view issues, the engine decides
//! whether it is allowed through or replaced by an empty response
//! (ads, trackers, analytics, crypto-miners, push spam).
//!
//! # Features
//!
//! - **Full-match regex rules**: A pattern blocks only if it matches the whole URL
//! - **Whitelist**: Domain fragments that are never blocked
//! - **Path heuristics**: Ad-like path fragments, with exception markers for API paths
//! - **Thread-safe**: The rule store is immutable after construction
//! - **Fail-open**: Absent or odd input is always allowed
//!
//! # Quick Start
//!
//! ```
//! use blockrule::{init, classify, build_blocked_response, Verdict};
//!
//! // Build the process-wide store once at startup
//! init();
//!
//! if classify(Some("https://doubleclick.net/ads")) == Verdict::Block {
//!     let resp = build_blocked_response();
//!     assert_eq!(resp.status_code, 200);
//! }
//! ```
//!
//! Hosts that prefer explicit state build a [`RuleStore`] and share it:
//!
//! ```
//! use blockrule::{Classifier, RuleStore, Verdict};
//! use std::sync::Arc;
//!
//! let classifier = Classifier::new(Arc::new(RuleStore::builtin()));
//! assert_eq!(classifier.classify(Some("https://example.com/tracking/event")), Verdict::Block);
//! ```
//!
//! # Matching Priority
//!
//! 1. Whitelist entries (allow)
//! 2. Protocol exceptions such as `/cdn-cgi/` (allow)
//! 3. Rule patterns, first full match (block)
//! 4. Path heuristics unless an exception marker is present (block)
//! 5. Everything else (allow)

mod classifier;
mod error;
mod global;
mod mechanism;
mod response;
mod verdict;

pub mod channel;
pub mod rule;
pub mod ruleset;

// Re-export core types
pub use classifier::Classifier;
pub use error::{Error, PatternError, Result};
pub use mechanism::{Decision, Mechanism};
pub use response::{build_blocked_response, BlockedResponse};
pub use verdict::Verdict;

// Re-export ruleset types
pub use ruleset::{RuleConfig, RuleSource, RuleStore, RuleStoreBuilder, Section};

// Re-export global API functions
pub use global::{classifier, classify, explain, init, init_with, is_initialized, pattern_count};

// Re-export the method channel
pub use channel::{MethodCall, MethodChannel, MethodResult};
