//! core::ticket
//!
//! Ticket reference recognition.
//!
//! # Overview
//!
//! A [`TicketMatcher`] holds an ordered list of compiled patterns. A token is
//! a ticket if it matches any of them as a whole (never a substring). The
//! order of the rules only affects how soon a match short-circuits.
//!
//! Patterns that fail to compile are dropped at construction. A malformed
//! user pattern is inert rather than fatal; callers that want to report the
//! rejects use [`TicketMatcher::with_diagnostics`].
//!
//! # Example
//!
//! ```
//! use branch::core::ticket::TicketMatcher;
//!
//! let matcher = TicketMatcher::default();
//! assert!(matcher.is_ticket("PIP-1234"));
//! assert!(matcher.is_ticket("#123"));
//! assert!(!matcher.is_ticket("pip-1234"));
//! ```

use regex::Regex;

/// Ticket patterns used when none are configured.
pub const DEFAULT_TICKET_PATTERNS: &[&str] = &[
    // GitHub issues: #123
    r"^#\d+$",
    // Jira/Linear style: PIP-1234, INFRA-124
    r"^[A-Z]+-\d+$",
    // Underscore variant: PIP_1234
    r"^[A-Z]+_\d+$",
];

/// A pattern string that could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPattern {
    /// The pattern as supplied.
    pub pattern: String,
    /// The compiler's error message.
    pub reason: String,
}

/// A single compiled, whole-token pattern.
#[derive(Debug, Clone)]
struct PatternRule {
    source: String,
    regex: Regex,
}

impl PatternRule {
    /// Compile `pattern` so it only ever matches an entire token.
    ///
    /// The raw pattern must compile on its own; `A)|(B` only compiles once
    /// wrapped, and would then match substrings.
    fn compile(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern)?;
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    fn matches(&self, token: &str) -> bool {
        self.regex.is_match(token)
    }
}

/// Recognizes ticket references such as `PIP-1234` or `#123`.
#[derive(Debug, Clone)]
pub struct TicketMatcher {
    rules: Vec<PatternRule>,
}

impl TicketMatcher {
    /// Build a matcher from pattern strings, silently dropping invalid ones.
    ///
    /// An empty input yields a matcher that recognizes nothing.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_diagnostics(patterns).0
    }

    /// Build a matcher and also return the patterns that failed to compile.
    pub fn with_diagnostics<I, S>(patterns: I) -> (Self, Vec<RejectedPattern>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Vec::new();
        let mut rejected = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            match PatternRule::compile(pattern) {
                Ok(rule) => rules.push(rule),
                Err(e) => rejected.push(RejectedPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        (Self { rules }, rejected)
    }

    /// Check whether `token` is a ticket reference.
    pub fn is_ticket(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        self.rules.iter().any(|rule| rule.matches(token))
    }

    /// Source strings of the active rules, in order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.source.as_str())
    }

    /// Number of active rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if no rule survived compilation.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for TicketMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_TICKET_PATTERNS)
    }
}
