//! core::naming
//!
//! Branch naming rules.
//!
//! # Features
//!
//! - Split raw arguments into an optional ticket and description words
//! - Normalize free text into a branch-safe slug
//! - Assemble `<type>/<ticket>-<description>` branch names
//!
//! Everything here is pure: no I/O, no configuration lookups. The ticket
//! patterns arrive through a [`TicketMatcher`] built by the caller.

use super::ticket::TicketMatcher;

/// Generate a branch name slug from free text.
///
/// - Lowercase
/// - Spaces and underscores become hyphens
/// - Anything outside `[a-z0-9-]` is removed (not replaced)
/// - Runs of hyphens collapse; leading/trailing hyphens are trimmed
///
/// # Example
///
/// ```
/// use branch::core::naming::slugify;
///
/// assert_eq!(slugify("Add user authentication"), "add-user-authentication");
/// assert_eq!(slugify("version 2.0 release"), "version-20-release");
/// assert_eq!(slugify("#123 fix bug"), "123-fix-bug");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .trim()
        .chars()
        .filter_map(|c| match c {
            ' ' | '_' => Some('-'),
            'a'..='z' | '0'..='9' | '-' => Some(c),
            _ => None,
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Assemble a branch name from its type, an optional ticket and description words.
///
/// The ticket (when non-empty) leads the slug. If nothing survives slugging the
/// result is the bare branch type.
///
/// # Example
///
/// ```
/// use branch::core::naming::generate;
///
/// assert_eq!(
///     generate("feat", "PIP-1234", &["implement", "new", "feature"]),
///     "feat/pip-1234-implement-new-feature"
/// );
/// assert_eq!(generate("feat", "", &[] as &[&str]), "feat");
/// ```
pub fn generate<S: AsRef<str>>(branch_type: &str, ticket: &str, words: &[S]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(words.len() + 1);
    if !ticket.is_empty() {
        parts.push(ticket);
    }
    parts.extend(words.iter().map(|w| w.as_ref()));

    let slug = slugify(&parts.join(" "));
    if slug.is_empty() {
        branch_type.to_string()
    } else {
        format!("{}/{}", branch_type, slug)
    }
}

/// Split raw arguments into a ticket and the description words.
///
/// The first argument is the ticket only if `matcher` recognizes it; otherwise
/// every argument is description.
pub fn split_ticket<'a, S: AsRef<str>>(
    args: &'a [S],
    matcher: &TicketMatcher,
) -> (Option<&'a str>, &'a [S]) {
    match args.split_first() {
        Some((first, rest)) if matcher.is_ticket(first.as_ref()) => (Some(first.as_ref()), rest),
        _ => (None, args),
    }
}

/// A parsed branch request: type keyword, optional ticket, description words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSpec {
    /// Branch-type keyword (e.g. "feat")
    pub branch_type: String,
    /// Recognized ticket token, as typed
    pub ticket: Option<String>,
    /// Description words, excluding the ticket
    pub words: Vec<String>,
}

impl BranchSpec {
    /// Build a spec from the words following a branch-type subcommand.
    pub fn from_args<S: AsRef<str>>(
        branch_type: impl Into<String>,
        args: &[S],
        matcher: &TicketMatcher,
    ) -> Self {
        let (ticket, words) = split_ticket(args, matcher);
        Self {
            branch_type: branch_type.into(),
            ticket: ticket.map(str::to_string),
            words: words.iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    /// The branch name this spec describes.
    pub fn branch_name(&self) -> String {
        generate(
            &self.branch_type,
            self.ticket.as_deref().unwrap_or(""),
            &self.words,
        )
    }
}
