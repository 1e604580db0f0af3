use std::collections::HashSet;

use crate::entry::Entry;

/// Decides whether an entry survives a [`Registry::filter`](crate::Registry::filter).
///
/// Implemented for every `Fn(&Entry) -> bool`, so closures work directly.
/// Implement it by hand for reusable or stateful selection logic.
///
/// # Example
///
/// ```rust
/// use named_dirs::{Entry, Matcher};
///
/// struct Absolute;
///
/// impl Matcher for Absolute {
///     fn is_match(&self, entry: &Entry) -> bool {
///         entry.path().starts_with('/')
///     }
/// }
///
/// assert!(Absolute.is_match(&Entry::new("/var/www")));
/// ```
pub trait Matcher {
    /// Returns `true` if this entry should be kept.
    fn is_match(&self, entry: &Entry) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&Entry) -> bool,
{
    fn is_match(&self, entry: &Entry) -> bool {
        self(entry)
    }
}

// ---------------------------------------------------------------------------
// Built-in matchers backing the Registry shorthands
// ---------------------------------------------------------------------------

/// Matches entries whose group is in the set.
pub(crate) struct GroupMatcher {
    groups: HashSet<String>,
}

impl GroupMatcher {
    pub(crate) fn new<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            groups: collect_set(groups),
        }
    }
}

impl Matcher for GroupMatcher {
    fn is_match(&self, entry: &Entry) -> bool {
        self.groups.contains(entry.group())
    }
}

/// Matches entries whose name is (or, when negated, is not) in the set.
pub(crate) struct NameMatcher {
    names:  HashSet<String>,
    negate: bool,
}

impl NameMatcher {
    pub(crate) fn including<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names:  collect_set(names),
            negate: false,
        }
    }

    pub(crate) fn excluding<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names:  collect_set(names),
            negate: true,
        }
    }
}

impl Matcher for NameMatcher {
    fn is_match(&self, entry: &Entry) -> bool {
        self.names.contains(entry.name()) != self.negate
    }
}

fn collect_set<I, S>(items: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().map(|s| s.as_ref().to_owned()).collect()
}
