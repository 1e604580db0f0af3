use std::cmp::Ordering;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::builder::EntryBuilder;
use crate::entry::Entry;
use crate::error::RegistryError;
use crate::traits::{GroupMatcher, Matcher, NameMatcher};

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// An ordered collection of [`Entry`] values keyed by name.
///
/// `add` and `add_path` mutate in place. Every other operation
/// (`filter`, `group`, `groups`, `only`, `except`, `sort`, `sort_by`) returns
/// a new `Registry` and leaves the receiver as it was. Entries are shared
/// between the two through `Arc`; the maps are independent.
///
/// Adding an entry under a name that is already present replaces it in
/// place: the new entry takes over the old one's position.
///
/// # Example
///
/// ```rust
/// use named_dirs::{Entry, Registry};
///
/// let mut dirs = Registry::new();
/// dirs.add_path(Entry::builder("home/private/views").name("views").priority(10))
///     .add_path(Entry::builder("home/private/cache").name("cache").priority(5));
///
/// assert_eq!(dirs.get("views").unwrap(), "home/private/views/");
/// assert_eq!(dirs.sort().names().collect::<Vec<_>>(), ["views", "cache"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: IndexMap<String, Arc<Entry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert `entry` under its name, replacing any entry already there.
    pub fn add(&mut self, entry: Entry) -> &mut Self {
        self.insert(Arc::new(entry));
        self
    }

    /// Build an entry from a path (or an [`EntryBuilder`]) and add it.
    ///
    /// ```rust
    /// use named_dirs::{Entry, Registry};
    ///
    /// let mut dirs = Registry::new();
    /// dirs.add_path("home/private/logs")
    ///     .add_path(Entry::builder("home/private/config").name("config").group("front"));
    ///
    /// assert!(dirs.has("home/private/logs/"));
    /// assert_eq!(dirs.get_entry("config").unwrap().group(), "front");
    /// ```
    pub fn add_path(&mut self, entry: impl Into<EntryBuilder>) -> &mut Self {
        self.add(entry.into().build())
    }

    fn insert(&mut self, entry: Arc<Entry>) {
        let name = entry.name().to_owned();
        match self.entries.insert(name, Arc::clone(&entry)) {
            Some(previous) => debug!(
                name = entry.name(),
                old = previous.path(),
                new = entry.path(),
                "replaced directory"
            ),
            None => debug!(
                name = entry.name(),
                path = entry.path(),
                group = entry.group(),
                priority = entry.priority(),
                "added directory"
            ),
        }
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The full name → entry mapping, in iteration order.
    pub fn all(&self) -> &IndexMap<String, Arc<Entry>> {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values().map(Arc::as_ref)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The normalized path registered under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if no entry has that name.
    pub fn get(&self, name: &str) -> Result<&str, RegistryError> {
        self.get_entry(name).map(Entry::path)
    }

    /// The entry registered under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if no entry has that name.
    pub fn get_entry(&self, name: &str) -> Result<&Entry, RegistryError> {
        self.entries
            .get(name)
            .map(Arc::as_ref)
            .ok_or_else(|| RegistryError::NotFound(name.to_owned()))
    }

    // ── Transforms ────────────────────────────────────────────────────────

    /// A new registry holding the entries for which `predicate` returns `true`,
    /// in their current order.
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&Entry) -> bool,
    {
        self.matching(&predicate)
    }

    /// Like [`filter`](Self::filter), taking any [`Matcher`].
    pub fn matching(&self, matcher: &impl Matcher) -> Self {
        let entries: IndexMap<_, _> = self
            .entries
            .iter()
            .filter(|(_, entry)| matcher.is_match(entry))
            .map(|(name, entry)| (name.clone(), Arc::clone(entry)))
            .collect();

        trace!(from = self.entries.len(), to = entries.len(), "filtered registry");
        Self { entries }
    }

    /// Entries whose group is `group`.
    pub fn group(&self, group: &str) -> Self {
        self.matching(&GroupMatcher::new([group]))
    }

    /// Entries whose group is any of `groups`.
    pub fn groups<I, S>(&self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.matching(&GroupMatcher::new(groups))
    }

    /// Entries whose name is in `names`.
    pub fn only<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.matching(&NameMatcher::including(names))
    }

    /// Entries whose name is not in `names`.
    pub fn except<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.matching(&NameMatcher::excluding(names))
    }

    /// A new registry ordered by priority, highest first.
    ///
    /// The sort is stable: entries with equal priority keep their relative order.
    pub fn sort(&self) -> Self {
        self.sort_by(by_priority)
    }

    /// A new registry ordered by `compare`. Stable.
    pub fn sort_by<F>(&self, mut compare: F) -> Self
    where
        F: FnMut(&Entry, &Entry) -> Ordering,
    {
        let mut entries = self.entries.clone();
        entries.sort_by(|_, a, _, b| compare(a, b));

        trace!(len = entries.len(), "sorted registry");
        Self { entries }
    }
}

/// Default ordering: descending priority.
fn by_priority(a: &Entry, b: &Entry) -> Ordering {
    b.priority().cmp(&a.priority())
}

// ---------------------------------------------------------------------------
// Construction and iteration
// ---------------------------------------------------------------------------

impl FromIterator<Entry> for Registry {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<Entry> for Registry {
    fn extend<T: IntoIterator<Item = Entry>>(&mut self, iter: T) {
        for entry in iter {
            self.add(entry);
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Entry;
    type IntoIter = Box<dyn Iterator<Item = &'a Entry> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    #[traced_test]
    fn logs_additions_and_replacements() {
        let mut dirs = Registry::new();
        dirs.add(Entry::builder("home/private/views").name("views").build());
        assert!(logs_contain("added directory"));

        dirs.add(Entry::builder("home/public/views").name("views").build());
        assert!(logs_contain("replaced directory"));
    }

    #[test]
    fn default_ordering_is_descending_priority() {
        let low = Entry::builder("a").priority(-3).build();
        let high = Entry::builder("b").priority(7).build();

        assert_eq!(by_priority(&high, &low), Ordering::Less);
        assert_eq!(by_priority(&low, &high), Ordering::Greater);
        assert_eq!(by_priority(&low, &low), Ordering::Equal);
    }
}
