use crate::entry::{Entry, DEFAULT_GROUP};

// ---------------------------------------------------------------------------
// EntryBuilder
// ---------------------------------------------------------------------------

/// Configures the optional fields of an [`Entry`].
///
/// Created via [`Entry::builder`]. Anything not set falls back to the
/// defaults: name = normalized path, group = `"default"`, priority = `0`.
///
/// # Example
///
/// ```rust
/// use named_dirs::Entry;
///
/// let entry = Entry::builder("home/private/config")
///     .name("config")
///     .group("front")
///     .priority(10)
///     .build();
///
/// assert_eq!(entry.path(), "home/private/config/");
/// assert_eq!(entry.name(), "config");
/// ```
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    path:     String,
    name:     Option<String>,
    group:    String,
    priority: i64,
}

impl EntryBuilder {
    pub(crate) fn new(path: impl AsRef<str>) -> Self {
        Self {
            path:     path.as_ref().to_owned(),
            name:     None,
            group:    DEFAULT_GROUP.to_owned(),
            priority: 0,
        }
    }

    /// Register the entry under `name` instead of its path.
    ///
    /// An empty name is treated as unset.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Normalize the path and produce the entry.
    pub fn build(self) -> Entry {
        Entry::from_parts(&self.path, self.name, self.group, self.priority)
    }
}

impl From<&str> for EntryBuilder {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for EntryBuilder {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<EntryBuilder> for Entry {
    fn from(builder: EntryBuilder) -> Self {
        builder.build()
    }
}
