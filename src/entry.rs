use std::fmt;
use std::path::Path;

use crate::builder::EntryBuilder;

/// Group assigned to entries that don't name one.
pub const DEFAULT_GROUP: &str = "default";

/// A single named directory.
///
/// Immutable once built. The path is normalized at construction: backslashes
/// become `/`, repeated separators collapse to one, and the path always ends
/// with exactly one trailing `/`. No filesystem access happens; the path is
/// just a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    path:     String,
    name:     String,
    group:    String,
    priority: i64,
}

impl Entry {
    /// Create an entry with the default name (its own path), group and priority.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self::builder(path).build()
    }

    /// Start configuring an entry for `path`.
    pub fn builder(path: impl AsRef<str>) -> EntryBuilder {
        EntryBuilder::new(path)
    }

    pub(crate) fn from_parts(
        path: &str,
        name: Option<String>,
        group: String,
        priority: i64,
    ) -> Self {
        let path = normalize(path);
        let name = match name {
            Some(n) if !n.is_empty() => n,
            _                        => path.clone(),
        };

        Self {
            path,
            name,
            group,
            priority,
        }
    }

    /// The normalized path, always ending with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The name this entry is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Ordering hint. Higher sorts first under [`Registry::sort`](crate::Registry::sort).
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// The path as a [`Path`], for handing to filesystem APIs.
    pub fn as_std_path(&self) -> &Path {
        Path::new(&self.path)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Map `\` to `/`, collapse separator runs, and end with exactly one `/`.
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 1);

    for c in raw.chars() {
        let c = if c == '\\' { '/' } else { c };
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }

    if out.ends_with('/') {
        out.pop();
    }
    out.push('/');
    out
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn appends_trailing_slash() {
        assert_eq!(normalize("home/private/views"), "home/private/views/");
        assert_eq!(normalize("home/private/views/"), "home/private/views/");
    }

    #[test]
    fn converts_backslashes() {
        assert_eq!(normalize(r"C:\app\storage\"), "C:/app/storage/");
        assert_eq!(normalize(r"a\\b"), "a/b/");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(normalize("/var//www///html////"), "/var/www/html/");
        assert_eq!(normalize(r"a/\/b"), "a/b/");
    }

    #[test]
    fn degenerate_inputs_become_root() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(r"\\//"), "/");
    }
}
