use serde::Deserialize;

use crate::entry::{Entry, DEFAULT_GROUP};
use crate::registry::Registry;

/// A directory as written in a configuration file.
///
/// Omitted fields take the same defaults as [`Entry::new`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntryConfig {
    pub path: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_group")]
    pub group: String,

    #[serde(default)]
    pub priority: i64,
}

fn default_group() -> String {
    DEFAULT_GROUP.to_owned()
}

impl From<EntryConfig> for Entry {
    fn from(config: EntryConfig) -> Self {
        Entry::from_parts(&config.path, config.name, config.group, config.priority)
    }
}

/// A set of directories as written in a configuration file.
///
/// In TOML each directory is a `[[dir]]` table:
///
/// ```rust
/// use named_dirs::{Registry, RegistryConfig};
///
/// let config: RegistryConfig = toml::from_str(r#"
///     [[dir]]
///     path = "home/private/views"
///     name = "views"
///     priority = 10
///
///     [[dir]]
///     path = "home/private/cache"
///     name = "cache"
///     group = "storage"
/// "#).unwrap();
///
/// let dirs = Registry::from(config);
/// assert_eq!(dirs.get("cache").unwrap(), "home/private/cache/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistryConfig {
    #[serde(default, rename = "dir")]
    pub dirs: Vec<EntryConfig>,
}

impl From<RegistryConfig> for Registry {
    fn from(config: RegistryConfig) -> Self {
        config.dirs.into_iter().map(Entry::from).collect()
    }
}
