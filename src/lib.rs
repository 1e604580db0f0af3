//! # named-dirs
//!
//! Look up directories by name instead of hardcoding paths.
//!
//! A [`Registry`] maps logical names to [`Entry`] values: a normalized
//! directory path tagged with a group and a priority. Lookups are exact-match
//! by name; selection and ordering (`group`, `only`, `except`, `sort`, ...)
//! return new registries and leave the original alone.
//!
//! named-dirs only manages path strings. It never creates, reads, or checks
//! directories on disk; that is left to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use named_dirs::{Entry, RegistryError};
//!
//! let mut dirs = named_dirs::registry();
//! dirs.add_path(Entry::builder("app/views").name("views").group("front").priority(10))
//!     .add_path(Entry::builder("app/cache").name("cache").group("storage").priority(5))
//!     .add_path(Entry::builder(r"app\config\").name("config").group("front").priority(15));
//!
//! assert_eq!(dirs.get("config").unwrap(), "app/config/");
//!
//! let front = dirs.group("front").sort();
//! assert_eq!(front.names().collect::<Vec<_>>(), ["config", "views"]);
//!
//! // Missing names are an error the caller can fall back from.
//! let logs = match dirs.get("logs") {
//!     Ok(path) => path.to_owned(),
//!     Err(RegistryError::NotFound(_)) => "/tmp/".to_owned(),
//! };
//! assert_eq!(logs, "/tmp/");
//! ```
//!
//! # Custom selection
//!
//! [`Registry::filter`] takes any closure over `&Entry`; [`Registry::sort_by`]
//! takes any comparator:
//!
//! ```rust
//! use named_dirs::Registry;
//!
//! let dirs: Registry = ["srv/b", "srv/a", "tmp/c"]
//!     .into_iter()
//!     .map(named_dirs::Entry::new)
//!     .collect();
//!
//! let srv = dirs
//!     .filter(|e| e.path().starts_with("srv/"))
//!     .sort_by(|a, b| a.name().cmp(b.name()));
//!
//! assert_eq!(srv.names().collect::<Vec<_>>(), ["srv/a/", "srv/b/"]);
//! ```
//!
//! Implement [`Matcher`] for reusable selection logic and pass it to
//! [`Registry::matching`].

#![forbid(unsafe_code)]

mod builder;
mod config;
mod entry;
mod error;
mod registry;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::EntryBuilder;
pub use config::{EntryConfig, RegistryConfig};
pub use entry::{Entry, DEFAULT_GROUP};
pub use error::RegistryError;
pub use registry::Registry;
pub use traits::Matcher;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new, empty [`Registry`].
///
/// # Example
///
/// ```rust
/// let mut dirs = named_dirs::registry();
/// dirs.add_path("home/private/views");
///
/// assert!(dirs.has("home/private/views/"));
/// ```
pub fn registry() -> Registry {
    Registry::default()
}
