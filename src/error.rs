use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("directory [{0}] not found")]
    NotFound(String),
}

impl RegistryError {
    /// The name that was looked up.
    /// Callers use this to pick a fallback directory without matching on variants.
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound(name) => name,
        }
    }
}
