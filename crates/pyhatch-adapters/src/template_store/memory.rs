//! In-memory template store for tests.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use pyhatch_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::PyhatchResult,
};

/// Thread-safe map of template name to text.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplates {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTemplates {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&self, name: impl Into<String>, text: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(name.into(), text.into());
        }
    }

    pub fn remove(&self, name: &str) -> Option<String> {
        self.inner.write().ok()?.remove(name)
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryTemplates {
    fn get(&self, name: &str) -> PyhatchResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::TemplateNotFound {
                name: name.to_string(),
            })?;
        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let store = InMemoryTemplates::new().with("README.md", "# {{NAME}}\n");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("README.md").unwrap(), "# {{NAME}}\n");

        store.remove("README.md");
        assert!(store.is_empty());
        assert!(store.get("README.md").is_err());
    }
}
