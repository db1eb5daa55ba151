//! In-memory translator adapter.

use std::collections::HashMap;

use crate::result::ports::translator::{Translator, TranslatorError, TranslatorResult};

/// Translator backed by an in-memory catalog.
///
/// Entries are keyed by text domain and source message. By default a miss
/// returns the message untouched; a [`strict`](Self::strict) translator fails
/// with [`TranslatorError::MissingTranslation`] instead.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTranslator {
    catalog: HashMap<(Option<String>, String), String>,
    strict: bool,
}

impl InMemoryTranslator {
    /// Creates an empty, lenient translator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty translator that rejects unknown messages.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            catalog: HashMap::new(),
            strict: true,
        }
    }

    /// Adds a translation of `message` for `text_domain`.
    #[must_use]
    pub fn with_translation(
        mut self,
        text_domain: Option<&str>,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.insert(text_domain, message, translation);
        self
    }

    /// Adds or replaces a translation of `message` for `text_domain`.
    pub fn insert(
        &mut self,
        text_domain: Option<&str>,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.catalog.insert(
            (text_domain.map(ToOwned::to_owned), message.into()),
            translation.into(),
        );
    }

    /// Returns the number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Returns `true` when the catalog holds no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

impl Translator for InMemoryTranslator {
    fn translate(&self, message: &str, text_domain: Option<&str>) -> TranslatorResult<String> {
        let key = (text_domain.map(ToOwned::to_owned), message.to_owned());
        if let Some(translation) = self.catalog.get(&key) {
            return Ok(translation.clone());
        }

        tracing::trace!(source_message = message, text_domain, "no catalog entry");
        if self.strict {
            Err(TranslatorError::missing(message, text_domain))
        } else {
            Ok(message.to_owned())
        }
    }
}
